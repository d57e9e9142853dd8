//! HTTP доступ к сервису словаря - модели, запросы и события для GUI

mod client;
mod events;
mod model;

pub use client::{
    create_word, fetch_words, handle_response, interpret_response, refresh_words, submit_word,
    ApiError, ApiResult, API_BASE,
};
pub use events::ApiEvent;
pub use model::{WordEntry, WordsResponse};
