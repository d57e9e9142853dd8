//! Dota Dictionary - клиент словаря дотерского сленга
//!
//! Общая библиотека для GUI клиента.
//!
//! # Модули
//! - `api` - HTTP доступ к удалённому сервису словаря
//! - `store` - состояние списка слов (редьюсер)
//! - `i18n` - интернационализация (русский, английский)
//! - `utils` - вспомогательные функции

pub mod api;
pub mod i18n;
pub mod store;
pub mod utils;
