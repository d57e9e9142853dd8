//! Действия приложения

use super::state::App;
use dota_dictionary::api::{self, API_BASE};

impl App {
    // === Чтение списка ===

    /// Запросить у сервиса свежий список слов
    pub fn start_refresh(&mut self) {
        self.is_fetching = true;

        let client = self.client.clone();
        let tx = self.api_tx.clone();
        self.runtime.spawn(async move {
            api::refresh_words(client, API_BASE.to_string(), tx).await;
        });
    }

    // === Создание слова ===

    /// Отправить слово из формы. Значения уходят как есть,
    /// без обрезки и валидации - решает сервис
    pub fn submit_word(&mut self) {
        let title = self.title_input.clone();
        let translate = self.translate_input.clone();

        self.is_creating = true;
        self.status_message = format!("Отправка «{}»...", title);
        self.log(format!("📤 Создаём слово «{}»", title));

        let client = self.client.clone();
        let tx = self.api_tx.clone();
        self.runtime.spawn(async move {
            api::submit_word(client, API_BASE.to_string(), title, translate, tx).await;
        });
    }
}
