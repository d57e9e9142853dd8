//! Обработка событий от API

use super::state::App;
use dota_dictionary::api::ApiEvent;

impl App {
    /// Обработать все ожидающие события
    pub fn process_events(&mut self) {
        // Собираем все события в вектор, чтобы освободить borrow
        let events: Vec<ApiEvent> = {
            let Some(rx) = &mut self.api_rx else { return };
            let mut events = Vec::new();
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
            events
        };

        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: ApiEvent) {
        // Список меняется только здесь, через редьюсер
        self.dictionary.apply(&event);

        match event {
            ApiEvent::WordsLoaded(words) => self.on_words_loaded(words.len()),
            ApiEvent::FetchFailed(err) => self.on_fetch_failed(err),
            ApiEvent::WordCreated(title) => self.on_word_created(title),
            ApiEvent::CreateFailed(title, err) => self.on_create_failed(title, err),
        }
    }

    // === Чтение списка ===

    fn on_words_loaded(&mut self, count: usize) {
        self.is_fetching = false;
        self.status_message = format!("Слов в словаре: {}", count);
    }

    fn on_fetch_failed(&mut self, err: String) {
        self.is_fetching = false;
        // Список остаётся прежним, ошибка уходит в лог
        self.status_message = "Не удалось обновить список".to_string();
        self.log(format!("❌ Ошибка загрузки: {}", err));
    }

    // === Создание слова ===

    fn on_word_created(&mut self, title: String) {
        self.is_creating = false;
        self.status_message = format!("Слово «{}» добавлено", title);
        self.log(format!("✅ Добавлено: «{}»", title));

        // Форма очищается только после подтверждения сервиса
        self.title_input.clear();
        self.translate_input.clear();

        // Запись появится в списке после перечитывания
        self.start_refresh();
    }

    fn on_create_failed(&mut self, title: String, err: String) {
        self.is_creating = false;
        self.status_message = format!("Слово «{}» не принято", title);
        self.log(format!("❌ Ошибка создания «{}»: {}", title, err));

        // Список всё равно перечитываем - показываем фактическое
        // состояние сервиса, а не догадку
        self.start_refresh();
    }
}
