//! Состояние приложения

use dota_dictionary::api::ApiEvent;
use dota_dictionary::i18n::{t, Language, Translations};
use dota_dictionary::store::Dictionary;
use tokio::sync::mpsc;

/// Главная структура приложения
pub struct App {
    // Язык интерфейса
    pub language: Language,

    // === Словарь ===
    /// Список слов, последняя успешная загрузка с сервиса
    pub dictionary: Dictionary,

    // === Форма создания ===
    /// Текущее значение поля "слово" (controlled input)
    pub title_input: String,
    /// Текущее значение поля "перевод" (controlled input)
    pub translate_input: String,

    // === Общее состояние ===
    pub is_fetching: bool,
    pub is_creating: bool,
    pub status_message: String,
    pub log_messages: Vec<String>,

    // === Runtime ===
    pub runtime: tokio::runtime::Runtime,
    pub client: reqwest::Client,
    pub api_tx: mpsc::UnboundedSender<ApiEvent>,
    pub api_rx: Option<mpsc::UnboundedReceiver<ApiEvent>>,
}

impl App {
    pub fn new() -> Self {
        // Канал для событий сетевых задач
        let (api_tx, api_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            language: Language::default(),
            dictionary: Dictionary::new(),
            title_input: String::new(),
            translate_input: String::new(),
            is_fetching: false,
            is_creating: false,
            status_message: String::new(),
            log_messages: Vec::new(),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            client: reqwest::Client::new(),
            api_tx,
            api_rx: Some(api_rx),
        };

        // Первая загрузка списка при старте
        app.start_refresh();
        app
    }

    /// Добавить сообщение в лог
    pub fn log(&mut self, message: impl Into<String>) {
        self.log_messages.push(message.into());
    }

    /// Идёт ли сейчас сетевая операция
    pub fn is_busy(&self) -> bool {
        self.is_fetching || self.is_creating
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Получить переводы для текущего языка
    pub fn t(&self) -> &'static Translations {
        t(self.language)
    }
}
