//! Модуль интернационализации (i18n)
//!
//! Поддерживаемые языки: русский, английский

mod translations;

/// Поддерживаемые языки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Russian,
    English,
}

impl Language {
    /// Название языка на этом языке
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Russian => "Русский",
            Language::English => "English",
        }
    }

    /// Флаг/эмодзи для языка
    pub fn flag(&self) -> &'static str {
        match self {
            Language::Russian => "🇷🇺",
            Language::English => "🇬🇧",
        }
    }

    /// Короткий код языка
    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
        }
    }

    /// Все доступные языки
    pub fn all() -> &'static [Language] {
        &[Language::Russian, Language::English]
    }
}

/// Структура с переводами всех строк интерфейса
#[derive(Debug, Clone)]
pub struct Translations {
    // === Заголовки ===
    pub app_title: &'static str,
    pub words_title: &'static str,

    // === Форма создания ===
    pub create_title: &'static str,
    pub word_label: &'static str,
    pub translate_label: &'static str,
    pub quantity_label: &'static str,
    pub create_button: &'static str,

    // === Список ===
    pub refresh: &'static str,
    pub no_words: &'static str,

    // === Лог ===
    pub log: &'static str,
    pub clear: &'static str,
    pub log_empty: &'static str,
}

impl Translations {
    /// Получить переводы для указанного языка
    pub fn for_language(lang: Language) -> &'static Translations {
        match lang {
            Language::Russian => &translations::RU,
            Language::English => &translations::EN,
        }
    }
}

/// Глобальный доступ к текущему языку (для удобства)
pub fn t(lang: Language) -> &'static Translations {
    Translations::for_language(lang)
}
