//! Таблицы переводов интерфейса

use super::Translations;

/// Русский (язык по умолчанию)
pub static RU: Translations = Translations {
    app_title: "DotaDictionary",
    words_title: "Словарь",

    create_title: "Создать",
    word_label: "Слово",
    translate_label: "Перевод",
    quantity_label: "Частота",
    create_button: "Создать слово",

    refresh: "Обновить",
    no_words: "Словарь пуст",

    log: "Лог",
    clear: "Очистить",
    log_empty: "Лог пуст",
};

/// English
pub static EN: Translations = Translations {
    app_title: "DotaDictionary",
    words_title: "Dictionary",

    create_title: "Create",
    word_label: "Word",
    translate_label: "Translation",
    quantity_label: "Count",
    create_button: "Create word",

    refresh: "Refresh",
    no_words: "No words yet",

    log: "Log",
    clear: "Clear",
    log_empty: "Log is empty",
};
