//! События API для GUI

use super::model::WordEntry;

/// События сетевых операций для GUI
#[derive(Debug, Clone)]
pub enum ApiEvent {
    // === Чтение списка ===

    /// Список слов получен, заменяет текущий целиком
    WordsLoaded(Vec<WordEntry>),
    /// Список получить не удалось (ошибка)
    FetchFailed(String),

    // === Создание слова ===

    /// Сервис принял новое слово (title)
    WordCreated(String),
    /// Сервис отклонил слово или запрос не дошёл (title, ошибка)
    CreateFailed(String, String),
}
