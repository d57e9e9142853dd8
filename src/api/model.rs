//! Модели данных сервиса словаря

use serde::{Deserialize, Serialize};

/// Одна запись словаря
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordEntry {
    /// Слово (сленг)
    pub title: String,
    /// Перевод
    pub translate: String,
    /// Счётчик употреблений, заполняется сервером
    pub quantity: i64,
}

/// Тело ответа списочного эндпоинта: `{ "words": [...] }`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WordsResponse {
    pub words: Vec<WordEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_response_deserialization() {
        let json = r#"{"words":[{"title":"gank","translate":"групповое нападение","quantity":5}]}"#;
        let parsed: WordsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.words.len(), 1);
        assert_eq!(parsed.words[0].title, "gank");
        assert_eq!(parsed.words[0].translate, "групповое нападение");
        assert_eq!(parsed.words[0].quantity, 5);
    }

    #[test]
    fn test_empty_words_response() {
        let parsed: WordsResponse = serde_json::from_str(r#"{"words":[]}"#).unwrap();
        assert!(parsed.words.is_empty());
    }

    #[test]
    fn test_words_response_missing_field_is_error() {
        // Ответ без поля words считается некорректным
        let result: Result<WordsResponse, _> = serde_json::from_str(r#"{"items":[]}"#);
        assert!(result.is_err());
    }
}
