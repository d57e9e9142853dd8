//! Состояние списка слов
//!
//! Список принадлежит редьюсеру: события применяются заменой целиком,
//! отдельные записи локально не мутируются.

use crate::api::{ApiEvent, WordEntry};

/// Список слов, каким его в последний раз отдал сервис
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    words: Vec<WordEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Текущий список; порядок - как вернул сервис
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Применить событие. Список меняется только полной заменой на
    /// `WordsLoaded`; любое другое событие оставляет его нетронутым.
    pub fn apply(&mut self, event: &ApiEvent) {
        match event {
            ApiEvent::WordsLoaded(words) => {
                self.words = words.clone();
            }
            ApiEvent::FetchFailed(_) | ApiEvent::WordCreated(_) | ApiEvent::CreateFailed(_, _) => {}
        }
    }
}
