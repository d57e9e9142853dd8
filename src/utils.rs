//! Вспомогательные утилиты

/// Безопасно обрезает строку до max_chars символов (не байт!).
/// Длинные строки получают "..." в конце.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let taken: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", taken)
    }
}
