//! User-facing texts sent back to Telegram.

/// Appended to replies cut at the output character limit.
pub const ELLIPSIS: &str = "...";

/// Reply to `/reset`.
pub const RESET_MESSAGE: &str = "Памʼять очищена 🧹";

/// Generic reply when the completion call fails.
pub const FAILURE_MESSAGE: &str = "⚠️ Помилка сервера.";

/// Reply to `/start`: bot status and both character limits.
pub fn start_message(max_input_chars: usize, max_output_chars: usize) -> String {
    format!(
        "🤖 Бот онлайн.\nЛіміт повідомлення: {} символів.\nМаксимальна довжина відповіді: {} символів.",
        max_input_chars, max_output_chars
    )
}

/// Warning for messages over the input character limit.
pub fn input_too_long_message(max_input_chars: usize) -> String {
    format!(
        "⚠️ Повідомлення занадто довге.\nМаксимум {} символів.",
        max_input_chars
    )
}

/// Cuts `text` to `max_chars` characters and appends [`ELLIPSIS`]; shorter text is returned as is.
/// Counts Unicode scalar values, not bytes.
pub fn truncate_reply(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}
