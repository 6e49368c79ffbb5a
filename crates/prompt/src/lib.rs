//! # Prompt
//!
//! Conversation turns sent to the completion provider and the default system instruction.
//!
//! A [`ChatMessage`] maps one-to-one to an element of the OpenAI `messages` array. Turns are
//! immutable once built: histories clone them in and never edit them in place.

use std::fmt;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn is_system(&self) -> bool {
        self.role == MessageRole::System
    }
}

/// Placeholder in a system prompt template replaced with the output character limit.
pub const MAX_OUTPUT_CHARS_PLACEHOLDER: &str = "{max_output_chars}";

/// Default system instruction template: a short, helpful assistant that keeps replies under
/// the output character limit.
pub const DEFAULT_SYSTEM_PROMPT_TEMPLATE: &str = "Ти корисний та короткий асистент. \
Відповідай максимум {max_output_chars} символів. \
Не перевищуй це обмеження.";

/// Renders a system prompt template, substituting [`MAX_OUTPUT_CHARS_PLACEHOLDER`].
/// Templates without the placeholder are returned unchanged.
pub fn render_system_prompt(template: &str, max_output_chars: usize) -> String {
    template.replace(MAX_OUTPUT_CHARS_PLACEHOLDER, &max_output_chars.to_string())
}

/// The default system prompt for the given output character limit.
pub fn default_system_prompt(max_output_chars: usize) -> String {
    render_system_prompt(DEFAULT_SYSTEM_PROMPT_TEMPLATE, max_output_chars)
}
