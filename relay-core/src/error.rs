//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error: transport failures and handler failures.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("State error: {0}")]
    State(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_converts_into_bot_error() {
        let err: BotError = HandlerError::State("session store unavailable".to_string()).into();
        assert!(matches!(err, BotError::Handler(HandlerError::State(_))));
        assert_eq!(
            err.to_string(),
            "Handler error: State error: session store unavailable"
        );
    }

    #[test]
    fn test_bot_error_display() {
        let err = BotError::Bot("chat not found".to_string());
        assert_eq!(err.to_string(), "Bot error: chat not found");
    }
}
