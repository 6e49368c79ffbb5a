//! Config: base (Telegram + log), relay limits, and LLM (from llm-client). Loaded from env.

mod base;
mod bot_config;
mod limits;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use limits::{
    RelayLimits, DEFAULT_MAX_HISTORY, DEFAULT_MAX_INPUT_CHARS, DEFAULT_MAX_OUTPUT_CHARS,
};

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Parses an optional env var, falling back to `default` when unset. A set but unparsable value is an error.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        Err(_) => Ok(default),
    }
}
