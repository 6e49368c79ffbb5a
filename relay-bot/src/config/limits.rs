//! Relay limits: input/output character caps, history depth, system prompt.

use anyhow::Result;
use std::env;

use super::env_parse;

pub const DEFAULT_MAX_INPUT_CHARS: usize = 1000;
pub const DEFAULT_MAX_OUTPUT_CHARS: usize = 800;
/// History depth including the system turn.
pub const DEFAULT_MAX_HISTORY: usize = 8;

/// Limits applied by the relay handler and the session store.
#[derive(Debug, Clone)]
pub struct RelayLimits {
    /// MAX_INPUT_CHARS: longer messages are rejected with a warning.
    pub max_input_chars: usize,
    /// MAX_OUTPUT_CHARS: longer replies are cut and get an ellipsis.
    pub max_output_chars: usize,
    /// MAX_HISTORY: turns kept per user, system turn included.
    pub max_history: usize,
    /// SYSTEM_PROMPT (rendered with `{max_output_chars}`), or the default prompt.
    pub system_prompt: String,
}

impl Default for RelayLimits {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            max_output_chars: DEFAULT_MAX_OUTPUT_CHARS,
            max_history: DEFAULT_MAX_HISTORY,
            system_prompt: prompt::default_system_prompt(DEFAULT_MAX_OUTPUT_CHARS),
        }
    }
}

impl RelayLimits {
    pub fn from_env() -> Result<Self> {
        let max_input_chars = env_parse("MAX_INPUT_CHARS", DEFAULT_MAX_INPUT_CHARS)?;
        let max_output_chars = env_parse("MAX_OUTPUT_CHARS", DEFAULT_MAX_OUTPUT_CHARS)?;
        let max_history = env_parse("MAX_HISTORY", DEFAULT_MAX_HISTORY)?;
        let system_prompt = env::var("SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|template| prompt::render_system_prompt(&template, max_output_chars))
            .unwrap_or_else(|| prompt::default_system_prompt(max_output_chars));

        Ok(Self {
            max_input_chars,
            max_output_chars,
            max_history,
            system_prompt,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_input_chars == 0 {
            anyhow::bail!("MAX_INPUT_CHARS must be greater than 0");
        }
        if self.max_output_chars == 0 {
            anyhow::bail!("MAX_OUTPUT_CHARS must be greater than 0");
        }
        // system turn + at least one conversation turn
        if self.max_history < 2 {
            anyhow::bail!(
                "MAX_HISTORY must be at least 2 (got {})",
                self.max_history
            );
        }
        Ok(())
    }
}
