//! BotConfig: BaseConfig + RelayLimits + LLM config. Use load() for env-based loading.

use anyhow::Result;
use llm_client::{EnvLlmConfig, LlmConfig};

use super::{BaseConfig, RelayLimits};

/// Full bot config. `load()` reads env and validates, so missing credentials fail at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub limits: RelayLimits,
    pub llm: EnvLlmConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides TELEGRAM_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let llm = EnvLlmConfig::from_env()?;
        let limits = RelayLimits::from_env()?;
        let config = Self { base, limits, llm };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.limits.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn limits(&self) -> &RelayLimits {
        &self.limits
    }
    pub fn llm(&self) -> &dyn LlmConfig {
        &self.llm
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
