//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

/// Default model id.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
/// Default cap on generated output tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn max_tokens(&self) -> u32;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
    pub llm_max_tokens: u32,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
    fn max_tokens(&self) -> u32 {
        self.llm_max_tokens
    }
}

impl EnvLlmConfig {
    /// Load from environment variables. `OPENAI_API_KEY` is required; `OPENAI_BASE_URL`,
    /// `MODEL` and `MAX_TOKENS` fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .context("OPENAI_API_KEY not set")?;
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| openai_client::DEFAULT_BASE_URL.to_string());
        let llm_model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let llm_max_tokens = match env::var("MAX_TOKENS") {
            Ok(s) => s
                .trim()
                .parse::<u32>()
                .with_context(|| format!("MAX_TOKENS is not a positive integer: {}", s))?,
            Err(_) => DEFAULT_MAX_TOKENS,
        };
        if llm_max_tokens == 0 {
            anyhow::bail!("MAX_TOKENS must be greater than 0");
        }
        Ok(Self {
            openai_api_key,
            openai_base_url,
            llm_model,
            llm_max_tokens,
        })
    }
}
