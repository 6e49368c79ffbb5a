//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use handler_chain::HandlerChain;
use llm_client::{LlmClient, LlmConfig, OpenAILlmClient};
use relay_core::Bot as CoreBot;
use session::{InMemorySessionStore, SessionConfig, SessionStore, UserLocks};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::handlers::{CommandHandler, RelayHandler};
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for run_bot / RelayBot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    /// Filled by `run_repl` from get_me; used to match `/cmd@bot`.
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    /// Bot used by handlers to send replies (the Telegram adapter unless overridden).
    pub bot: Arc<dyn CoreBot>,
    pub llm_client: Arc<dyn LlmClient>,
    pub sessions: Arc<dyn SessionStore>,
    /// Shared by the command and relay handlers so `/reset` and a relay never interleave.
    pub user_locks: UserLocks,
}

/// Creates teloxide::Bot, pointing it at TELEGRAM_API_URL when set.
fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token().to_string());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Creates the in-memory session store seeded with the configured system prompt.
pub fn create_session_store(config: &BotConfig) -> Arc<dyn SessionStore> {
    let limits = config.limits();
    info!(max_history = limits.max_history, "Using in-memory session store");
    Arc::new(InMemorySessionStore::new(SessionConfig::new(
        limits.system_prompt.clone(),
        limits.max_history,
    )))
}

/// Builds BotComponents. `bot_override` and `llm_override` replace the Telegram adapter and the
/// OpenAI client (tests inject mocks there).
#[instrument(skip(config, sessions, bot_override, llm_override))]
pub fn build_bot_components(
    config: &BotConfig,
    sessions: Arc<dyn SessionStore>,
    bot_override: Option<Arc<dyn CoreBot>>,
    llm_override: Option<Arc<dyn LlmClient>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config);
    let bot_username = Arc::new(tokio::sync::RwLock::new(None));

    let bot: Arc<dyn CoreBot> = match bot_override {
        Some(bot) => bot,
        None => Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    };

    let llm_client = match llm_override {
        Some(client) => client,
        None => {
            let client = OpenAILlmClient::from_config(config.llm());
            info!(
                model = %client.model(),
                base_url = %config.llm().base_url(),
                "LLM client configured"
            );
            Arc::new(client) as Arc<dyn LlmClient>
        }
    };

    Ok(BotComponents {
        teloxide_bot,
        bot_username,
        bot,
        llm_client,
        sessions,
        user_locks: UserLocks::new(),
    })
}

/// Builds the handler chain: commands first, then the relay for plain text.
pub fn build_handler_chain(config: &BotConfig, components: &BotComponents) -> HandlerChain {
    let limits = config.limits().clone();
    HandlerChain::new()
        .add_handler(Arc::new(CommandHandler::new(
            components.bot.clone(),
            components.sessions.clone(),
            components.user_locks.clone(),
            components.bot_username.clone(),
            limits.clone(),
        )))
        .add_handler(Arc::new(RelayHandler::new(
            components.bot.clone(),
            components.llm_client.clone(),
            components.sessions.clone(),
            components.user_locks.clone(),
            limits,
        )))
}
