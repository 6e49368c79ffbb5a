//! RelayBot assembly and the `run_bot` entry point.

use anyhow::Result;
use handler_chain::HandlerChain;
use llm_client::{LlmClient, LlmConfig};
use relay_core::{init_tracing, Bot as CoreBot, HandlerResponse, Message as CoreMessage, ToCoreMessage};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::components::{
    build_bot_components, build_handler_chain, create_session_store, BotComponents,
};
use crate::config::BotConfig;
use crate::telegram::{run_repl, TelegramMessageWrapper};

/// RelayBot: config, components, and handler chain.
pub struct RelayBot {
    pub config: BotConfig,
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl RelayBot {
    /// Builds components from config. Overrides replace the Telegram sender and the LLM client.
    pub fn new(
        config: BotConfig,
        bot_override: Option<Arc<dyn CoreBot>>,
        llm_override: Option<Arc<dyn LlmClient>>,
    ) -> Result<Self> {
        let sessions = create_session_store(&config);
        let components = build_bot_components(&config, sessions, bot_override, llm_override)?;
        let handler_chain = build_handler_chain(&config, &components);
        Ok(Self {
            config,
            components,
            handler_chain,
        })
    }

    /// Handles one Telegram message (callable from tests).
    pub async fn handle_message(&self, msg: &teloxide::types::Message) -> Result<HandlerResponse> {
        let core_msg = TelegramMessageWrapper(msg).to_core();
        self.handle_core_message(&core_msg).await
    }

    /// Drives the handler chain with a core Message.
    pub async fn handle_core_message(&self, message: &CoreMessage) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            input_len = message.content.chars().count(),
            "Handling message"
        );
        self.handler_chain.handle(message).await.map_err(|e| {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
            anyhow::anyhow!(e)
        })
    }
}

/// Main entry: validate config, init logging, build components and chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        model = %config.llm().model(),
        max_input_chars = config.limits().max_input_chars,
        max_output_chars = config.limits().max_output_chars,
        max_history = config.limits().max_history,
        "Initializing bot"
    );

    let bot = RelayBot::new(config, None, None)?;
    let teloxide_bot = bot.components.teloxide_bot.clone();
    let bot_username = bot.components.bot_username.clone();

    info!("Bot started successfully");

    run_repl(teloxide_bot, bot.handler_chain, bot_username).await
}
