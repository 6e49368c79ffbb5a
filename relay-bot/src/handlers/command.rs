//! `/start` and `/reset`. Other commands are swallowed without a reply.

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, BotError, Handler, HandlerError, HandlerResponse, Message, Result};
use session::{SessionStore, UserLocks};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use crate::config::RelayLimits;
use crate::messages;

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Reset,
    Unknown(String),
}

/// Parses `/name`, `/name@bot` and `/name args`. Returns `None` for non-commands and for
/// commands addressed to a different bot (`/start@other_bot`) when `bot_username` is known.
/// Names are matched case-insensitively; arguments are ignored.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<BotCommand> {
    let head = text.strip_prefix('/')?.split_whitespace().next()?;
    let (name, addressee) = match head.split_once('@') {
        Some((name, addressee)) => (name, Some(addressee)),
        None => (head, None),
    };
    if let (Some(addressee), Some(me)) = (addressee, bot_username) {
        if !addressee.eq_ignore_ascii_case(me) {
            return None;
        }
    }
    let name = name.to_lowercase();
    Some(match name.as_str() {
        "start" => BotCommand::Start,
        "reset" => BotCommand::Reset,
        _ => BotCommand::Unknown(name),
    })
}

/// Answers `/start` with the limits and clears the caller's history on `/reset`.
#[derive(Clone)]
pub struct CommandHandler {
    bot: Arc<dyn CoreBot>,
    sessions: Arc<dyn SessionStore>,
    user_locks: UserLocks,
    bot_username: Arc<RwLock<Option<String>>>,
    limits: RelayLimits,
}

impl CommandHandler {
    /// `user_locks` must be shared with the relay handler so `/reset` never lands mid-relay.
    pub fn new(
        bot: Arc<dyn CoreBot>,
        sessions: Arc<dyn SessionStore>,
        user_locks: UserLocks,
        bot_username: Arc<RwLock<Option<String>>>,
        limits: RelayLimits,
    ) -> Self {
        Self {
            bot,
            sessions,
            user_locks,
            bot_username,
            limits,
        }
    }

    async fn reply(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await.map_err(|e| {
            error!(error = %e, user_id = message.user.id, "Failed to send command reply");
            e
        })?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command() {
            return Ok(HandlerResponse::Continue);
        }
        let username = self.bot_username.read().await.clone();
        let Some(command) = parse_command(&message.content, username.as_deref()) else {
            debug!(content = %message.content, "Command addressed to another bot, ignored");
            return Ok(HandlerResponse::Stop);
        };

        match command {
            BotCommand::Start => {
                info!(user_id = message.user.id, "step: /start");
                let text = messages::start_message(
                    self.limits.max_input_chars,
                    self.limits.max_output_chars,
                );
                self.reply(message, text).await
            }
            BotCommand::Reset => {
                info!(user_id = message.user.id, "step: /reset");
                {
                    let _guard = self.user_locks.lock(message.user.id).await;
                    self.sessions.reset(message.user.id).await.map_err(|e| {
                        error!(error = %e, user_id = message.user.id, "Failed to reset history");
                        BotError::Handler(HandlerError::State(e.to_string()))
                    })?;
                }
                self.reply(message, messages::RESET_MESSAGE.to_string()).await
            }
            BotCommand::Unknown(name) => {
                debug!(command = %name, "Unknown command, ignored");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
