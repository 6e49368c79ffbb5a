//! Relay handler: records the user's turn, asks the LLM with the bounded history, and replies.
//!
//! **External interactions:** Bot trait (send), SessionStore (history), LlmClient (completion).

use async_trait::async_trait;
use llm_client::LlmClient;
use prompt::ChatMessage;
use relay_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use session::{SessionStore, UserLocks};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::config::RelayLimits;
use crate::messages;

/// Why a message could not be relayed.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Input over the character limit; history untouched.
    #[error("input too long: {len} characters (max {max})")]
    InputTooLong { len: usize, max: usize },

    /// The completion call failed. The user turn stays in history.
    #[error("completion provider failed")]
    Provider(#[source] anyhow::Error),

    #[error("session store failed")]
    Session(#[source] anyhow::Error),
}

impl RelayError {
    /// Text sent to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::InputTooLong { max, .. } => messages::input_too_long_message(*max),
            RelayError::Provider(_) | RelayError::Session(_) => {
                messages::FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Relays plain text messages to the LLM. Messages of one user are handled one at a time.
#[derive(Clone)]
pub struct RelayHandler {
    bot: Arc<dyn CoreBot>,
    llm_client: Arc<dyn LlmClient>,
    sessions: Arc<dyn SessionStore>,
    user_locks: UserLocks,
    limits: RelayLimits,
}

impl RelayHandler {
    pub fn new(
        bot: Arc<dyn CoreBot>,
        llm_client: Arc<dyn LlmClient>,
        sessions: Arc<dyn SessionStore>,
        user_locks: UserLocks,
        limits: RelayLimits,
    ) -> Self {
        Self {
            bot,
            llm_client,
            sessions,
            user_locks,
            limits,
        }
    }

    /// Logs error and its cause chain. First item with `first_msg`, rest with "Caused by".
    fn log_error_chain(e: &(dyn std::error::Error + 'static), first_msg: &str) {
        error!(cause = %e, "{}", first_msg);
        let mut source = e.source();
        while let Some(cause) = source {
            error!(cause = %cause, "Caused by");
            source = cause.source();
        }
    }

    /// Runs one relay cycle for `user_id` without touching the transport.
    ///
    /// Order: validate length → record user turn → completion → truncate → record assistant turn.
    /// On provider failure the recorded user turn is kept and no assistant turn is added.
    #[instrument(skip(self, text), fields(input_len = tracing::field::Empty))]
    pub async fn relay(&self, user_id: i64, text: &str) -> std::result::Result<String, RelayError> {
        let len = text.chars().count();
        tracing::Span::current().record("input_len", len);
        if len > self.limits.max_input_chars {
            return Err(RelayError::InputTooLong {
                len,
                max: self.limits.max_input_chars,
            });
        }

        let _guard = self.user_locks.lock(user_id).await;

        self.sessions
            .get_or_init(user_id)
            .await
            .map_err(RelayError::Session)?;
        let history = self
            .sessions
            .append_and_trim(user_id, ChatMessage::user(text))
            .await
            .map_err(RelayError::Session)?;

        let started = Instant::now();
        let history_len = history.len();
        let reply = self
            .llm_client
            .get_llm_response_with_messages(history.into_turns())
            .await
            .map_err(RelayError::Provider)?;
        info!(
            user_id,
            history_len,
            reply_len = reply.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "step: LLM reply received"
        );

        let reply = messages::truncate_reply(&reply, self.limits.max_output_chars);
        self.sessions
            .append_and_trim(user_id, ChatMessage::assistant(reply.clone()))
            .await
            .map_err(RelayError::Session)?;

        Ok(reply)
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() || message.is_command() {
            return Ok(HandlerResponse::Ignore);
        }

        let text = match self.relay(message.user.id, &message.content).await {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    RelayError::InputTooLong { len, max } => {
                        warn!(user_id = message.user.id, len, max, "Message over input limit, rejected");
                    }
                    RelayError::Provider(_) | RelayError::Session(_) => {
                        Self::log_error_chain(&e, "Relay failed");
                    }
                }
                e.user_message()
            }
        };

        self.bot.reply_to(message, &text).await.map_err(|e| {
            error!(error = %e, user_id = message.user.id, "Failed to send reply");
            e
        })?;
        Ok(HandlerResponse::Reply(text))
    }
}
