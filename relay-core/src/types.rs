//! Core types: user, chat, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `message_type` of a message that carries text.
pub const MESSAGE_TYPE_TEXT: &str = "text";
/// `message_type` of anything else (stickers, photos, service messages).
pub const MESSAGE_TYPE_OTHER: &str = "other";

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True when the transport delivered a text body.
    pub fn is_text(&self) -> bool {
        self.message_type == MESSAGE_TYPE_TEXT
    }

    /// True when the text starts with `/` (a bot command such as `/start`).
    pub fn is_command(&self) -> bool {
        self.is_text() && self.content.starts_with('/')
    }
}

/// Handler result for the chain. `Reply(text)` carries the text sent back so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(content: &str, message_type: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 7,
                chat_type: "private".to_string(),
            },
            content: content.to_string(),
            message_type: message_type.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_command() {
        assert!(message("/start", MESSAGE_TYPE_TEXT).is_command());
        assert!(message("/reset@relay_bot", MESSAGE_TYPE_TEXT).is_command());
        assert!(!message("hello /start", MESSAGE_TYPE_TEXT).is_command());
        assert!(!message("", MESSAGE_TYPE_OTHER).is_command());
    }

    #[test]
    fn test_is_text() {
        assert!(message("hi", MESSAGE_TYPE_TEXT).is_text());
        assert!(!message("", MESSAGE_TYPE_OTHER).is_text());
    }
}
