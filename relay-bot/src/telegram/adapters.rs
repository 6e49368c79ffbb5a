//! Adapters from Telegram (teloxide) types to relay_core types.

use relay_core::{
    Chat, Message, ToCoreMessage, ToCoreUser, User, MESSAGE_TYPE_OTHER,
    MESSAGE_TYPE_TEXT,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// Messages without a sender (channel posts) map to user id = chat id so history stays per chat.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let chat_id = self.0.chat.id.0;
        let (content, message_type) = match self.0.text() {
            Some(text) => (text.to_string(), MESSAGE_TYPE_TEXT),
            None => (String::new(), MESSAGE_TYPE_OTHER),
        };
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: chat_id,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: chat_id,
                chat_type: self.chat_type().to_string(),
            },
            content,
            message_type: message_type.to_string(),
            created_at: self.0.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }
}
