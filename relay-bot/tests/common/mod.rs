//! Shared test doubles: a recording Bot and a scripted LLM client.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use llm_client::LlmClient;
use prompt::ChatMessage;
use relay_bot::RelayLimits;
use relay_core::{
    Bot, Chat, Message, Result, User, MESSAGE_TYPE_OTHER, MESSAGE_TYPE_TEXT,
};
use session::{InMemorySessionStore, SessionConfig, SessionStore};
use tokio::sync::Mutex;

/// Records every sent message as (chat_id, text).
#[derive(Default, Clone)]
pub struct MockBot {
    pub sent: Arc<Mutex<Vec<(i64, String)>>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent_texts(&self) -> Vec<String> {
        self.sent.lock().await.iter().map(|(_, t)| t.clone()).collect()
    }

    pub async fn sent_to(&self, chat_id: i64) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|(id, _)| *id == chat_id)
            .map(|(_, t)| t.clone())
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().await.push((chat.id, text.to_string()));
        Ok(())
    }
}

/// LLM client that answers from a script (or echoes the last user turn) and records every request.
#[derive(Default, Clone)]
pub struct MockLlm {
    replies: Arc<Mutex<VecDeque<String>>>,
    pub requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
    fail: bool,
    delay: Option<Duration>,
}

impl MockLlm {
    /// Replies with `echo: <last user turn>`.
    pub fn echo() -> Self {
        Self::default()
    }

    /// Replies with the given texts in order, then falls back to echo.
    pub fn scripted<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().map(Into::into).collect())),
            ..Self::default()
        }
    }

    /// Every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> anyhow::Result<String> {
        let last_user = messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.requests.lock().await.push(messages);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            anyhow::bail!("upstream returned 503");
        }
        let scripted = self.replies.lock().await.pop_front();
        Ok(scripted.unwrap_or_else(|| format!("echo: {}", last_user)))
    }
}

pub const SYSTEM_PROMPT: &str = "You are a test assistant.";

pub fn test_limits(max_history: usize) -> RelayLimits {
    RelayLimits {
        max_input_chars: 1000,
        max_output_chars: 800,
        max_history,
        system_prompt: SYSTEM_PROMPT.to_string(),
    }
}

pub fn session_store(limits: &RelayLimits) -> Arc<dyn SessionStore> {
    Arc::new(InMemorySessionStore::new(SessionConfig::new(
        limits.system_prompt.clone(),
        limits.max_history,
    )))
}

/// Private-chat text message from `user_id` (chat id = user id).
pub fn text_message(user_id: i64, content: &str) -> Message {
    Message {
        id: format!("{}-{}", user_id, content.len()),
        user: User {
            id: user_id,
            username: Some(format!("user{}", user_id)),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: MESSAGE_TYPE_TEXT.to_string(),
        created_at: Utc::now(),
    }
}

/// Sticker-like message without text.
pub fn non_text_message(user_id: i64) -> Message {
    Message {
        content: String::new(),
        message_type: MESSAGE_TYPE_OTHER.to_string(),
        ..text_message(user_id, "")
    }
}
