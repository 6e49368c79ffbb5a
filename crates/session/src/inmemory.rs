//! In-memory implementation of [`SessionStore`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use prompt::ChatMessage;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{ConversationHistory, SessionConfig, SessionStore};

type SessionMap = HashMap<i64, ConversationHistory>;

/// Process-wide session map. Clones share the same map.
///
/// No eviction: memory grows with the number of distinct users.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    config: Arc<SessionConfig>,
    sessions: Arc<RwLock<SessionMap>>,
}

impl InMemorySessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(SessionMap::new())),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_init(&self, user_id: i64) -> anyhow::Result<ConversationHistory> {
        let mut sessions = self.sessions.write().await;
        let history = sessions.entry(user_id).or_default();
        if history.is_empty() {
            *history = ConversationHistory::seeded(self.config.system_prompt.clone());
            info!(user_id, "Seeded conversation history with system turn");
        }
        Ok(history.clone())
    }

    async fn history(&self, user_id: i64) -> anyhow::Result<Option<ConversationHistory>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&user_id).cloned())
    }

    async fn reset(&self, user_id: i64) -> anyhow::Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(user_id, ConversationHistory::new());
        info!(user_id, "Conversation history reset");
        Ok(())
    }

    async fn append_and_trim(
        &self,
        user_id: i64,
        turn: ChatMessage,
    ) -> anyhow::Result<ConversationHistory> {
        let role = turn.role;
        let mut sessions = self.sessions.write().await;
        let history = sessions.entry(user_id).or_default();
        if !turn.is_system() && history.ensure_system_turn(self.config.system_prompt.clone()) {
            info!(user_id, "Seeded system turn before appending to empty history");
        }
        let evicted = history.push_and_trim(turn, self.config.max_history);
        debug!(
            user_id,
            role = %role,
            len = history.len(),
            evicted,
            "Appended turn to conversation history"
        );
        Ok(history.clone())
    }

    async fn user_count(&self) -> anyhow::Result<usize> {
        Ok(self.sessions.read().await.len())
    }
}
