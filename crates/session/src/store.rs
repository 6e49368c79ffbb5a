//! Store trait for per-user conversation history.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;

use crate::ConversationHistory;

/// Settings shared by store implementations.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Content of the system turn seeded into new histories.
    pub system_prompt: String,
    /// Maximum history length including the system turn.
    pub max_history: usize,
}

impl SessionConfig {
    pub fn new(system_prompt: impl Into<String>, max_history: usize) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            max_history,
        }
    }
}

/// Keyed conversation history store. Keys are transport-assigned user ids.
///
/// Implementations must keep each operation atomic per user so that concurrent access for
/// different users never mixes turns.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the user's history, seeding a single system turn when the user is unknown or
    /// the history is empty (e.g. after [`reset`](Self::reset)).
    async fn get_or_init(&self, user_id: i64) -> Result<ConversationHistory>;

    /// Returns the stored history without seeding. `None` for unknown users.
    async fn history(&self, user_id: i64) -> Result<Option<ConversationHistory>>;

    /// Replaces the user's history with an empty one. Idempotent.
    async fn reset(&self, user_id: i64) -> Result<()>;

    /// Appends a turn and enforces the length bound. Returns the stored history after trimming.
    /// A history without a system turn (e.g. emptied by a concurrent reset) is seeded first, so
    /// index 0 is always the system turn.
    async fn append_and_trim(&self, user_id: i64, turn: ChatMessage)
        -> Result<ConversationHistory>;

    /// Number of users with a stored history (including reset ones).
    async fn user_count(&self) -> Result<usize>;
}
