//! # Session
//!
//! Per-user conversation history for the relay bot.
//!
//! - [`ConversationHistory`]: ordered turns with the system turn pinned at index 0 and a length bound.
//! - [`SessionStore`]: injectable store keyed by user id; [`InMemorySessionStore`] keeps everything
//!   in process memory for the process lifetime (restart loses history).
//! - [`UserLocks`]: serializes read-modify-write cycles of one user across concurrent messages.

mod history;
mod inmemory;
mod store;
mod user_locks;

pub use history::ConversationHistory;
pub use inmemory::InMemorySessionStore;
pub use store::{SessionConfig, SessionStore};
pub use user_locks::UserLocks;

pub use prompt::{ChatMessage, MessageRole};
