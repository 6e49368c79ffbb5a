//! Bounded conversation history.

use prompt::ChatMessage;

/// Ordered turns of one user's conversation.
///
/// Invariants kept by [`push_and_trim`](Self::push_and_trim): a seeded system turn stays at
/// index 0, and the length never exceeds the bound passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    turns: Vec<ChatMessage>,
}

impl ConversationHistory {
    /// Empty history (state after `/reset`).
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// History holding a single system turn.
    pub fn seeded(system_prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatMessage::system(system_prompt)],
        }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    pub fn into_turns(self) -> Vec<ChatMessage> {
        self.turns
    }

    /// The pinned system turn, if the history was seeded.
    pub fn system_turn(&self) -> Option<&ChatMessage> {
        self.turns.first().filter(|t| t.is_system())
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.turns.last()
    }

    /// Puts a system turn at index 0 when there is none. Returns true if one was inserted.
    pub fn ensure_system_turn(&mut self, system_prompt: impl Into<String>) -> bool {
        if self.system_turn().is_some() {
            return false;
        }
        self.turns.insert(0, ChatMessage::system(system_prompt));
        true
    }

    /// Appends a turn and trims to `max_len`. Returns the number of evicted turns.
    pub fn push_and_trim(&mut self, turn: ChatMessage, max_len: usize) -> usize {
        self.turns.push(turn);
        self.trim_to(max_len)
    }

    /// Drops the oldest turns until `len() <= max_len`.
    ///
    /// With a system turn at index 0 the result is `[system] + last (max_len - 1)` turns;
    /// without one it is the last `max_len` turns. Returns the number of evicted turns.
    pub fn trim_to(&mut self, max_len: usize) -> usize {
        let len = self.turns.len();
        if len <= max_len {
            return 0;
        }
        let overflow = len - max_len;
        if self.system_turn().is_some() && max_len >= 1 {
            self.turns.drain(1..1 + overflow);
        } else {
            self.turns.drain(..overflow);
        }
        overflow
    }
}
