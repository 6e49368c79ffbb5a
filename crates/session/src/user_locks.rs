//! Per-user serialization of message handling.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per user id. Holding the guard serializes handling of that user's messages;
/// different users never wait on each other.
#[derive(Debug, Clone, Default)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and returns the user's guard. The lock is released when the guard drops.
    pub async fn lock(&self, user_id: i64) -> OwnedMutexGuard<()> {
        let user_lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(user_id).or_default().clone()
        };
        user_lock.lock_owned().await
    }
}
