//! Integration tests for [`session::InMemorySessionStore`].
//!
//! Covers: lazy seeding, the length bound with the pinned system turn, reset and re-seed,
//! and concurrent writers for different users.

use std::sync::Arc;

use session::{ChatMessage, InMemorySessionStore, MessageRole, SessionConfig, SessionStore};

const SYSTEM: &str = "You are a short, helpful assistant.";

fn store(max_history: usize) -> InMemorySessionStore {
    InMemorySessionStore::new(SessionConfig::new(SYSTEM, max_history))
}

/// **Test: First access seeds exactly one system turn; a second access returns the same history.**
#[tokio::test]
async fn get_or_init_seeds_once() {
    let store = store(8);
    assert!(store.history(1).await.unwrap().is_none());

    let first = store.get_or_init(1).await.unwrap();
    assert_eq!(first.turns(), &[ChatMessage::system(SYSTEM)]);

    store.append_and_trim(1, ChatMessage::user("hi")).await.unwrap();
    let second = store.get_or_init(1).await.unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(store.user_count().await.unwrap(), 1);
}

/// **Test: After many appends the length stays within the bound and index 0 is the original system turn.**
#[tokio::test]
async fn append_keeps_bound_and_system_turn() {
    let store = store(5);
    store.get_or_init(7).await.unwrap();

    for i in 0..23 {
        let turn = if i % 2 == 0 {
            ChatMessage::user(format!("q{}", i))
        } else {
            ChatMessage::assistant(format!("a{}", i))
        };
        let history = store.append_and_trim(7, turn).await.unwrap();
        assert!(history.len() <= 5);
        assert_eq!(history.turns()[0], ChatMessage::system(SYSTEM));
    }

    let history = store.history(7).await.unwrap().unwrap();
    let tail: Vec<&str> = history.turns()[1..].iter().map(|t| t.content.as_str()).collect();
    assert_eq!(tail, vec!["q18", "a19", "q20", "a21", "q22"]);
}

/// **Test: Nine user turns with a bound of 8 leave the system turn plus the last seven, in order.**
#[tokio::test]
async fn nine_messages_with_bound_eight() {
    let store = store(8);
    store.get_or_init(3).await.unwrap();
    for i in 1..=9 {
        store
            .append_and_trim(3, ChatMessage::user(format!("message {}", i)))
            .await
            .unwrap();
    }

    let history = store.history(3).await.unwrap().unwrap();
    assert_eq!(history.len(), 8);
    assert_eq!(history.turns()[0].role, MessageRole::System);
    let tail: Vec<String> = history.turns()[1..].iter().map(|t| t.content.clone()).collect();
    let expected: Vec<String> = (3..=9).map(|i| format!("message {}", i)).collect();
    assert_eq!(tail, expected);
}

/// **Test: reset empties the history, is idempotent, and the next get_or_init re-seeds.**
#[tokio::test]
async fn reset_then_reseed() {
    let store = store(8);
    store.get_or_init(9).await.unwrap();
    store.append_and_trim(9, ChatMessage::user("remember me")).await.unwrap();

    store.reset(9).await.unwrap();
    store.reset(9).await.unwrap();
    let after_reset = store.history(9).await.unwrap().unwrap();
    assert!(after_reset.is_empty());

    let reseeded = store.get_or_init(9).await.unwrap();
    assert_eq!(reseeded.turns(), &[ChatMessage::system(SYSTEM)]);
}

/// **Test: Appending to a history emptied by reset puts the system turn back at index 0.**
#[tokio::test]
async fn append_after_reset_reseeds_system_turn() {
    let store = store(8);
    store.get_or_init(11).await.unwrap();
    store.append_and_trim(11, ChatMessage::user("first")).await.unwrap();
    store.reset(11).await.unwrap();

    let history = store
        .append_and_trim(11, ChatMessage::assistant("late reply"))
        .await
        .unwrap();
    assert_eq!(
        history.turns(),
        &[ChatMessage::system(SYSTEM), ChatMessage::assistant("late reply")]
    );

    let next = store.get_or_init(11).await.unwrap();
    assert_eq!(next.system_turn(), Some(&ChatMessage::system(SYSTEM)));
    assert_eq!(next.len(), 2);
}

/// **Test: reset of an unknown user is allowed and yields an empty history.**
#[tokio::test]
async fn reset_unknown_user() {
    let store = store(8);
    store.reset(404).await.unwrap();
    assert!(store.history(404).await.unwrap().unwrap().is_empty());
}

/// **Test: Concurrent writers for two users each end with only their own turns.**
#[tokio::test]
async fn concurrent_users_do_not_mix() {
    let store: Arc<dyn SessionStore> = Arc::new(store(64));

    let mut tasks = Vec::new();
    for user_id in [100_i64, 200_i64] {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store.get_or_init(user_id).await.unwrap();
            for i in 0..20 {
                store
                    .append_and_trim(user_id, ChatMessage::user(format!("{}-{}", user_id, i)))
                    .await
                    .unwrap();
                tokio::task::yield_now().await;
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    for user_id in [100_i64, 200_i64] {
        let history = store.history(user_id).await.unwrap().unwrap();
        assert_eq!(history.len(), 21);
        let prefix = format!("{}-", user_id);
        assert!(history.turns()[1..].iter().all(|t| t.content.starts_with(&prefix)));
    }
}
