//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: a command-style handler replying and ending the handle phase, Ignore falling through,
//! before() vetoing the chain, and after() running in reverse with the final response.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use handler_chain::HandlerChain;
use relay_core::{Chat, Handler, HandlerResponse, Message, User};

fn text_message(content: &str) -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 1001,
            username: Some("olena".to_string()),
            first_name: Some("Olena".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 1001,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// Replies to `/ping` and ignores everything else.
struct PingHandler;

#[async_trait::async_trait]
impl Handler for PingHandler {
    async fn handle(&self, message: &Message) -> relay_core::Result<HandlerResponse> {
        if message.content == "/ping" {
            Ok(HandlerResponse::Reply("pong".to_string()))
        } else {
            Ok(HandlerResponse::Ignore)
        }
    }
}

/// Counts handle() calls and always replies with a fixed text.
struct CountingReplyHandler {
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Handler for CountingReplyHandler {
    async fn handle(&self, _message: &Message) -> relay_core::Result<HandlerResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HandlerResponse::Reply("relayed".to_string()))
    }
}

/// Records before/after calls and the response seen in after().
struct Recorder {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl Handler for Recorder {
    async fn before(&self, _message: &Message) -> relay_core::Result<bool> {
        self.log.lock().unwrap().push(format!("before_{}", self.name));
        Ok(true)
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> relay_core::Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("after_{}:{:?}", self.name, response));
        Ok(())
    }
}

/// **Test: An empty chain returns Continue.**
#[tokio::test]
async fn test_empty_chain_returns_continue() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());
    let result = chain.handle(&text_message("hello")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: A command reply ends the handle phase; the next handler is not called.**
#[tokio::test]
async fn test_command_reply_stops_later_handlers() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(PingHandler))
        .add_handler(Arc::new(CountingReplyHandler {
            calls: calls.clone(),
        }));

    let result = chain.handle(&text_message("/ping")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("pong".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

/// **Test: Ignore falls through to the next handler.**
#[tokio::test]
async fn test_ignore_falls_through() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(PingHandler))
        .add_handler(Arc::new(CountingReplyHandler {
            calls: calls.clone(),
        }));

    let result = chain.handle(&text_message("how are you?")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("relayed".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(chain.len(), 2);
}

/// **Test: before() returning false stops the chain before any handle().**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct Gate;

    #[async_trait::async_trait]
    impl Handler for Gate {
        async fn before(&self, _message: &Message) -> relay_core::Result<bool> {
            Ok(false)
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(Gate))
        .add_handler(Arc::new(CountingReplyHandler {
            calls: calls.clone(),
        }));

    let result = chain.handle(&text_message("hello")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

/// **Test: before runs first→last, after runs last→first and sees the final Reply.**
#[tokio::test]
async fn test_after_runs_in_reverse_with_final_response() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(Recorder {
            name: "outer",
            log: log.clone(),
        }))
        .add_handler(Arc::new(Recorder {
            name: "inner",
            log: log.clone(),
        }))
        .add_handler(Arc::new(PingHandler));

    chain.handle(&text_message("/ping")).await.unwrap();

    let executed = log.lock().unwrap();
    assert_eq!(
        *executed,
        vec![
            "before_outer".to_string(),
            "before_inner".to_string(),
            "after_inner:Reply(\"pong\")".to_string(),
            "after_outer:Reply(\"pong\")".to_string(),
        ]
    );
}
