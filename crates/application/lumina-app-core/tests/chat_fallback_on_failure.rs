use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lumina_app_core::chat::{ChatMessage, ChatRole, ChatSession};
use lumina_app_core::ports::AssistantPort;

struct OfflineAssistant;

#[async_trait]
impl AssistantPort for OfflineAssistant {
    async fn complete(
        &self,
        _transcript: &[ChatMessage],
        _message: &str,
    ) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

struct EchoAssistant;

#[async_trait]
impl AssistantPort for EchoAssistant {
    async fn complete(&self, transcript: &[ChatMessage], message: &str) -> anyhow::Result<String> {
        // The transcript passed in is the history *before* this message.
        assert!(transcript.iter().all(|m| m.text != message));
        Ok(format!("echo: {message}"))
    }
}

/// Drive drain_events until every outstanding call has resolved.
fn settle(session: &mut ChatSession) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        session.drain_events();
        if !session.is_pending() {
            return;
        }
        assert!(Instant::now() < deadline, "assistant call never settled");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn a_failed_call_keeps_the_user_message_and_appends_the_fallback() {
    let mut session = ChatSession::new(Arc::new(OfflineAssistant));
    session.send("any linen shirts?");
    assert!(session.is_pending());

    settle(&mut session);

    let messages = session.messages();
    assert_eq!(messages.len(), 3, "welcome + user + fallback");
    assert_eq!(messages[1].role, ChatRole::User);
    assert_eq!(messages[1].text, "any linen shirts?");
    assert_eq!(messages[2].role, ChatRole::Assistant);
    assert_eq!(messages[2].text, lumina_config::CHAT_FALLBACK);
    assert!(!session.is_pending());
}

#[test]
fn a_successful_call_appends_the_reply() {
    let mut session = ChatSession::new(Arc::new(EchoAssistant));
    session.send("gift ideas");

    settle(&mut session);

    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].role, ChatRole::Assistant);
    assert_eq!(messages[2].text, "echo: gift ideas");
}

#[test]
fn blank_input_is_ignored() {
    let mut session = ChatSession::new(Arc::new(EchoAssistant));
    session.send("   ");
    assert!(!session.is_pending());
    assert_eq!(session.messages().len(), 1, "only the welcome message");
}

#[test]
fn concurrent_sends_each_get_an_answer() {
    let mut session = ChatSession::new(Arc::new(EchoAssistant));
    session.send("first");
    session.send("second");
    assert!(session.is_pending());

    settle(&mut session);

    let messages = session.messages();
    // welcome + 2 user + 2 assistant; replies land in resolution order.
    assert_eq!(messages.len(), 5);
    let replies: Vec<_> = messages
        .iter()
        .filter(|m| m.role == ChatRole::Assistant && m.text.starts_with("echo:"))
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(replies.len(), 2);
    assert!(replies.contains(&"echo: first"));
    assert!(replies.contains(&"echo: second"));
}
