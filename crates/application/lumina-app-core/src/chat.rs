use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::async_runtime;
use crate::ports::AssistantPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ChatEvent {
    ReplyArrived { text: String },
    RequestFailed { message: String },
}

/// Chat transcript plus in-flight bookkeeping for completion calls. The
/// session talks only to its port and its own history; it is independent
/// of navigation and the cart.
pub struct ChatSession {
    assistant: Arc<dyn AssistantPort>,
    messages: Vec<ChatMessage>,
    pending: usize,
    tx: mpsc::Sender<ChatEvent>,
    rx: mpsc::Receiver<ChatEvent>,
}

impl ChatSession {
    pub fn new(assistant: Arc<dyn AssistantPort>) -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self {
            assistant,
            messages: vec![ChatMessage::assistant(lumina_config::CHAT_WELCOME)],
            pending: 0,
            tx,
            rx,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending > 0
    }

    /// Append the user's message and fire the completion call. The reply
    /// (or the fallback) lands via `drain_events`. Several sends may be
    /// outstanding at once; replies append in whichever order they
    /// resolve.
    pub fn send(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let transcript = self.messages.clone();
        self.messages.push(ChatMessage::user(text));
        self.pending += 1;

        let runtime = match async_runtime::runtime() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Assistant runtime unavailable: {e:#}");
                self.pending -= 1;
                self.messages
                    .push(ChatMessage::assistant(lumina_config::CHAT_FALLBACK));
                return;
            }
        };

        let assistant = self.assistant.clone();
        let tx = self.tx.clone();
        let message = text.to_string();
        runtime.spawn(async move {
            let ev = match assistant.complete(&transcript, &message).await {
                Ok(reply) => ChatEvent::ReplyArrived { text: reply },
                Err(e) => {
                    tracing::warn!("Assistant call failed: {e:#}");
                    ChatEvent::RequestFailed {
                        message: e.to_string(),
                    }
                }
            };
            let _ = tx.send(ev).await;
        });
    }

    /// Apply completed calls to the transcript. A failure keeps the user's
    /// message and appends the fallback reply in place of an answer. Call
    /// once per UI frame.
    pub fn drain_events(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            match ev {
                ChatEvent::ReplyArrived { text } => {
                    self.messages.push(ChatMessage::assistant(text));
                }
                ChatEvent::RequestFailed { .. } => {
                    self.messages
                        .push(ChatMessage::assistant(lumina_config::CHAT_FALLBACK));
                }
            }
        }
    }
}
