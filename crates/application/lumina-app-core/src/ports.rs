use async_trait::async_trait;

use crate::chat::ChatMessage;

/// Boundary to the hosted completion service. Failures are expected and
/// mapped to the fallback reply at the chat boundary; nothing propagates
/// past it.
#[async_trait]
pub trait AssistantPort: Send + Sync + 'static {
    /// Produce the assistant's reply to `message`, given the prior
    /// transcript (oldest first).
    async fn complete(&self, transcript: &[ChatMessage], message: &str) -> anyhow::Result<String>;
}
