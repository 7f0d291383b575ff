use std::sync::Arc;

use async_trait::async_trait;

use lumina_assistant::{AssistantClient, Role, WireMessage};
use lumina_core::Catalog;

use crate::chat::{ChatMessage, ChatRole};
use crate::ports::AssistantPort;

/// Live adapter from the chat session to the completion-service client.
pub struct LiveAssistant {
    client: AssistantClient,
}

impl LiveAssistant {
    pub fn from_env(catalog: &Catalog) -> anyhow::Result<Arc<dyn AssistantPort>> {
        Ok(Arc::new(Self {
            client: AssistantClient::from_env(catalog)?,
        }))
    }
}

fn wire(msg: &ChatMessage) -> WireMessage {
    WireMessage {
        role: match msg.role {
            ChatRole::User => Role::User,
            ChatRole::Assistant => Role::Assistant,
        },
        content: msg.text.clone(),
    }
}

#[async_trait]
impl AssistantPort for LiveAssistant {
    async fn complete(&self, transcript: &[ChatMessage], message: &str) -> anyhow::Result<String> {
        let mut messages: Vec<WireMessage> = transcript.iter().map(wire).collect();
        messages.push(WireMessage {
            role: Role::User,
            content: message.to_string(),
        });
        Ok(self.client.complete(&messages).await?)
    }
}
