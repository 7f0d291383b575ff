use std::time::Duration;

use serde::{Deserialize, Serialize};

use lumina_core::Catalog;

pub mod prompt;

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion service returned no choices")]
    EmptyReply,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the hosted chat-completions endpoint. The caller supplies
/// the running transcript; the system prompt is prepended here.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    system_prompt: String,
}

impl AssistantClient {
    pub fn new(
        endpoint: String,
        model: String,
        api_key: String,
        system_prompt: String,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(lumina_config::ASSISTANT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            model,
            api_key,
            system_prompt,
        })
    }

    /// Endpoint and key from the environment, shop persona built from the
    /// catalog. A missing key is allowed; the service will reject the
    /// calls and the chat layer degrades to its fallback reply.
    pub fn from_env(catalog: &Catalog) -> anyhow::Result<Self> {
        let endpoint = std::env::var(lumina_config::ASSISTANT_URL_ENV)
            .unwrap_or_else(|_| lumina_config::DEFAULT_ASSISTANT_URL.to_string());
        let api_key = std::env::var(lumina_config::API_KEY_ENV).unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!(
                "{} is not set; assistant replies will fail over to the offline message",
                lumina_config::API_KEY_ENV
            );
        }

        Self::new(
            endpoint,
            lumina_config::ASSISTANT_MODEL.to_string(),
            api_key,
            prompt::system_prompt(catalog),
        )
    }

    /// One completion round-trip. `transcript` is the conversation so far,
    /// oldest first, ending with the message to answer.
    pub async fn complete(&self, transcript: &[WireMessage]) -> Result<String, AssistantError> {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(WireMessage {
            role: Role::System,
            content: self.system_prompt.clone(),
        });
        messages.extend_from_slice(transcript);

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: lumina_config::ASSISTANT_TEMPERATURE,
        };

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "Sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Completion service error {status}: {body}");
            return Err(AssistantError::Status { status, body });
        }

        let parsed: CompletionResponse = response.json().await?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(AssistantError::EmptyReply)?;

        Ok(choice.message.content)
    }
}
