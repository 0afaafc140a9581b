//! Generative backend capability and its OpenAI implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::BackendError;
use crate::types::Usage;

/// One call to the generative backend
#[derive(Debug, Clone, PartialEq)]
pub struct GenerativeCall {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
}

/// Raw text plus optional usage counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub text: String,
    pub usage: Option<Usage>,
}

/// Anything that turns a prompt into text
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, call: &GenerativeCall) -> Result<BackendReply, BackendError>;
}

/// Chat-completions client
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
    total_tokens: Option<u32>,
}

impl From<ChatUsage> for Usage {
    fn from(u: ChatUsage) -> Self {
        Self {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }
    }
}

impl OpenAiBackend {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl GenerativeBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, call: &GenerativeCall) -> Result<BackendReply, BackendError> {
        let body = ChatRequest {
            model: &call.model,
            temperature: call.temperature,
            messages: vec![ChatMessage { role: "user", content: &call.prompt }],
        };

        debug!("POST {} (model={}, temperature={})", self.base_url, call.model, call.temperature);

        let response = self.client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Generative backend returned {}", status);
            return Err(BackendError::Status { status: status.as_u16(), body });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        let text = parsed.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(BackendReply {
            text,
            usage: parsed.usage.map(Usage::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_mapping() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"Fuzzy foxes frisk fast."}}],
                "usage":{"prompt_tokens":90,"completion_tokens":6,"total_tokens":96}}"#,
        ).unwrap();
        let usage = Usage::from(parsed.usage.unwrap());
        assert_eq!(usage.input_tokens, Some(90));
        assert_eq!(usage.output_tokens, Some(6));
        assert_eq!(usage.total_tokens, Some(96));
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("Fuzzy foxes frisk fast."));
    }

    #[test]
    fn test_response_without_usage() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(parsed.usage.is_none());
        assert!(parsed.choices.is_empty());
    }
}
