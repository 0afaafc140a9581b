//! Provider output and the twister returned to callers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::ProviderKind;

/// Token usage reported by the generative backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u32>,
}

/// Raw provider output, before trimming and tokenizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwisterResult {
    pub raw_text: String,
    pub provider: ProviderKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl TwisterResult {
    pub fn mock(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            provider: ProviderKind::Mock,
            model: None,
            usage: None,
        }
    }
}

/// A generated twister. `tokens` is always derived from `twister_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwisterResponse {
    pub id: String,
    pub theme: String,
    #[serde(rename = "twister")]
    pub twister_text: String,
    /// Display-mode tokens (case preserved)
    pub tokens: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub provider: ProviderKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl TwisterResponse {
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}
