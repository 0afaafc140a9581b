//! Generation request types

use serde::{Deserialize, Serialize};
use crate::types::{Difficulty, ErrorCode, LengthPreset, ProviderKind};

/// Raw request parameters as they arrive at the boundary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub provider: Option<String>,
    pub theme: Option<String>,
    pub difficulty: Option<String>,
    pub length: Option<String>,
}

impl GenerationRequest {
    /// Build a fully populated request
    pub fn new(theme: impl Into<String>, difficulty: impl Into<String>, length: impl Into<String>) -> Self {
        Self {
            provider: None,
            theme: Some(theme.into()),
            difficulty: Some(difficulty.into()),
            length: Some(length.into()),
        }
    }

    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider.as_str().to_string());
        self
    }
}

/// Validated, normalized inputs for prompt rendering and providers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptInputs {
    /// Trimmed, lower-cased theme
    pub theme: String,
    pub difficulty: Difficulty,
    pub length: LengthPreset,
}

/// Outcome of request validation. Exactly one variant holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(PromptInputs),
    Invalid { code: ErrorCode, message: String },
}

impl ValidationResult {
    pub fn invalid(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Invalid { code, message: message.into() }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Error code if invalid
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid { code, .. } => Some(*code),
        }
    }
}
