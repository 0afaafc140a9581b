//! Error types

use crate::types::{ErrorCode, CountRange};

/// Failure of a single provider call
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Missing OPENAI_API_KEY")]
    MissingCredential,

    #[error("Unsupported mock theme: {0}")]
    UnsupportedMockTheme(String),

    #[error("Generative backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Invalid LLM output: empty text")]
    EmptyOutput,

    #[error("Invalid LLM output: {word_count} words, expected {range}")]
    InvalidOutput { word_count: usize, range: CountRange },

    /// Superseded by a newer request; never reported to the user
    #[error("Request cancelled")]
    Cancelled,
}

impl ProviderError {
    /// Stable envelope code. `None` for cancellation.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Cancelled => None,
            Self::UnsupportedMockTheme(_) => Some(ErrorCode::InvalidTheme),
            _ => Some(ErrorCode::ProviderFailure),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Transport-level failure talking to the generative backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed backend response: {0}")]
    Decode(String),
}

/// Failure of the speech capture capability
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("Speech recognition not supported")]
    Unavailable,

    #[error("Speech recognition error: {0}")]
    Engine(String),
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
