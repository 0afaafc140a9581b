//! Uniform response envelope and error codes

use serde::{Deserialize, Serialize};

/// Stable error codes for programmatic branching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidTheme,
    InvalidDifficulty,
    InvalidLength,
    ProviderFailure,
    InternalError,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidTheme => "INVALID_THEME",
            Self::InvalidDifficulty => "INVALID_DIFFICULTY",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::ProviderFailure => "PROVIDER_FAILURE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Bad request parameters, fixable by resubmitting
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidTheme | Self::InvalidDifficulty | Self::InvalidLength)
    }

    /// The mock provider is a sensible fallback for this failure
    pub fn suggests_mock_fallback(&self) -> bool {
        *self == Self::ProviderFailure
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error payload of a failed envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

/// `{ success: true, data } | { success: false, error }` with message and request id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Transport status, kept out of the body
    #[serde(skip)]
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error.as_ref().map(|e| e.code)
    }
}
