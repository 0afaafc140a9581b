//! Twister service: validate → provider → response → envelope
//!
//! Never returns a Rust error. Every outcome is an envelope, except a
//! superseded request, which is reported as `Generated::Cancelled`.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::backend::{GenerativeBackend, OpenAiBackend};
use crate::core::provider::{available_mock_themes, resolve_provider, ProviderRegistry};
use crate::core::request_slot::{AbortSignal, RequestSlot};
use crate::core::response::{build_response, failure, success};
use crate::core::validator::validate;
use crate::error::{BackendError, ProviderError};
use crate::types::{
    ApiResponse, ErrorCode, GenerationRequest, PromptSpec, TwisterResponse, ValidationResult,
};

/// Outcome of one generation request
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    Ready(ApiResponse<TwisterResponse>),
    /// Aborted or superseded; nothing to show
    Cancelled,
}

impl Generated {
    pub fn into_response(self) -> Option<ApiResponse<TwisterResponse>> {
        match self {
            Generated::Ready(response) => Some(response),
            Generated::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Generated::Cancelled)
    }
}

/// Stateless between requests; callers own their `RequestSlot`
pub struct TwisterService {
    config: Config,
    providers: ProviderRegistry,
}

impl TwisterService {
    /// Build from config, creating the OpenAI backend when a key is present
    pub fn new(config: Config) -> Result<Self, BackendError> {
        let backend: Option<Arc<dyn GenerativeBackend>> = match &config.api_key {
            Some(key) => Some(Arc::new(OpenAiBackend::new(key.clone(), config.base_url.clone())?)),
            None => None,
        };
        Ok(Self::with_backend(config, backend))
    }

    /// Build with an explicit backend (or none)
    pub fn with_backend(config: Config, backend: Option<Arc<dyn GenerativeBackend>>) -> Self {
        let providers = ProviderRegistry::new(PromptSpec::default_twister(), backend)
            .with_model(config.model.clone(), config.temperature);

        Self { config, providers }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a twister for one request
    pub async fn generate(&self, request: &GenerationRequest, signal: &AbortSignal) -> Generated {
        let provider = resolve_provider(request.provider.as_deref(), self.config.default_provider);

        let inputs = match validate(
            request.theme.as_deref(),
            request.difficulty.as_deref(),
            request.length.as_deref(),
        ) {
            ValidationResult::Valid(inputs) => inputs,
            ValidationResult::Invalid { code, message } => {
                info!("Rejected request: {} ({})", code, message);
                return Generated::Ready(failure(400, "Validation error", code, message));
            }
        };

        match self.providers.generate(provider, &inputs, signal).await {
            Ok(result) => {
                let response = build_response(&inputs, &result);
                info!("Twister generated by {} ({} words)", response.provider, response.word_count());
                Generated::Ready(success("Twister generated", response))
            }
            Err(ProviderError::Cancelled) => Generated::Cancelled,
            Err(ProviderError::UnsupportedMockTheme(theme)) => {
                info!("No mock twister for theme {:?}", theme);
                Generated::Ready(failure(
                    400,
                    "Unsupported mock theme",
                    ErrorCode::InvalidTheme,
                    available_mock_themes(),
                ))
            }
            Err(err) => {
                warn!("Provider failure: {}", err);
                let code = err.code().unwrap_or(ErrorCode::ProviderFailure);
                Generated::Ready(failure(500, "Provider error", code, err.to_string()))
            }
        }
    }

    /// Generate through `slot`: a newer call on the same slot aborts this
    /// one, and a result that arrives after being superseded is dropped
    pub async fn generate_latest(&self, slot: &RequestSlot, request: &GenerationRequest) -> Generated {
        let ticket = slot.begin();
        let outcome = self.generate(request, &ticket.signal).await;
        slot.finish(&ticket, outcome).unwrap_or(Generated::Cancelled)
    }

    /// Ready when the generative credential is configured
    pub fn ready(&self) -> ApiResponse<()> {
        if self.providers.has_credential() {
            let mut response = success("Service is ready", ());
            response.data = None;
            response
        } else {
            failure(500, "Service is not ready", ErrorCode::ProviderFailure, "Missing OPENAI_API_KEY")
        }
    }

    pub fn health(&self) -> ApiResponse<()> {
        let mut response = success("Service is healthy", ());
        response.data = None;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProviderKind;

    fn mock_service() -> TwisterService {
        TwisterService::with_backend(Config::mock(), None)
    }

    #[tokio::test]
    async fn test_validation_short_circuits() {
        let request = GenerationRequest::new("a", "easy", "short");
        let response = mock_service().generate(&request, &AbortSignal::new()).await.into_response().unwrap();
        assert_eq!(response.status_code, 400);
        assert_eq!(response.message, "Validation error");
        assert_eq!(response.error_code(), Some(ErrorCode::InvalidTheme));
    }

    #[tokio::test]
    async fn test_mock_success_envelope() {
        let request = GenerationRequest::new("Deep Sea Adventure", "hard", "short");
        let response = mock_service().generate(&request, &AbortSignal::new()).await.into_response().unwrap();
        assert!(response.is_success());
        assert_eq!(response.status_code, 200);
        assert_eq!(response.message, "Twister generated");

        let data = response.data.unwrap();
        assert_eq!(data.twister_text, "Swift sea swans swish, slosh.");
        assert_eq!(data.theme, "deep sea adventure");
        assert_eq!(data.tokens, vec!["Swift", "sea", "swans", "swish", "slosh"]);
    }

    #[tokio::test]
    async fn test_unsupported_mock_theme() {
        let request = GenerationRequest::new("quantum", "easy", "short");
        let response = mock_service().generate(&request, &AbortSignal::new()).await.into_response().unwrap();
        assert_eq!(response.status_code, 400);
        assert_eq!(response.message, "Unsupported mock theme");
        let error = response.error.unwrap();
        assert_eq!(error.code, ErrorCode::InvalidTheme);
        assert_eq!(error.message, "Available mock themes: sea, cooking, space, music, sports, animals");
    }

    #[tokio::test]
    async fn test_missing_credential() {
        let request = GenerationRequest::new("sea", "easy", "short").with_provider(ProviderKind::Generative);
        let response = mock_service().generate(&request, &AbortSignal::new()).await.into_response().unwrap();
        assert_eq!(response.status_code, 500);
        assert_eq!(response.message, "Provider error");
        assert_eq!(response.error.unwrap().message, "Missing OPENAI_API_KEY");
    }

    #[tokio::test]
    async fn test_aborted_signal_is_cancelled() {
        let signal = AbortSignal::new();
        signal.abort();
        let request = GenerationRequest::new("sea", "easy", "short");
        assert!(mock_service().generate(&request, &signal).await.is_cancelled());
    }

    #[test]
    fn test_ready_without_key() {
        let ready = mock_service().ready();
        assert!(!ready.is_success());
        assert_eq!(ready.status_code, 500);
        assert_eq!(ready.message, "Service is not ready");
        assert!(mock_service().health().is_success());
    }
}
