//! Provider Registry: mock table lookup or generative call
//!
//! Exactly one provider runs per request. There is no cross-provider
//! fallback here; callers decide that from the error code.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::backend::{GenerativeBackend, GenerativeCall};
use crate::core::mock_table::{self, MOCK_THEMES};
use crate::core::prompt::render_prompt;
use crate::core::request_slot::AbortSignal;
use crate::core::tokenizer::tokenize_compare;
use crate::error::{ProviderError, ProviderResult};
use crate::types::{PromptInputs, PromptSpec, ProviderKind, TwisterResult};
use crate::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Caller-supplied provider name if present, else the process default
pub fn resolve_provider(requested: Option<&str>, default: ProviderKind) -> ProviderKind {
    match requested {
        Some(name) if !name.trim().is_empty() => ProviderKind::from_name(name),
        _ => default,
    }
}

/// Strip one layer of matching surrounding quotes ("..." or '...')
pub fn trim_twister(text: &str) -> &str {
    let trimmed = text.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].trim();
        }
    }
    trimmed
}

/// Deterministic lookup in the mock catalogue
pub fn generate_mock(inputs: &PromptInputs) -> ProviderResult<TwisterResult> {
    let key = mock_table::resolve_theme_key(&inputs.theme)
        .ok_or_else(|| ProviderError::UnsupportedMockTheme(inputs.theme.clone()))?;

    let text = mock_table::lookup(key, inputs.length, inputs.difficulty)
        .ok_or_else(|| ProviderError::UnsupportedMockTheme(inputs.theme.clone()))?;

    debug!("Mock twister {}/{}/{}", key, inputs.length, inputs.difficulty);
    Ok(TwisterResult::mock(text))
}

/// Message listing the themes the mock can serve
pub fn available_mock_themes() -> String {
    format!("Available mock themes: {}", MOCK_THEMES.join(", "))
}

/// Selects and invokes a provider
pub struct ProviderRegistry {
    spec: PromptSpec,
    /// `None` when no credential is configured
    backend: Option<Arc<dyn GenerativeBackend>>,
    model: String,
    temperature: f32,
}

impl ProviderRegistry {
    pub fn new(spec: PromptSpec, backend: Option<Arc<dyn GenerativeBackend>>) -> Self {
        Self {
            spec,
            backend,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Mock only; generative calls fail with a missing credential
    pub fn mock_only() -> Self {
        Self::new(PromptSpec::default_twister(), None)
    }

    pub fn with_model(mut self, model: impl Into<String>, temperature: f32) -> Self {
        self.model = model.into();
        self.temperature = temperature;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.backend.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run exactly one provider
    pub async fn generate(
        &self,
        provider: ProviderKind,
        inputs: &PromptInputs,
        signal: &AbortSignal,
    ) -> ProviderResult<TwisterResult> {
        if signal.is_aborted() {
            return Err(ProviderError::Cancelled);
        }

        match provider {
            ProviderKind::Mock => generate_mock(inputs),
            ProviderKind::Generative => self.generate_generative(inputs, signal).await,
        }
    }

    async fn generate_generative(
        &self,
        inputs: &PromptInputs,
        signal: &AbortSignal,
    ) -> ProviderResult<TwisterResult> {
        let backend = self.backend.as_ref().ok_or(ProviderError::MissingCredential)?;

        let call = GenerativeCall {
            prompt: render_prompt(&self.spec, inputs),
            model: self.model.clone(),
            temperature: self.temperature,
        };

        info!("Generating twister via {} (theme={:?}, {}/{})",
              backend.name(), inputs.theme, inputs.difficulty, inputs.length);

        let reply = tokio::select! {
            reply = backend.generate(&call) => reply?,
            _ = signal.aborted() => {
                debug!("Generative call aborted");
                return Err(ProviderError::Cancelled);
            }
        };

        let text = trim_twister(&reply.text);
        if text.is_empty() {
            warn!("Generative backend returned empty text");
            return Err(ProviderError::EmptyOutput);
        }

        let range = inputs.length.word_range();
        let word_count = tokenize_compare(text).len();
        if !range.contains(word_count) {
            warn!("Rejecting twister with {} words (expected {})", word_count, range);
            return Err(ProviderError::InvalidOutput { word_count, range });
        }

        Ok(TwisterResult {
            raw_text: reply.text,
            provider: ProviderKind::Generative,
            model: Some(self.model.clone()),
            usage: reply.usage,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
