//! Process configuration, built once at startup
//!
//! `LLM_PROVIDER`, `OPENAI_API_KEY` and `PORT` are read by clap's `env`
//! fallbacks in `main.rs`, which fills in a `Config`.

use std::time::Duration;

use crate::types::ProviderKind;
use crate::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, SILENCE_CHECK_INTERVAL_MS,
    SILENCE_TIMEOUT_MS,
};

/// When a listening session counts as silent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilencePolicy {
    /// No transcript update for this long stops the session
    pub quiet_after: Duration,
    /// Watchdog tick period
    pub check_every: Duration,
}

impl Default for SilencePolicy {
    fn default() -> Self {
        Self {
            quiet_after: Duration::from_millis(SILENCE_TIMEOUT_MS),
            check_every: Duration::from_millis(SILENCE_CHECK_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_provider: ProviderKind,
    /// Opaque credential, presence-checked only
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    pub silence: SilencePolicy,
    pub addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: ProviderKind::Generative,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            silence: SilencePolicy::default(),
            addr: "127.0.0.1:3001".to_string(),
        }
    }
}

impl Config {
    /// Config that never reaches the network
    pub fn mock() -> Self {
        Self {
            default_provider: ProviderKind::Mock,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = non_empty(api_key);
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Empty or whitespace-only strings count as absent
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
