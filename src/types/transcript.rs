//! Transcript, speech events and per-token match states

use serde::{Deserialize, Serialize};

/// Match state of one target token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenMatchState {
    /// Speaker has not reached this word yet
    Pending,
    Correct,
    /// A committed word sits here and does not match
    Incorrect,
    /// Only an interim word sits here; it may still change
    Unstable,
}

impl TokenMatchState {
    /// Marker printed after each word in the terminal
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenMatchState::Pending => "·",
            TokenMatchState::Correct => "✓",
            TokenMatchState::Incorrect => "✗",
            TokenMatchState::Unstable => "~",
        }
    }
}

/// Speech session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListeningStatus {
    Idle,
    Listening,
    Stopped,
    Error,
}

impl std::fmt::Display for ListeningStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ListeningStatus::Idle => "IDLE",
            ListeningStatus::Listening => "LISTENING",
            ListeningStatus::Stopped => "STOPPED",
            ListeningStatus::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// Accumulated transcript. `final_text` only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptState {
    pub interim_text: String,
    pub final_text: String,
}

impl TranscriptState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the interim hypothesis and append the committed delta
    pub fn apply(&mut self, interim_text: &str, final_text_delta: &str) {
        self.interim_text = interim_text.to_string();
        self.final_text.push_str(final_text_delta);
    }

    pub fn clear(&mut self) {
        self.interim_text.clear();
        self.final_text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.interim_text.is_empty() && self.final_text.is_empty()
    }
}

/// Events emitted by the speech capture capability, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SpeechEvent {
    Delta {
        interim_text: String,
        final_text_delta: String,
    },
    /// Engine failure; terminal until restart
    Error { message: String },
    /// Engine ended the session on its own
    End,
}

impl SpeechEvent {
    pub fn delta(interim_text: impl Into<String>, final_text_delta: impl Into<String>) -> Self {
        Self::Delta {
            interim_text: interim_text.into(),
            final_text_delta: final_text_delta.into(),
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self::delta(text, "")
    }

    pub fn committed(text: impl Into<String>) -> Self {
        Self::delta("", text)
    }
}
