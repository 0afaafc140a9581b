//! Request presets: difficulty, length and provider

use serde::{Deserialize, Serialize};
use crate::{
    SECONDS_PER_WORD_EASY, SECONDS_PER_WORD_MEDIUM,
    SECONDS_PER_WORD_HARD, SECONDS_PER_WORD_EXPERT,
};

/// How hard the twister should be to say
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Parse an accepted wire value (exact, lower-case)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    /// Alliteration-intensity hint appended to the prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Easy => "Use simple words and gentle alliteration that is still twister-like.",
            Self::Medium => "Use moderate alliteration with clear, readable words.",
            Self::Hard => "Use strong alliteration and tricky consonant clusters.",
            Self::Expert => "Maximize alliteration with dense, challenging consonant patterns.",
        }
    }

    /// Baseline speaking pace used by the scorer
    pub fn seconds_per_word(&self) -> f64 {
        match self {
            Self::Easy => SECONDS_PER_WORD_EASY,
            Self::Medium => SECONDS_PER_WORD_MEDIUM,
            Self::Hard => SECONDS_PER_WORD_HARD,
            Self::Expert => SECONDS_PER_WORD_EXPERT,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Length preset chosen in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPreset {
    Short,
    Medium,
    Long,
}

impl LengthPreset {
    pub const ALL: [LengthPreset; 3] = [LengthPreset::Short, LengthPreset::Medium, LengthPreset::Long];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Inclusive word-count range for this preset
    pub fn word_range(&self) -> CountRange {
        match self {
            Self::Short => CountRange::new(4, 8),
            Self::Medium => CountRange::new(8, 12),
            Self::Long => CountRange::new(12, 16),
        }
    }
}

impl std::fmt::Display for LengthPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive `[min, max]` range. Neighbouring presets may share a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

impl std::fmt::Display for CountRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Twister-producing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Deterministic table lookup
    #[serde(rename = "mock")]
    Mock,
    /// Generative text provider
    #[serde(rename = "openai", alias = "generative")]
    Generative,
}

impl ProviderKind {
    /// Resolve a provider name; anything unrecognized is the mock
    pub fn from_name(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" | "generative" => Self::Generative,
            _ => Self::Mock,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Generative => "openai",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
