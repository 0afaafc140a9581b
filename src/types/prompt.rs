//! Static prompt configuration

use serde::{Deserialize, Serialize};
use crate::types::CountRange;

/// Output constraints stated in the prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptConstraints {
    pub sentence_range: CountRange,
    /// Default word range; the rendered prompt uses the length preset's range instead
    pub word_range: CountRange,
    pub require_alliteration: bool,
    pub require_safe_language: bool,
    pub output_only: bool,
}

/// Prompt template, built once and shared read-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSpec {
    pub system_instruction: String,
    pub task_instruction: String,
    pub constraints: PromptConstraints,
}

impl PromptSpec {
    /// The tongue twister prompt
    pub fn default_twister() -> Self {
        Self {
            system_instruction: "You generate tongue twisters. Follow the constraints exactly. Output only the twister text.".to_string(),
            task_instruction: "Generate a tongue twister based on the provided theme.".to_string(),
            constraints: PromptConstraints {
                sentence_range: CountRange::new(1, 2),
                word_range: CountRange::new(8, 12),
                require_alliteration: true,
                require_safe_language: true,
                output_only: true,
            },
        }
    }
}

impl Default for PromptSpec {
    fn default() -> Self {
        Self::default_twister()
    }
}
