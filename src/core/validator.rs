//! Validator: raw request parameters → normalized prompt inputs
//!
//! Checks run in a fixed order and the first failure wins:
//! theme (2-40 chars after trim) → difficulty → length.

use crate::{THEME_MAX_CHARS, THEME_MIN_CHARS};
use crate::types::{Difficulty, ErrorCode, LengthPreset, PromptInputs, ValidationResult};

/// Validate raw parameters. Returns the trimmed, lower-cased theme on success.
pub fn validate(theme: Option<&str>, difficulty: Option<&str>, length: Option<&str>) -> ValidationResult {
    let theme = normalize_theme(theme);
    let theme_chars = theme.chars().count();

    if !(THEME_MIN_CHARS..=THEME_MAX_CHARS).contains(&theme_chars) {
        return ValidationResult::invalid(
            ErrorCode::InvalidTheme,
            format!("Theme must be {}-{} characters", THEME_MIN_CHARS, THEME_MAX_CHARS),
        );
    }

    let Some(difficulty) = difficulty.and_then(Difficulty::parse) else {
        return ValidationResult::invalid(ErrorCode::InvalidDifficulty, "Invalid difficulty");
    };

    let Some(length) = length.and_then(LengthPreset::parse) else {
        return ValidationResult::invalid(ErrorCode::InvalidLength, "Invalid length");
    };

    ValidationResult::Valid(PromptInputs { theme, difficulty, length })
}

/// Trim and lower-case a theme
pub fn normalize_theme(theme: Option<&str>) -> String {
    theme.unwrap_or_default().trim().to_lowercase()
}

// =============================================================================
// TESTS
// =============================================================================
