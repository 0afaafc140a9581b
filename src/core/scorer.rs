//! Scorer: accuracy + elapsed time → 0-100 score with breakdown
//!
//! ```text
//! accuracy_factor = clamp(0, 1, accuracy / 100)
//! expected_time   = word_count * seconds_per_word(difficulty)
//! time_factor     = clamp(0.6, 1.05, (expected_time / time)^0.7)
//! raw             = 100 * accuracy_factor^1.2 * time_factor
//! score           = round(clamp(0, 100, raw) ± (expected_time - time) / 3.7)
//! ```
//! The adjustment is added above 50% accuracy and subtracted otherwise.
//! The result is clamped to [0, 100] and forced to 0 at zero accuracy.

use crate::types::{Difficulty, LengthPreset, ScoreBreakdown};
use crate::{
    ACCURACY_BONUS_THRESHOLD, ACCURACY_EXPONENT, TIME_ADJUSTMENT_DIVISOR, TIME_FACTOR_EXPONENT,
    TIME_FACTOR_MAX, TIME_FACTOR_MIN,
};

/// Inputs gathered at the end of an attempt. Any may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreInputs {
    pub accuracy_percent: Option<f64>,
    pub time_seconds: Option<f64>,
    pub difficulty: Option<Difficulty>,
    pub length: Option<LengthPreset>,
    pub word_count: Option<usize>,
}

/// `None` when an input is missing, the word count is zero, or the time
/// is negative or not a number
pub fn score(inputs: &ScoreInputs) -> Option<ScoreBreakdown> {
    let accuracy = inputs.accuracy_percent.filter(|a| !a.is_nan())?;
    let time_seconds = inputs.time_seconds.filter(|t| *t >= 0.0)?;
    let difficulty = inputs.difficulty?;
    // length is required but not weighted yet
    inputs.length?;
    let word_count = inputs.word_count.filter(|wc| *wc > 0)?;

    let accuracy_factor = (accuracy / 100.0).clamp(0.0, 1.0);

    let expected_time = word_count as f64 * difficulty.seconds_per_word();
    // expected / 0 is +inf, which clamps to the max factor
    let time_factor = (expected_time / time_seconds)
        .powf(TIME_FACTOR_EXPONENT)
        .clamp(TIME_FACTOR_MIN, TIME_FACTOR_MAX);

    let raw = 100.0 * accuracy_factor.powf(ACCURACY_EXPONENT) * time_factor;
    let adjustment = (expected_time - time_seconds) / TIME_ADJUSTMENT_DIVISOR;
    let adjusted = if accuracy > ACCURACY_BONUS_THRESHOLD {
        raw.clamp(0.0, 100.0) + adjustment
    } else {
        raw.clamp(0.0, 100.0) - adjustment
    };

    let score = if accuracy <= 0.0 {
        0
    } else {
        adjusted.round().clamp(0.0, 100.0) as u32
    };

    Some(ScoreBreakdown {
        score,
        accuracy_factor,
        time_seconds,
        expected_time,
        time_factor,
        difficulty_factor: 1.0,
        length_factor: 1.0,
        word_count,
    })
}

/// Score a finished attempt with every input present
pub fn score_attempt(
    accuracy_percent: f64,
    time_seconds: f64,
    difficulty: Difficulty,
    length: LengthPreset,
    word_count: usize,
) -> Option<ScoreBreakdown> {
    score(&ScoreInputs {
        accuracy_percent: Some(accuracy_percent),
        time_seconds: Some(time_seconds),
        difficulty: Some(difficulty),
        length: Some(length),
        word_count: Some(word_count),
    })
}

// =============================================================================
// TESTS
// =============================================================================
