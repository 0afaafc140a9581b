//! Transcript Aligner: positional comparison of spoken vs target tokens
//!
//! For each target index `i`:
//! - no combined token at `i` → Pending
//! - combined token equals target → Correct
//! - a committed token sits at `i` → Incorrect
//! - otherwise → Unstable
//!
//! Alignment is strictly positional. An inserted or dropped word shifts
//! every later comparison.

use crate::core::tokenizer::tokenize_compare;
use crate::types::{TokenMatchState, TranscriptState};

/// Recompute every target token's state from the transcript
pub fn align(target: &[String], transcript: &TranscriptState) -> Vec<TokenMatchState> {
    let final_tokens = tokenize_compare(&transcript.final_text);
    let combined_tokens = tokenize_compare(&format!("{} {}", transcript.final_text, transcript.interim_text));

    target
        .iter()
        .enumerate()
        .map(|(i, expected)| match combined_tokens.get(i) {
            None => TokenMatchState::Pending,
            Some(spoken) if spoken == expected => TokenMatchState::Correct,
            Some(_) if i < final_tokens.len() => TokenMatchState::Incorrect,
            Some(_) => TokenMatchState::Unstable,
        })
        .collect()
}

pub fn count_correct(states: &[TokenMatchState]) -> usize {
    states.iter().filter(|s| **s == TokenMatchState::Correct).count()
}

/// round(correct / total * 100); 0 with no target tokens
pub fn accuracy_percent(states: &[TokenMatchState]) -> u32 {
    if states.is_empty() {
        return 0;
    }
    (count_correct(states) as f64 / states.len() as f64 * 100.0).round() as u32
}
