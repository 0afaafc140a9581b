//! Score breakdown

use serde::{Deserialize, Serialize};

/// Final score with every intermediate factor kept for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// 0-100
    pub score: u32,
    pub accuracy_factor: f64,
    pub time_seconds: f64,
    pub expected_time: f64,
    pub time_factor: f64,
    /// Always 1.0 for now
    pub difficulty_factor: f64,
    /// Always 1.0 for now
    pub length_factor: f64,
    pub word_count: usize,
}

impl ScoreBreakdown {
    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "score={} | accuracy={:.2} | time={:.2}s | expected={:.2}s | time_factor={:.3} | words={}",
            self.score,
            self.accuracy_factor,
            self.time_seconds,
            self.expected_time,
            self.time_factor,
            self.word_count
        )
    }
}
