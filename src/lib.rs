//! Twister: tongue twister generation and live speech scoring
//!
//! Request → validator → prompt renderer → provider registry → response builder,
//! then transcript aligner → scorer while the player speaks.

pub mod config;
pub mod error;
pub mod core;
pub mod types;

// =============================================================================
// REQUEST LIMITS
// =============================================================================

/// Minimum trimmed theme length
pub const THEME_MIN_CHARS: usize = 2;

/// Maximum trimmed theme length
pub const THEME_MAX_CHARS: usize = 40;

// =============================================================================
// SCORING [C] - seconds a phrase "should" take per word
// =============================================================================

pub const SECONDS_PER_WORD_EASY: f64 = 0.45;
pub const SECONDS_PER_WORD_MEDIUM: f64 = 0.55;
pub const SECONDS_PER_WORD_HARD: f64 = 0.65;
pub const SECONDS_PER_WORD_EXPERT: f64 = 0.75;

/// Bounds for (expected / actual)^0.7
pub const TIME_FACTOR_MIN: f64 = 0.6;
pub const TIME_FACTOR_MAX: f64 = 1.05;
pub const TIME_FACTOR_EXPONENT: f64 = 0.7;

/// Exponent applied to the accuracy factor
pub const ACCURACY_EXPONENT: f64 = 1.2;

/// Divisor of the time bonus/penalty term
pub const TIME_ADJUSTMENT_DIVISOR: f64 = 3.7;

/// Above this accuracy the time term is added, otherwise subtracted
pub const ACCURACY_BONUS_THRESHOLD: f64 = 50.0;

// =============================================================================
// SPEECH SESSION
// =============================================================================

/// Quiet interval after which a listening session is stopped (milliseconds)
pub const SILENCE_TIMEOUT_MS: u64 = 3000;

/// How often the silence watchdog looks at the last update (milliseconds)
pub const SILENCE_CHECK_INTERVAL_MS: u64 = 500;

// =============================================================================
// GENERATIVE BACKEND
// =============================================================================

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Creative sampling level for every generative call
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
