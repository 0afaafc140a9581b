//! Core types for Twister

mod preset;
mod request;
mod envelope;
mod prompt;
mod twister;
mod transcript;
mod score;

pub use preset::{Difficulty, LengthPreset, CountRange, ProviderKind};
pub use request::{GenerationRequest, PromptInputs, ValidationResult};
pub use envelope::{ApiError, ApiResponse, ErrorCode};
pub use prompt::{PromptSpec, PromptConstraints};
pub use twister::{TwisterResult, TwisterResponse, Usage};
pub use transcript::{TokenMatchState, ListeningStatus, TranscriptState, SpeechEvent};
pub use score::ScoreBreakdown;
