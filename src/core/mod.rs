//! Core modules for Twister

pub mod tokenizer;
pub mod validator;
pub mod prompt;
pub mod mock_table;
pub mod backend;
pub mod provider;
pub mod response;
pub mod request_slot;
pub mod service;
pub mod aligner;
pub mod scorer;
pub mod session;
pub mod api;

pub use tokenizer::{tokenize, tokenize_compare, tokenize_display, to_compare_tokens, TokenMode};
pub use validator::validate;
pub use prompt::render_prompt;
pub use backend::{BackendReply, GenerativeBackend, GenerativeCall, OpenAiBackend};
pub use provider::{generate_mock, resolve_provider, trim_twister, ProviderRegistry};
pub use response::{build_response, compare_tokens};
pub use request_slot::{AbortSignal, RequestSlot, RequestTicket};
pub use service::{Generated, TwisterService};
pub use aligner::{accuracy_percent, align};
pub use scorer::{score, score_attempt, ScoreInputs};
pub use session::{
    run_session, EventSink, GameSession, GameStatus, ScriptedCapture, SessionInput,
    SilenceWatchdog, SpeechCapture, SpeechSession,
};
pub use api::{create_router, run_server};
