//! Play loop: speech session state machine, silence watchdog, game session
//!
//! Speech session lifecycle:
//! - IDLE → LISTENING: capture started
//! - LISTENING → STOPPED: stop(), engine end, or silence timeout
//! - LISTENING → ERROR: capture unavailable or engine error
//! - STOPPED | ERROR → LISTENING: restart (clears transcript and states)
//!
//! Entering STOPPED captures elapsed time, accuracy and the score.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::SilencePolicy;
use crate::core::aligner::{accuracy_percent, align};
use crate::core::response::compare_tokens;
use crate::core::scorer::score_attempt;
use crate::core::request_slot::RequestSlot;
use crate::core::service::{Generated, TwisterService};
use crate::core::tokenizer::to_compare_tokens;
use crate::error::CaptureError;
use crate::types::{
    ApiError, Difficulty, GenerationRequest, LengthPreset, ListeningStatus, ScoreBreakdown,
    SpeechEvent, TokenMatchState, TranscriptState, TwisterResponse,
};

/// Everything the session driver reacts to, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum SessionInput {
    Speech(SpeechEvent),
    SilenceCheck,
}

/// Where a capture pushes its events
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::Sender<SessionInput>,
}

impl EventSink {
    pub fn new(tx: mpsc::Sender<SessionInput>) -> Self {
        Self { tx }
    }

    /// False once the session is gone
    pub async fn emit(&self, event: SpeechEvent) -> bool {
        self.tx.send(SessionInput::Speech(event)).await.is_ok()
    }
}

/// Speech capture capability
pub trait SpeechCapture: Send {
    fn start(&mut self, sink: EventSink) -> Result<(), CaptureError>;
    fn stop(&mut self);
}

/// Capture that replays a fixed list of events, each after its delay
#[derive(Debug, Default)]
pub struct ScriptedCapture {
    script: Vec<(Duration, SpeechEvent)>,
    task: Option<JoinHandle<()>>,
}

impl ScriptedCapture {
    pub fn new(script: Vec<(Duration, SpeechEvent)>) -> Self {
        Self { script, task: None }
    }
}

impl SpeechCapture for ScriptedCapture {
    fn start(&mut self, sink: EventSink) -> Result<(), CaptureError> {
        let script = self.script.clone();
        self.task = Some(tokio::spawn(async move {
            for (delay, event) in script {
                tokio::time::sleep(delay).await;
                if !sink.emit(event).await {
                    break;
                }
            }
        }));
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for ScriptedCapture {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Periodic silence check; the task dies with this handle
#[derive(Debug)]
pub struct SilenceWatchdog {
    task: JoinHandle<()>,
}

impl SilenceWatchdog {
    pub fn spawn(tx: mpsc::Sender<SessionInput>, every: Duration) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(SessionInput::SilenceCheck).await.is_err() {
                    break;
                }
            }
        });
        Self { task }
    }
}

impl Drop for SilenceWatchdog {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// =============================================================================
// SPEECH SESSION
// =============================================================================

/// One attempt at speaking a target phrase
#[derive(Debug, Clone)]
pub struct SpeechSession {
    target: Vec<String>,
    difficulty: Difficulty,
    length: LengthPreset,
    silence: SilencePolicy,
    status: ListeningStatus,
    error: Option<CaptureError>,
    transcript: TranscriptState,
    states: Vec<TokenMatchState>,
    started_at: Option<Instant>,
    last_update: Option<Instant>,
    elapsed: Option<Duration>,
    accuracy: Option<u32>,
    score: Option<ScoreBreakdown>,
}

impl SpeechSession {
    /// `target` may be display tokens; they are compared lower-cased
    pub fn new<S: AsRef<str>>(
        target: &[S],
        difficulty: Difficulty,
        length: LengthPreset,
        silence: SilencePolicy,
    ) -> Self {
        let target = to_compare_tokens(target);
        let states = vec![TokenMatchState::Pending; target.len()];
        Self {
            target,
            difficulty,
            length,
            silence,
            status: ListeningStatus::Idle,
            error: None,
            transcript: TranscriptState::new(),
            states,
            started_at: None,
            last_update: None,
            elapsed: None,
            accuracy: None,
            score: None,
        }
    }

    pub fn for_twister(
        twister: &TwisterResponse,
        difficulty: Difficulty,
        length: LengthPreset,
        silence: SilencePolicy,
    ) -> Self {
        Self::new(&compare_tokens(twister), difficulty, length, silence)
    }

    pub fn status(&self) -> ListeningStatus {
        self.status
    }

    pub fn is_listening(&self) -> bool {
        self.status == ListeningStatus::Listening
    }

    pub fn error(&self) -> Option<&CaptureError> {
        self.error.as_ref()
    }

    pub fn target(&self) -> &[String] {
        &self.target
    }

    pub fn transcript(&self) -> &TranscriptState {
        &self.transcript
    }

    pub fn states(&self) -> &[TokenMatchState] {
        &self.states
    }

    pub fn silence(&self) -> SilencePolicy {
        self.silence
    }

    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn accuracy(&self) -> Option<u32> {
        self.accuracy
    }

    pub fn score(&self) -> Option<&ScoreBreakdown> {
        self.score.as_ref()
    }

    /// Start listening; toggles to STOPPED when already listening
    pub fn start(&mut self, capture: &mut dyn SpeechCapture, sink: EventSink) -> ListeningStatus {
        if self.is_listening() {
            self.stop(capture);
            return self.status;
        }

        self.clear();
        match capture.start(sink) {
            Ok(()) => {
                let now = Instant::now();
                self.status = ListeningStatus::Listening;
                self.started_at = Some(now);
                self.last_update = Some(now);
                debug!("Listening for {} target words", self.target.len());
            }
            Err(err) => {
                warn!("Speech capture failed to start: {}", err);
                self.status = ListeningStatus::Error;
                self.error = Some(err);
            }
        }
        self.status
    }

    /// Process one capture event. Ignored unless listening.
    pub fn apply(&mut self, event: SpeechEvent) -> ListeningStatus {
        if !self.is_listening() {
            debug!("Ignoring speech event while {}", self.status);
            return self.status;
        }

        match event {
            SpeechEvent::Delta { interim_text, final_text_delta } => {
                self.transcript.apply(&interim_text, &final_text_delta);
                self.states = align(&self.target, &self.transcript);
                self.last_update = Some(Instant::now());
            }
            SpeechEvent::Error { message } => {
                warn!("Speech engine error: {}", message);
                self.status = ListeningStatus::Error;
                self.error = Some(CaptureError::Engine(message));
            }
            SpeechEvent::End => self.finish(Instant::now()),
        }
        self.status
    }

    pub fn stop(&mut self, capture: &mut dyn SpeechCapture) {
        capture.stop();
        if self.is_listening() {
            self.finish(Instant::now());
        }
    }

    /// Back to IDLE with nothing retained
    pub fn reset(&mut self, capture: &mut dyn SpeechCapture) {
        capture.stop();
        self.clear();
        self.status = ListeningStatus::Idle;
    }

    /// Stop if nothing arrived for the quiet interval. True when it stopped.
    pub fn check_silence(&mut self, now: Instant) -> bool {
        if !self.is_listening() {
            return false;
        }
        let Some(last) = self.last_update else {
            return false;
        };
        if now.saturating_duration_since(last) < self.silence.quiet_after {
            return false;
        }

        info!("No speech for {:?}, stopping", self.silence.quiet_after);
        self.finish(now);
        true
    }

    fn finish(&mut self, now: Instant) {
        self.status = ListeningStatus::Stopped;

        let elapsed = self
            .started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        let accuracy = accuracy_percent(&self.states);

        self.elapsed = Some(elapsed);
        self.accuracy = Some(accuracy);
        self.score = score_attempt(
            accuracy as f64,
            elapsed.as_secs_f64(),
            self.difficulty,
            self.length,
            self.target.len(),
        );

        debug!("Attempt stopped: accuracy={}% elapsed={:.2}s", accuracy, elapsed.as_secs_f64());
    }

    fn clear(&mut self) {
        self.transcript.clear();
        self.states = vec![TokenMatchState::Pending; self.target.len()];
        self.error = None;
        self.started_at = None;
        self.last_update = None;
        self.elapsed = None;
        self.accuracy = None;
        self.score = None;
    }
}

/// Drive one listening attempt until it leaves LISTENING.
///
/// Capture events and watchdog ticks share one channel, so they are handled
/// strictly in arrival order. `on_update` runs after every handled input.
pub async fn run_session<F>(
    session: &mut SpeechSession,
    capture: &mut dyn SpeechCapture,
    mut on_update: F,
) -> ListeningStatus
where
    F: FnMut(&SpeechSession),
{
    let (tx, mut rx) = mpsc::channel(64);

    if session.start(capture, EventSink::new(tx.clone())) != ListeningStatus::Listening {
        return session.status();
    }
    let _watchdog = SilenceWatchdog::spawn(tx, session.silence().check_every);

    while let Some(input) = rx.recv().await {
        match input {
            SessionInput::Speech(event) => {
                session.apply(event);
            }
            SessionInput::SilenceCheck => {
                if session.check_silence(Instant::now()) {
                    capture.stop();
                }
            }
        }
        on_update(session);

        if !session.is_listening() {
            break;
        }
    }

    if session.is_listening() {
        session.stop(capture);
    } else {
        capture.stop();
    }
    session.status()
}

// =============================================================================
// GAME SESSION
// =============================================================================

/// Generation lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Pending,
    Success,
    Error,
}

/// A generated twister plus the attempt at speaking it
pub struct GameSession {
    service: Arc<TwisterService>,
    slot: Arc<RequestSlot>,
    status: GameStatus,
    last_request: Option<GenerationRequest>,
    twister: Option<TwisterResponse>,
    error: Option<ApiError>,
    speech: Option<SpeechSession>,
}

impl GameSession {
    pub fn new(service: Arc<TwisterService>) -> Self {
        Self {
            service,
            slot: Arc::new(RequestSlot::new()),
            status: GameStatus::Idle,
            last_request: None,
            twister: None,
            error: None,
            speech: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn twister(&self) -> Option<&TwisterResponse> {
        self.twister.as_ref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn speech(&self) -> Option<&SpeechSession> {
        self.speech.as_ref()
    }

    pub fn speech_mut(&mut self) -> Option<&mut SpeechSession> {
        self.speech.as_mut()
    }

    /// Handle that aborts this game's in-flight generation from elsewhere
    pub fn request_slot(&self) -> Arc<RequestSlot> {
        self.slot.clone()
    }

    /// Request a new twister, dropping the previous one. A cancelled request
    /// settles back to `Idle` with nothing to show.
    pub async fn generate(&mut self, request: GenerationRequest) -> GameStatus {
        self.status = GameStatus::Pending;
        self.last_request = Some(request.clone());
        self.twister = None;
        self.speech = None;
        self.error = None;

        match self.service.generate_latest(&self.slot, &request).await {
            Generated::Cancelled => {
                debug!("Generation cancelled");
                self.status = GameStatus::Idle;
            }
            Generated::Ready(response) if response.is_success() => {
                self.status = GameStatus::Success;
                self.speech = response.data.as_ref().map(|twister| {
                    SpeechSession::for_twister(
                        twister,
                        parse_or_default(request.difficulty.as_deref(), Difficulty::parse, Difficulty::Easy),
                        parse_or_default(request.length.as_deref(), LengthPreset::parse, LengthPreset::Short),
                        self.service.config().silence,
                    )
                });
                self.twister = response.data;
            }
            Generated::Ready(response) => {
                self.status = GameStatus::Error;
                self.error = response.error;
            }
        }
        self.status
    }

    /// Repeat the last request, if any
    pub async fn retry(&mut self) -> GameStatus {
        match self.last_request.clone() {
            Some(request) => self.generate(request).await,
            None => self.status,
        }
    }

    /// Run one listening attempt on the current twister
    pub async fn play<F>(&mut self, capture: &mut dyn SpeechCapture, on_update: F) -> Option<ListeningStatus>
    where
        F: FnMut(&SpeechSession),
    {
        if self.status != GameStatus::Success {
            return None;
        }
        let speech = self.speech.as_mut()?;
        Some(run_session(speech, capture, on_update).await)
    }
}

fn parse_or_default<T>(value: Option<&str>, parse: fn(&str) -> Option<T>, default: T) -> T {
    value.and_then(parse).unwrap_or(default)
}

// =============================================================================
// TESTS
// =============================================================================
