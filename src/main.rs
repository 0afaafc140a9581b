//! Twister CLI
//!
//! Usage:
//!   twister --theme sea --difficulty hard --length short    # One twister
//!   twister --theme sea --provider mock --json               # JSON envelope
//!   twister --theme animals --provider mock --play           # Speak it (stdin lines)
//!   twister --serve                                          # HTTP API server

use clap::Parser;
use colored::{ColoredString, Colorize};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::Level;

use twister::config::{non_empty, Config};
use twister::core::{
    run_server, EventSink, GameSession, GameStatus, RequestSlot, SpeechCapture, SpeechSession, TwisterService,
};
use twister::error::CaptureError;
use twister::types::{
    ApiResponse, GenerationRequest, ListeningStatus, ProviderKind, ScoreBreakdown, SpeechEvent,
    TokenMatchState, TwisterResponse,
};
use twister::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "twister",
    version = VERSION,
    about = "Generate tongue twisters and score how well you say them",
    long_about = "Twister generates alliterative tongue twisters from a theme,\n\
                  either from a built-in mock catalogue or a generative model.\n\n\
                  Modes:\n  \
                  (default)  Generate one twister\n  \
                  --play     Generate, then type what you said line by line\n  \
                  --serve    HTTP API server\n\n\
                  Difficulty: easy, medium, hard, expert\n\
                  Length:     short (4-8 words), medium (8-12), long (12-16)"
)]
struct Args {
    /// Theme, 2-40 characters
    #[arg(short, long)]
    theme: Option<String>,

    #[arg(short, long, default_value = "easy")]
    difficulty: String,

    #[arg(short, long, default_value = "short")]
    length: String,

    /// Provider for this request: mock or openai
    #[arg(short, long)]
    provider: Option<String>,

    /// Provider used when --provider is absent
    #[arg(long, env = "LLM_PROVIDER", default_value = "openai")]
    default_provider: String,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Play the generated twister: each stdin line is what you said,
    /// a blank line or EOF stops
    #[arg(long)]
    play: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server port
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            default_provider: ProviderKind::from_name(&self.default_provider),
            api_key: non_empty(self.api_key.clone()),
            model: self.model.clone(),
            temperature: self.temperature,
            base_url: self.base_url.clone(),
            addr: format!("127.0.0.1:{}", self.port),
            ..Config::default()
        }
    }

    fn request(&self) -> GenerationRequest {
        GenerationRequest {
            provider: self.provider.clone(),
            theme: self.theme.clone(),
            difficulty: Some(self.difficulty.clone()),
            length: Some(self.length.clone()),
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = args.config();
    let service = match TwisterService::new(config) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            eprintln!("Failed to set up generative backend: {}", e);
            std::process::exit(1);
        }
    };

    if args.serve {
        run_serve(service).await;
    } else if args.play {
        run_play(&args, service).await;
    } else {
        run_single(&args, service).await;
    }
}

/// Generate and print one twister
async fn run_single(args: &Args, service: Arc<TwisterService>) {
    let slot = RequestSlot::new();
    let Some(envelope) = service.generate_latest(&slot, &args.request()).await.into_response() else {
        return;
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&envelope).unwrap_or_default());
    } else {
        print_envelope(&envelope);
    }

    if !envelope.is_success() {
        std::process::exit(1);
    }
}

/// Generate, then score one spoken attempt typed on stdin
async fn run_play(args: &Args, service: Arc<TwisterService>) {
    let mut game = GameSession::new(service);

    if game.generate(args.request()).await != GameStatus::Success {
        if let Some(error) = game.error() {
            println!("{} {} ({})", "✗".red(), error.message, error.code);
            if error.code.suggests_mock_fallback() {
                println!("{}", "  Try again with --provider mock".dimmed());
            }
        }
        std::process::exit(1);
    }

    if let Some(twister) = game.twister() {
        print_header("Play");
        println!("  {}", twister.twister_text.bold());
        println!();
        println!("Type what you said and press Enter. Blank line or Ctrl-D stops.");
        println!("{}", "Stops on its own after 3 seconds without input.".dimmed());
        println!();
    }

    let mut capture = StdinCapture::default();
    let json = args.json;
    let status = game
        .play(&mut capture, |session| {
            if json {
                println!("{}", serde_json::to_string(session.states()).unwrap_or_default());
            } else {
                print_states(session);
            }
        })
        .await;

    let Some(session) = game.speech() else {
        return;
    };

    match status {
        Some(ListeningStatus::Error) => {
            let reason = session.error().map(ToString::to_string).unwrap_or_default();
            println!("{} {}", "✗".red(), reason);
            std::process::exit(1);
        }
        Some(ListeningStatus::Stopped) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.score()).unwrap_or_default());
            } else {
                print_result(session);
            }
        }
        _ => {}
    }
}

/// Run HTTP API server
async fn run_serve(service: Arc<TwisterService>) {
    let addr = service.config().addr.clone();
    print_header("API Server");

    if let Err(e) = run_server(&addr, service).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Stdin lines become committed transcript deltas
#[derive(Default)]
struct StdinCapture {
    task: Option<JoinHandle<()>>,
}

impl SpeechCapture for StdinCapture {
    fn start(&mut self, sink: EventSink) -> Result<(), CaptureError> {
        self.task = Some(tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                let event = match lines.next_line().await {
                    Ok(Some(line)) if !line.trim().is_empty() => SpeechEvent::committed(format!("{} ", line.trim())),
                    Ok(_) => SpeechEvent::End,
                    Err(e) => SpeechEvent::Error { message: e.to_string() },
                };
                let done = !matches!(event, SpeechEvent::Delta { .. });
                if !sink.emit(event).await || done {
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

fn print_header(mode: &str) {
    println!("{}", "════════════════════════════════════════".bold());
    println!("{}", format!("  🌀 Twister v{} - {}", VERSION, mode).bold());
    println!("{}", "════════════════════════════════════════".bold());
    println!();
}

fn print_envelope(envelope: &ApiResponse<TwisterResponse>) {
    match (&envelope.data, &envelope.error) {
        (Some(twister), _) => {
            println!("{} {}", "✓".green(), twister.twister_text.bold());
            println!(
                "{}",
                format!(
                    "  {} words | {} | theme: {} | {}",
                    twister.word_count(),
                    twister.provider,
                    twister.theme,
                    envelope.request_id
                )
                .dimmed()
            );
        }
        (None, Some(error)) => {
            println!("{} {}: {} ({})", "✗".red(), envelope.message, error.message, error.code);
            if error.code.suggests_mock_fallback() {
                println!("{}", "  Try again with --provider mock".dimmed());
            } else if error.code.is_invalid_input() {
                println!("{}", "  Check --theme, --difficulty and --length".dimmed());
            }
        }
        (None, None) => println!("{}", envelope.message),
    }
}

fn paint(word: &str, state: TokenMatchState) -> ColoredString {
    match state {
        TokenMatchState::Pending => word.dimmed(),
        TokenMatchState::Correct => word.green(),
        TokenMatchState::Incorrect => word.red(),
        TokenMatchState::Unstable => word.yellow(),
    }
}

/// One line of colored target words
fn print_states(session: &SpeechSession) {
    let words: Vec<String> = session
        .target()
        .iter()
        .zip(session.states())
        .map(|(word, state)| format!("{}{}", paint(word, *state), state.symbol().dimmed()))
        .collect();
    println!("  [{}] {}", session.status(), words.join(" "));
}

fn print_result(session: &SpeechSession) {
    println!();
    println!(
        "Accuracy: {}%  Time: {:.2}s",
        session.accuracy().unwrap_or(0),
        session.elapsed().map(|d| d.as_secs_f64()).unwrap_or(0.0)
    );
    if let Some(breakdown) = session.score() {
        print_breakdown(breakdown);
    }
}

fn print_breakdown(b: &ScoreBreakdown) {
    let headline = format!("  SCORE {}/100", b.score);
    let headline = if b.score >= 80 {
        headline.green().bold()
    } else if b.score >= 50 {
        headline.yellow().bold()
    } else {
        headline.red().bold()
    };
    println!("{}", headline);
    println!("    accuracy factor:   {:.2}", b.accuracy_factor);
    println!("    time:              {:.2}s (expected {:.2}s)", b.time_seconds, b.expected_time);
    println!("    time factor:       {:.3}", b.time_factor);
    println!("    difficulty factor: {:.1}", b.difficulty_factor);
    println!("    length factor:     {:.1}", b.length_factor);
    println!("    words:             {}", b.word_count);
    println!("{}", b.to_parseable_string().dimmed());
}
