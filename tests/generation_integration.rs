//! Integration tests for generation
//!
//! Tests the full path: request → validator → provider → response → envelope

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

use twister::config::Config;
use twister::core::{
    compare_tokens, tokenize_compare, AbortSignal, BackendReply, GameSession, GameStatus,
    GenerativeBackend, GenerativeCall, Generated, RequestSlot, TwisterService,
};
use twister::error::BackendError;
use twister::types::{Difficulty, ErrorCode, GenerationRequest, LengthPreset, ProviderKind, Usage};

/// Backend that answers with fixed text after an optional delay
struct FixedBackend {
    text: String,
    delay: Duration,
}

impl FixedBackend {
    fn new(text: &str) -> Self {
        Self { text: text.to_string(), delay: Duration::ZERO }
    }
}

#[async_trait]
impl GenerativeBackend for FixedBackend {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn generate(&self, _call: &GenerativeCall) -> Result<BackendReply, BackendError> {
        tokio::time::sleep(self.delay).await;
        Ok(BackendReply {
            text: self.text.clone(),
            usage: Some(Usage { input_tokens: Some(120), output_tokens: Some(9), total_tokens: Some(129) }),
        })
    }
}

struct FailingBackend;

#[async_trait]
impl GenerativeBackend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _call: &GenerativeCall) -> Result<BackendReply, BackendError> {
        Err(BackendError::Status { status: 401, body: "invalid key".to_string() })
    }
}

fn generative_service(backend: impl GenerativeBackend + 'static) -> TwisterService {
    let config = Config::default().with_api_key(Some("sk-test".to_string()));
    TwisterService::with_backend(config, Some(Arc::new(backend)))
}

fn mock_service() -> TwisterService {
    TwisterService::with_backend(Config::mock(), None)
}

async fn run(service: &TwisterService, request: GenerationRequest) -> twister::types::ApiResponse<twister::types::TwisterResponse> {
    service
        .generate(&request, &AbortSignal::new())
        .await
        .into_response()
        .expect("not cancelled")
}

/// Every mock cell comes back verbatim with matching tokens
#[tokio::test]
async fn test_mock_catalogue_round_trip() {
    let service = mock_service();
    for theme in ["sea", "cooking", "space", "music", "sports", "animals"] {
        for difficulty in Difficulty::ALL {
            for length in LengthPreset::ALL {
                let request = GenerationRequest::new(theme, difficulty.as_str(), length.as_str());
                let response = run(&service, request).await;
                assert!(response.is_success(), "{}/{}/{}", theme, difficulty, length);

                let data = response.data.unwrap();
                assert_eq!(compare_tokens(&data), tokenize_compare(&data.twister_text));
                assert_eq!(data.provider, ProviderKind::Mock);
            }
        }
    }
}

#[tokio::test]
async fn test_mock_deep_sea_hard_short() {
    let request = GenerationRequest::new("deep sea adventure", "hard", "short");
    let data = run(&mock_service(), request).await.data.unwrap();
    assert_eq!(data.twister_text, "Swift sea swans swish, slosh.");
    assert_eq!(data.theme, "deep sea adventure");
}

#[tokio::test]
async fn test_validation_order() {
    let service = mock_service();

    let response = run(&service, GenerationRequest::new("ok", "bogus", "nope")).await;
    assert_eq!(response.error_code(), Some(ErrorCode::InvalidDifficulty));

    let response = run(&service, GenerationRequest::new("a", "bogus", "nope")).await;
    assert_eq!(response.error_code(), Some(ErrorCode::InvalidTheme));

    let response = run(&service, GenerationRequest::new("sea", "easy", "huge")).await;
    assert_eq!(response.error_code(), Some(ErrorCode::InvalidLength));
    assert_eq!(response.status_code, 400);

    let response = run(&service, GenerationRequest::default()).await;
    assert_eq!(response.error_code(), Some(ErrorCode::InvalidTheme));
}

#[tokio::test]
async fn test_generative_success_carries_metadata() {
    let service = generative_service(FixedBackend::new("'Sly sea slugs slide softly.'"));
    let request = GenerationRequest::new("sea", "easy", "short").with_provider(ProviderKind::Generative);

    let response = run(&service, request).await;
    assert!(response.is_success());

    let data = response.data.unwrap();
    assert_eq!(data.twister_text, "Sly sea slugs slide softly.");
    assert_eq!(data.provider, ProviderKind::Generative);
    assert_eq!(data.model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(data.usage.unwrap().total_tokens, Some(129));
}

#[tokio::test]
async fn test_generative_output_out_of_range() {
    let twenty = vec!["swish"; 20].join(" ");
    let service = generative_service(FixedBackend::new(&twenty));
    let request = GenerationRequest::new("sea", "easy", "short").with_provider(ProviderKind::Generative);

    let response = run(&service, request).await;
    assert_eq!(response.status_code, 500);
    assert_eq!(response.message, "Provider error");
    assert_eq!(response.error_code(), Some(ErrorCode::ProviderFailure));
}

#[tokio::test]
async fn test_backend_failure_is_provider_failure() {
    let service = generative_service(FailingBackend);
    let response = run(&service, GenerationRequest::new("sea", "easy", "short")).await;
    assert_eq!(response.error_code(), Some(ErrorCode::ProviderFailure));
    assert!(response.error.unwrap().message.contains("401"));
}

#[tokio::test]
async fn test_default_provider_applies_without_request_provider() {
    let service = generative_service(FixedBackend::new("Quick quokkas quietly quilt."));
    let response = run(&service, GenerationRequest::new("quokka", "easy", "short")).await;
    assert_eq!(response.data.unwrap().provider, ProviderKind::Generative);

    let response = run(&service, GenerationRequest::new("quokka", "easy", "short").with_provider(ProviderKind::Mock)).await;
    assert_eq!(response.error_code(), Some(ErrorCode::InvalidTheme));
}

/// A newer request on the same slot supersedes an older one
#[tokio::test]
async fn test_newer_request_supersedes_older() {
    let mut slow = FixedBackend::new("Sly sea slugs slide softly.");
    slow.delay = Duration::from_millis(300);
    let service = Arc::new(generative_service(slow));
    let slot = Arc::new(RequestSlot::new());

    let first = {
        let service = service.clone();
        let slot = slot.clone();
        tokio::spawn(async move {
            service.generate_latest(&slot, &GenerationRequest::new("sea", "easy", "short")).await
        })
    };
    tokio::time::sleep(Duration::from_millis(30)).await;

    let second = service
        .generate_latest(&slot, &GenerationRequest::new("sea", "easy", "short").with_provider(ProviderKind::Mock))
        .await;

    assert_eq!(first.await.unwrap(), Generated::Cancelled);
    assert!(second.into_response().unwrap().is_success());
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    let mut slow = FixedBackend::new("Sly sea slugs slide softly.");
    slow.delay = Duration::from_secs(5);
    let service = Arc::new(generative_service(slow));
    let slot = Arc::new(RequestSlot::new());

    let pending = {
        let service = service.clone();
        let slot = slot.clone();
        tokio::spawn(async move {
            service.generate_latest(&slot, &GenerationRequest::new("sea", "easy", "short")).await
        })
    };
    tokio::time::sleep(Duration::from_millis(30)).await;
    slot.cancel();

    let outcome = tokio::time::timeout(Duration::from_secs(1), pending).await.unwrap().unwrap();
    assert!(outcome.is_cancelled());
}

/// Games sharing one service never cancel each other
#[tokio::test]
async fn test_games_on_one_service_are_independent() {
    let mut slow = FixedBackend::new("Sly sea slugs slide softly.");
    slow.delay = Duration::from_millis(300);
    let service = Arc::new(generative_service(slow));
    let mut a = GameSession::new(service.clone());
    let mut b = GameSession::new(service);

    let (status_a, status_b) = tokio::join!(
        a.generate(GenerationRequest::new("sea", "easy", "short")),
        async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            b.generate(GenerationRequest::new("sea", "easy", "short")).await
        }
    );

    assert_eq!(status_a, GameStatus::Success);
    assert_eq!(status_b, GameStatus::Success);
    assert_eq!(a.twister().unwrap().twister_text, "Sly sea slugs slide softly.");
    assert!(b.speech().is_some());
}

/// A cancelled game settles back to idle instead of hanging in pending
#[tokio::test]
async fn test_cancelled_game_settles_idle() {
    let mut slow = FixedBackend::new("Sly sea slugs slide softly.");
    slow.delay = Duration::from_secs(5);
    let mut game = GameSession::new(Arc::new(generative_service(slow)));
    let slot = game.request_slot();

    let (status, _) = tokio::join!(game.generate(GenerationRequest::new("sea", "easy", "short")), async {
        tokio::time::sleep(Duration::from_millis(30)).await;
        slot.cancel();
    });

    assert_eq!(status, GameStatus::Idle);
    assert!(game.twister().is_none());
    assert!(game.error().is_none());
}
