//! Integration tests for the HTTP API
//!
//! Drives the router in-process with tower's `oneshot`

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use twister::config::Config;
use twister::core::{create_router, TwisterService};

fn router(config: Config) -> axum::Router {
    create_router(Arc::new(TwisterService::with_backend(config, None)))
}

async fn get(config: Config, uri: &str) -> (StatusCode, Value) {
    let response = router(config)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(Config::mock(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Service is healthy");
    assert!(body["requestId"].as_str().unwrap().starts_with("req_"));
}

#[tokio::test]
async fn test_ready_without_credential() {
    let (status, body) = get(Config::mock(), "/ready").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "PROVIDER_FAILURE");
    assert_eq!(body["error"]["message"], "Missing OPENAI_API_KEY");
}

#[tokio::test]
async fn test_twister_mock() {
    let (status, body) = get(
        Config::mock(),
        "/twister?theme=deep%20sea%20adventure&difficulty=hard&length=short&provider=mock",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Twister generated");
    assert_eq!(body["data"]["twister"], "Swift sea swans swish, slosh.");
    assert_eq!(body["data"]["theme"], "deep sea adventure");
    assert_eq!(body["data"]["provider"], "mock");
    assert_eq!(body["data"]["tokens"].as_array().unwrap().len(), 5);
    assert!(body["data"]["id"].as_str().unwrap().starts_with("twister_"));
    assert!(body["data"]["createdAt"].is_string());
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_twister_validation_error() {
    let (status, body) = get(Config::mock(), "/twister?theme=a&difficulty=easy&length=short").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation error");
    assert_eq!(body["error"]["code"], "INVALID_THEME");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_twister_missing_params() {
    let (status, body) = get(Config::mock(), "/twister").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_THEME");
}

#[tokio::test]
async fn test_twister_generative_without_key() {
    let (status, body) = get(Config::mock(), "/twister?theme=sea&difficulty=easy&length=short&provider=openai").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Provider error");
    assert_eq!(body["error"]["code"], "PROVIDER_FAILURE");
}
