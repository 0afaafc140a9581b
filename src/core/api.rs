//! HTTP API for Twister
//!
//! Endpoints:
//! - GET /twister?theme&difficulty&length&provider - Generate a twister
//! - GET /ready - Generative credential check
//! - GET /health - Health check

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::core::request_slot::AbortSignal;
use crate::core::response::failure;
use crate::core::service::{Generated, TwisterService};
use crate::types::{ApiResponse, ErrorCode, GenerationRequest, TwisterResponse};

/// Create the API router
pub fn create_router(service: Arc<TwisterService>) -> Router {
    Router::new()
        .route("/twister", get(twister))
        .route("/ready", get(ready))
        .route("/health", get(health))
        .with_state(service)
}

/// Envelope with its status code
fn reply<T: Serialize>(envelope: ApiResponse<T>) -> Response {
    let status = StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope)).into_response()
}

/// Generate a twister
async fn twister(
    State(service): State<Arc<TwisterService>>,
    Query(request): Query<GenerationRequest>,
) -> Response {
    // Each HTTP request is independent; nothing supersedes it
    match service.generate(&request, &AbortSignal::new()).await {
        Generated::Ready(envelope) => reply(envelope),
        Generated::Cancelled => reply::<TwisterResponse>(failure(
            500,
            "Internal error",
            ErrorCode::InternalError,
            "Request cancelled",
        )),
    }
}

async fn ready(State(service): State<Arc<TwisterService>>) -> Response {
    reply(service.ready())
}

async fn health(State(service): State<Arc<TwisterService>>) -> Response {
    reply(service.health())
}

/// Run the API server
pub async fn run_server(addr: &str, service: Arc<TwisterService>) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Twister API listening on {}", addr);
    println!("🌀 Twister API running on {}", addr);
    println!("  GET  /twister  - Generate a twister");
    println!("  GET  /ready    - Readiness check");
    println!("  GET  /health   - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
