//! HTTP routes: `POST /chat`, `GET /ping`, `GET /`, and the mapping from
//! dispatch results to the outbound response contract.
//!
//! Failure bodies carry an error code (`timeout`, `backend_error`,
//! `bad_request`, `configuration_error`) plus a single detail string; no raw
//! internals leak beyond that string.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chatterly_core::{ChatRequest, DispatchOutcome, RouterError};
use chatterly_dispatch::Dispatcher;
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Success or structured-error body for `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatReply {
    Success {
        response: String,
    },
    Error {
        error: &'static str,
        detail: String,
    },
}

/// Builds the application router with permissive CORS (the service is a
/// backend for browser frontends on arbitrary origins).
pub fn build_app(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ping", get(ping))
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .with_state(dispatcher)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "status": "Backend is active" }))
}

async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "alive" }))
}

async fn chat(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<ChatReply>) {
    info!(user_id = %request.user_id, "inbound chat request");
    let result = dispatcher.dispatch(&request).await;
    let (status, reply) = map_dispatch_result(result);
    (status, Json(reply))
}

/// Maps a dispatch result to status code + response body. Pure; covered by tests.
pub fn map_dispatch_result(
    result: Result<DispatchOutcome, RouterError>,
) -> (StatusCode, ChatReply) {
    match result {
        Ok(DispatchOutcome::CannedHit(response))
        | Ok(DispatchOutcome::GeneratedHit(response)) => {
            (StatusCode::OK, ChatReply::Success { response })
        }
        Ok(DispatchOutcome::TimedOut) => (
            StatusCode::GATEWAY_TIMEOUT,
            ChatReply::Error {
                error: "timeout",
                detail: "LLM request timed out. Please try again.".to_string(),
            },
        ),
        Ok(DispatchOutcome::Failed(detail)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ChatReply::Error {
                error: "backend_error",
                detail,
            },
        ),
        Err(RouterError::Validation(detail)) => (
            StatusCode::BAD_REQUEST,
            ChatReply::Error {
                error: "bad_request",
                detail,
            },
        ),
        Err(RouterError::Configuration(detail)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ChatReply::Error {
                error: "configuration_error",
                detail,
            },
        ),
        Err(e @ RouterError::Timeout) => (
            StatusCode::GATEWAY_TIMEOUT,
            ChatReply::Error {
                error: "timeout",
                detail: e.to_string(),
            },
        ),
        Err(RouterError::Backend(detail)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ChatReply::Error {
                error: "backend_error",
                detail,
            },
        ),
    }
}
