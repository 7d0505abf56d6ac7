//! Integration tests for the gateway router and response mapping.
//!
//! Uses `tower::ServiceExt::oneshot` against the built app with mock backends;
//! no network and no real LLM.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chatterly_core::{DispatchOutcome, RouterError};
use chatterly_dispatch::Dispatcher;
use chatterly_gateway::{build_app, map_dispatch_result, ChatReply};
use http_body_util::BodyExt;
use intent_router::RouterConfig;
use llm_backend::{GenerationBackend, GenerationRequest};
use tower::ServiceExt;

/// Mock backend returning a fixed reply.
struct FixedBackend(&'static str);

#[async_trait]
impl GenerationBackend for FixedBackend {
    async fn generate(&self, _request: &GenerationRequest) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

/// Mock backend that sleeps past any test timeout.
struct HangingBackend;

#[async_trait]
impl GenerationBackend for HangingBackend {
    async fn generate(&self, _request: &GenerationRequest) -> anyhow::Result<String> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("too late".to_string())
    }
}

fn app_with(backend: Arc<dyn GenerationBackend>, timeout: Duration) -> axum::Router {
    let dispatcher = Arc::new(Dispatcher::new(RouterConfig::builtin(), backend, timeout));
    build_app(dispatcher)
}

fn chat_request(user_id: &str, message: &str) -> Request<Body> {
    let body = serde_json::json!({ "user_id": user_id, "message": message }).to_string();
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// **Test: GET /ping returns the fixed alive status.**
#[tokio::test]
async fn test_ping_returns_alive() {
    let app = app_with(Arc::new(FixedBackend("unused")), Duration::from_secs(5));
    let response = app
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "alive");
}

/// **Test: POST /chat with a canned trigger returns 200 and the canned text.**
#[tokio::test]
async fn test_chat_canned_hit_http() {
    let app = app_with(Arc::new(FixedBackend("unused")), Duration::from_secs(5));
    let response = app
        .oneshot(chat_request("user-1", "who is your creator"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["response"]
        .as_str()
        .unwrap()
        .starts_with("I was created by Swayam Gupta and Rishu"));
}

/// **Test: POST /chat routes a non-canned message through the backend.**
#[tokio::test]
async fn test_chat_generated_hit_http() {
    let app = app_with(
        Arc::new(FixedBackend("entropy measures disorder")),
        Duration::from_secs(5),
    );
    let response = app
        .oneshot(chat_request("user-1", "explain entropy"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["response"], "entropy measures disorder");
}

/// **Test: POST /chat with an empty message returns 400 bad_request.**
#[tokio::test]
async fn test_chat_empty_message_http() {
    let app = app_with(Arc::new(FixedBackend("unused")), Duration::from_secs(5));
    let response = app.oneshot(chat_request("user-1", "")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "bad_request");
}

/// **Test: A hanging backend surfaces as 504 timeout over HTTP.**
#[tokio::test]
async fn test_chat_timeout_http() {
    let app = app_with(Arc::new(HangingBackend), Duration::from_millis(50));
    let response = app
        .oneshot(chat_request("user-1", "explain entropy"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "timeout");
}

/// **Test: map_dispatch_result covers the outcome → status contract.**
#[test]
fn test_map_dispatch_result_contract() {
    let (status, reply) =
        map_dispatch_result(Ok(DispatchOutcome::GeneratedHit("hi".to_string())));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        reply,
        ChatReply::Success {
            response: "hi".to_string()
        }
    );

    let (status, reply) = map_dispatch_result(Ok(DispatchOutcome::TimedOut));
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert!(matches!(reply, ChatReply::Error { error: "timeout", .. }));

    let (status, reply) = map_dispatch_result(Ok(DispatchOutcome::Failed("boom".to_string())));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(matches!(reply, ChatReply::Error { error: "backend_error", .. }));

    let (status, reply) =
        map_dispatch_result(Err(RouterError::Validation("empty message".to_string())));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(matches!(reply, ChatReply::Error { error: "bad_request", .. }));

    let (status, _) =
        map_dispatch_result(Err(RouterError::Configuration("missing".to_string())));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
