//! # Generation backend abstraction
//!
//! Defines the [`GenerationBackend`] trait the dispatcher invokes under a
//! timeout, plus an OpenAI-compatible implementation. The backend is the only
//! suspending collaborator in the system; cancellation on timeout is the
//! caller's responsibility (the in-flight future is simply dropped).

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod openai;

pub use config::EnvBackendConfig;
pub use openai::OpenAIBackend;

/// One unit of generation work: the persona the backend assumes, the task to
/// perform, and a natural-language hint about the answer's shape.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub persona: String,
    pub task_description: String,
    pub expected_output: String,
}

/// Generation backend interface: produce the reply text for one request.
/// May fail or exceed a caller-imposed time bound.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head_len = 7.min(len);
        let tail_len = 4.min(len.saturating_sub(head_len));
        let head = &token[..head_len];
        let tail = if tail_len > 0 {
            &token[len - tail_len..]
        } else {
            ""
        };
        format!("{}***{}", head, tail)
    }
}
