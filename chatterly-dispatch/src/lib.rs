//! # chatterly-dispatch
//!
//! The dispatcher orchestrates one request end-to-end: validate, try the
//! canned table, classify, resolve the handler, invoke the generation backend
//! under a timeout, and map the outcome. The canned path never touches the
//! backend, so it stays available even when the backend is down. No retries:
//! a timeout or failure is surfaced once per request.

use std::sync::Arc;
use std::time::Duration;

use chatterly_core::{ChatRequest, DispatchOutcome, RouterError};
use intent_router::RouterConfig;
use llm_backend::{GenerationBackend, GenerationRequest};
use tracing::{info, instrument, warn};

/// Orchestrates routing and backend invocation for one request at a time.
/// Holds only immutable tables and a shared backend, so it can be wrapped in
/// an `Arc` and used from any number of concurrent requests.
pub struct Dispatcher {
    config: RouterConfig,
    backend: Arc<dyn GenerationBackend>,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(config: RouterConfig, backend: Arc<dyn GenerationBackend>, timeout: Duration) -> Self {
        Self {
            config,
            backend,
            timeout,
        }
    }

    /// Dispatches one request.
    ///
    /// Returns `Err` only for pre-backend conditions (`Validation` on a
    /// malformed request, `Configuration` on a missing descriptor); backend
    /// timeout and failure are part of the `Ok` outcome so the caller gets a
    /// single terminal result per request.
    #[instrument(skip(self, request))]
    pub async fn dispatch(&self, request: &ChatRequest) -> Result<DispatchOutcome, RouterError> {
        validate(request)?;

        info!(user_id = %request.user_id, "step: dispatch started");

        if let Some(response) = self.config.canned.lookup(&request.message) {
            info!(user_id = %request.user_id, "step: canned response hit");
            return Ok(DispatchOutcome::CannedHit(response.to_string()));
        }

        let classification = self.config.classifier.classify(&request.message);
        info!(
            user_id = %request.user_id,
            handler = %classification.handler,
            "step: intent classified"
        );

        let descriptor = self.config.registry.resolve(classification.handler)?;

        let generation_request = GenerationRequest {
            persona: descriptor.persona.clone(),
            task_description: classification.task_description,
            expected_output: classification.expected_output,
        };

        // Bounded wait; on expiry the in-flight future is dropped (best-effort
        // cancellation) and the caller is not kept waiting for its completion.
        match tokio::time::timeout(self.timeout, self.backend.generate(&generation_request)).await
        {
            Ok(Ok(text)) => {
                info!(
                    user_id = %request.user_id,
                    handler = %descriptor.kind,
                    reply_len = text.len(),
                    "step: backend reply received"
                );
                Ok(DispatchOutcome::GeneratedHit(text))
            }
            Ok(Err(e)) => {
                warn!(
                    user_id = %request.user_id,
                    handler = %descriptor.kind,
                    error = %e,
                    "step: backend failed"
                );
                Ok(DispatchOutcome::Failed(e.to_string()))
            }
            Err(_elapsed) => {
                warn!(
                    user_id = %request.user_id,
                    handler = %descriptor.kind,
                    timeout_secs = self.timeout.as_secs(),
                    "step: backend timed out"
                );
                Ok(DispatchOutcome::TimedOut)
            }
        }
    }
}

/// Rejects malformed requests before any classification or backend work.
fn validate(request: &ChatRequest) -> Result<(), RouterError> {
    if request.user_id.trim().is_empty() {
        return Err(RouterError::Validation("missing user id".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(RouterError::Validation("empty message".to_string()));
    }
    Ok(())
}
