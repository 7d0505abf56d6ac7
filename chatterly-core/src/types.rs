//! Core types: inbound request, handler kinds, and dispatch outcome.

use serde::{Deserialize, Serialize};

/// A single inbound chat request. Immutable; discarded after the response is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

/// The closed set of handler kinds a message can be routed to.
///
/// Every kind carries a uniform descriptor in the registry; `General` is the
/// fallback and always exists, so classification is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerKind {
    /// Study planning and scheduling.
    Study,
    /// Assignment and deadline tracking.
    Tasks,
    /// Workload and stress analysis.
    Stress,
    /// Academic concept explanation.
    Concepts,
    /// Positive reinforcement and encouragement.
    Motivation,
    /// Career, LinkedIn, and networking advice.
    Career,
    /// Factual and general knowledge.
    Knowledge,
    /// Casual conversation and companionship.
    Social,
    /// General-purpose fallback.
    General,
}

impl HandlerKind {
    /// Stable identifier used in logs and wire-facing diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerKind::Study => "study",
            HandlerKind::Tasks => "tasks",
            HandlerKind::Stress => "stress",
            HandlerKind::Concepts => "concepts",
            HandlerKind::Motivation => "motivation",
            HandlerKind::Career => "career",
            HandlerKind::Knowledge => "knowledge",
            HandlerKind::Social => "social",
            HandlerKind::General => "general",
        }
    }
}

impl std::fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of dispatching one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The canned table matched; no backend call was made.
    CannedHit(String),
    /// The backend produced a reply for the classified handler.
    GeneratedHit(String),
    /// The backend did not complete within the configured bound.
    TimedOut,
    /// The backend failed; carries the underlying error's description.
    Failed(String),
}
