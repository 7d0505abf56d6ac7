//! # chatterly-gateway
//!
//! HTTP edge for the Chatterly request router: wires the built-in routing
//! catalog and the OpenAI backend into a [`Dispatcher`] and exposes it as
//! `POST /chat` plus liveness probes. Thin by design; all decision logic
//! lives in chatterly-dispatch and intent-router.

use std::sync::Arc;

use anyhow::Result;
use chatterly_dispatch::Dispatcher;
use intent_router::RouterConfig;
use llm_backend::OpenAIBackend;
use tracing::info;

pub mod cli;
pub mod config;
pub mod routes;

pub use cli::{load_config, Cli, Commands};
pub use config::GatewayConfig;
pub use routes::{build_app, map_dispatch_result, ChatReply};

/// Builds the dispatcher from config and serves the app on `host:port` until
/// the process is stopped.
pub async fn run_gateway(config: GatewayConfig, host: &str, port: u16) -> Result<()> {
    let backend = Arc::new(OpenAIBackend::from_config(&config.backend));
    let dispatcher = Arc::new(Dispatcher::new(
        RouterConfig::builtin(),
        backend,
        config.request_timeout,
    ));
    let app = build_app(dispatcher);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "gateway listening");
    axum::serve(listener, app).await?;
    Ok(())
}
