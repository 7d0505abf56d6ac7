//! Gateway configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use anyhow::Result;
use llm_backend::EnvBackendConfig;

/// Gateway config: log file, backend request timeout, and backend settings.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub log_file: String,
    pub request_timeout: Duration,
    pub backend: EnvBackendConfig,
}

impl GatewayConfig {
    /// Load from environment. `REQUEST_TIMEOUT_SECS` defaults to 60;
    /// backend settings come from [`EnvBackendConfig::from_env`].
    pub fn load() -> Result<Self> {
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "chatterly-gateway.log".to_string());
        let timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        let backend = EnvBackendConfig::from_env()?;
        Ok(Self {
            log_file,
            request_timeout: Duration::from_secs(timeout_secs),
            backend,
        })
    }
}
