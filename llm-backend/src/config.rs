//! Backend configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// OpenAI-compatible backend config from env.
#[derive(Debug, Clone)]
pub struct EnvBackendConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl EnvBackendConfig {
    /// Load from environment variables. `OPENAI_API_KEY` is required;
    /// `OPENAI_BASE_URL` and `MODEL` have defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}
