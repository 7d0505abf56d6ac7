//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::GatewayConfig;

#[derive(Parser)]
#[command(name = "chatterly-gateway")]
#[command(about = "Chatterly request router gateway", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP gateway (backend config from env).
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

/// Load GatewayConfig from environment.
pub fn load_config() -> Result<GatewayConfig> {
    GatewayConfig::load()
}
