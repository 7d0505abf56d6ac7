//! Binary entry point: CLI parsing, env loading, tracing init, and serving.

use anyhow::Result;
use chatterly_core::init_tracing;
use chatterly_gateway::{load_config, run_gateway, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = load_config()?;
            init_tracing(&config.log_file)?;
            run_gateway(config, &host, port).await
        }
    }
}
