// src/main.rs
use clap::Parser;
use korastats_mcp::cli::Args;
use korastats_mcp::config::Config;
use korastats_mcp::error::AppError;
use korastats_mcp::logging::setup_logging;
use korastats_mcp::server::KorastatsServer;
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must stay alive so file logs are flushed on shutdown
    let _guard = setup_logging(&args)?;

    let config = Arc::new(Config::from_env()?);
    info!("Starting Korastats MCP server...");

    let server = KorastatsServer::new(config)?;

    let service = server.serve(stdio()).await.map_err(|e| {
        error!("Server error: {e}");
        AppError::Serve(e.to_string())
    })?;

    service
        .waiting()
        .await
        .map_err(|e| AppError::Serve(e.to_string()))?;

    Ok(())
}
