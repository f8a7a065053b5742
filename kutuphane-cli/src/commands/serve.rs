//! HTTP server command
//!
//! Configuration is read once from the environment (and `.env`); flags
//! override the listen address and CORS mode.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use kutuphane_server::{create_pool, run_server, AppConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides KUTUPHANE_BIND, default 0.0.0.0:5002)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = AppConfig::from_env()
        .context("Invalid configuration. Set DB_HOST, DB_NAME, DB_USER, DB_PASSWORD (env or .env)")?;

    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    if args.cors_permissive {
        config.server.cors_permissive = true;
    }

    tracing::info!("Starting kutuphane server on {}", config.server.bind_addr);

    let pool = create_pool(&config.db)
        .await
        .context("Failed to create database pool")?;

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
