//! # Sensei Gateway
//!
//! Serves `/explain`, `/explain/more`, `/health` and the `/ws/run` stream.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG` honoured, default `info`)
//! 2. Load configuration (TOML file, then `SENSEI_*` env, then CLI flags)
//! 3. Validate and build the service
//! 4. Serve until Ctrl+C

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sensei_gateway::{GatewayConfig, GatewayService};

#[derive(Parser, Debug)]
#[command(name = "sensei-gateway")]
#[command(about = "Explanation and code-execution server for Sensei")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address (overrides config and SENSEI_HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port (overrides config and SENSEI_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

/// Load configuration from file, environment and flags.
fn load_config(args: &Args) -> Result<GatewayConfig> {
    let mut config = match &args.config {
        Some(path) => GatewayConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GatewayConfig::default(),
    };

    config
        .apply_env_overrides()
        .context("applying environment overrides")?;

    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = load_config(&args)?;

    info!(
        addr = %config.http_addr(),
        compiler = ?config.runner.compile_command,
        work_dir = %config.runner.work_dir.display(),
        "Starting Sensei gateway"
    );

    let service = GatewayService::new(config).context("invalid gateway configuration")?;
    let listener = service.bind().await?;
    service.serve(listener, shutdown_signal()).await?;

    Ok(())
}
