//! InvestiGuard
//!
//! Fraud risk analysis service for investment content.

use anyhow::Result;
use clap::Parser;
use investiguard_service::{telemetry, AppState, Cli, ServiceConfig};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing(cli.verbose, cli.log_format);

    info!("Starting InvestiGuard v{}", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!("Sentiment backend: {:?}", config.sentiment.backend);
    info!(
        "Alert feed: capacity {}, interval {}s",
        config.alerts.capacity, config.alerts.interval_secs
    );

    let metrics_handle = telemetry::init_metrics()?;

    info!("Initializing application state...");
    let addr: SocketAddr = config.bind_address().parse()?;
    let state = AppState::new(config, Some(metrics_handle)).await?;
    info!("Application state initialized successfully");

    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    investiguard_service::run_server(state, addr, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
