//! Logging and metrics setup

use crate::cli::LogFormat;
use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
pub fn init_tracing(verbose: bool, format: LogFormat) {
    let filter = if verbose {
        EnvFilter::new("investiguard=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("investiguard=info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Install the Prometheus recorder and return the handle for rendering
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "investiguard_requests_total",
        "Total number of requests processed by endpoint"
    );
    metrics::describe_counter!(
        "investiguard_verdicts_total",
        "Total number of verdicts by alert level"
    );
    metrics::describe_histogram!(
        "investiguard_scoring_latency_us",
        metrics::Unit::Microseconds,
        "Risk scoring latency in microseconds"
    );
    metrics::describe_counter!(
        "investiguard_sentiment_fallbacks_total",
        "Sentiment classifier failures answered by the keyword lexicon"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
