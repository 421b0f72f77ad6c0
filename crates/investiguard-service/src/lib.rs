//! InvestiGuard Service
//!
//! HTTP surface for the InvestiGuard fraud risk engine: analysis endpoints,
//! advisor verification, the simulated alert feed and Prometheus metrics.

pub mod alerts;
pub mod cli;
pub mod config;
pub mod models;
pub mod server;
pub mod state;
pub mod telemetry;

pub use cli::{Cli, LogFormat};
pub use config::ServiceConfig;
pub use server::{build_app, run_server, AppError};
pub use state::AppState;
