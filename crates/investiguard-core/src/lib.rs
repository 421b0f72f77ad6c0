//! InvestiGuard Core
//!
//! Core types and error handling shared across InvestiGuard components.
//!
//! This crate provides:
//! - The canonical risk verdict produced by the scoring engine
//! - Alert levels and sentiment tones with their wire spellings
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{FraudAlert, RiskVerdict, SentimentTone};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{FraudAlert, RiskVerdict, SentimentTone};
}
