//! InvestiGuard Classifiers
//!
//! Text heuristics behind the InvestiGuard fraud verdict.
//!
//! - [`RiskEngine`] combines a sentiment signal with phrase pattern counts
//!   into a [`investiguard_core::RiskVerdict`]
//! - Sentiment comes from a [`Classifier`]: the keyword lexicon (Tier A) or a
//!   DistilBERT model (Tier C, behind the `ml-models` feature)
//! - Static lookups used to decorate responses: the advisor registry and the
//!   seeded deepfake simulator

pub mod advisor;
pub mod classifier;
pub mod config;
pub mod deepfake;
pub mod engine;
#[cfg(feature = "ml-models")]
pub mod model;
pub mod patterns;
pub mod sentiment;

pub use advisor::{extract_candidate_name, AdvisorRegistry, AdvisorVerification};
pub use classifier::{ClassificationResult, Classifier, ClassifierTier};
pub use config::{DeviceSpec, ModelSource, ModelSpec, SentimentBackend, SentimentConfig};
pub use deepfake::{DeepfakeDetector, DeepfakeReport};
pub use engine::RiskEngine;
#[cfg(feature = "ml-models")]
pub use model::ModelSentimentClassifier;
pub use patterns::{PatternCounts, PatternTables};
pub use sentiment::KeywordSentimentClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::advisor::AdvisorRegistry;
    pub use crate::classifier::{ClassificationResult, Classifier, ClassifierTier};
    pub use crate::deepfake::DeepfakeDetector;
    pub use crate::engine::RiskEngine;
    pub use crate::patterns::PatternTables;
    pub use crate::sentiment::KeywordSentimentClassifier;
}
