//! Sentiment classifier configuration
//!
//! Selects the sentiment backend at startup. The keyword lexicon needs no
//! configuration; the model backend describes where DistilBERT weights and
//! tokenizer come from and which device runs inference.

use crate::classifier::Classifier;
use crate::sentiment::KeywordSentimentClassifier;
use investiguard_core::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Sentiment classifier implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBackend {
    /// Keyword lexicon (no model required)
    #[default]
    Keyword,
    /// DistilBERT sequence classifier
    Model,
}

impl std::str::FromStr for SentimentBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyword" => Ok(Self::Keyword),
            "model" => Ok(Self::Model),
            other => Err(format!(
                "unknown sentiment backend '{}', expected 'keyword' or 'model'",
                other
            )),
        }
    }
}

/// Sentiment configuration section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SentimentConfig {
    #[serde(default)]
    pub backend: SentimentBackend,

    #[serde(default)]
    pub model: ModelSpec,
}

impl SentimentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.model.max_length == 0 {
            return Err(investiguard_core::Error::config(
                "sentiment.model.max_length must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Build the configured classifier.
    ///
    /// Loading the model backend downloads and maps weights, so call this from
    /// a blocking context.
    pub fn build(&self) -> Result<Arc<dyn Classifier>> {
        self.validate()?;

        match self.backend {
            SentimentBackend::Keyword => Ok(Arc::new(KeywordSentimentClassifier::new())),
            SentimentBackend::Model => build_model(&self.model),
        }
    }
}

#[cfg(feature = "ml-models")]
fn build_model(spec: &ModelSpec) -> Result<Arc<dyn Classifier>> {
    let classifier = crate::model::ModelSentimentClassifier::load(spec)?;
    Ok(Arc::new(classifier))
}

#[cfg(not(feature = "ml-models"))]
fn build_model(_spec: &ModelSpec) -> Result<Arc<dyn Classifier>> {
    Err(investiguard_core::Error::config(
        "sentiment backend 'model' requires the 'ml-models' feature",
    ))
}

/// Sentiment model location and inference settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Where the weights and model config come from
    #[serde(default)]
    pub source: ModelSource,

    /// Repository providing `tokenizer.json` when the model repo has none
    #[serde(default = "default_tokenizer_repo")]
    pub tokenizer_repo: String,

    #[serde(default)]
    pub device: DeviceSpec,

    /// Maximum number of tokens fed to the model
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            source: ModelSource::default(),
            tokenizer_repo: default_tokenizer_repo(),
            device: DeviceSpec::default(),
            max_length: default_max_length(),
        }
    }
}

/// Model source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModelSource {
    /// Directory containing `config.json`, `model.safetensors` and `tokenizer.json`
    Local { path: PathBuf },

    /// Download from HuggingFace Hub
    HuggingFace {
        repo: String,
        #[serde(default = "default_revision")]
        revision: String,
    },
}

impl Default for ModelSource {
    fn default() -> Self {
        Self::HuggingFace {
            repo: "distilbert-base-uncased-finetuned-sst-2-english".to_string(),
            revision: default_revision(),
        }
    }
}

/// Inference device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceSpec {
    #[default]
    Cpu,
    Cuda,
    Metal,
}

fn default_revision() -> String {
    "main".to_string()
}

fn default_tokenizer_repo() -> String {
    "distilbert-base-uncased".to_string()
}

fn default_max_length() -> usize {
    512
}
