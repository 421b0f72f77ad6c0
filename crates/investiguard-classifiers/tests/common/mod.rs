//! Mock sentiment classifiers for testing
//!
//! Configurable implementations of the Classifier trait so engine tests can
//! pin the sentiment signal and exercise the fallback path.

#![allow(dead_code)]

use async_trait::async_trait;
use investiguard_classifiers::classifier::{NEGATIVE_LABEL, POSITIVE_LABEL};
use investiguard_classifiers::{ClassificationResult, Classifier, ClassifierTier};
use investiguard_core::Result;
use std::sync::atomic::{AtomicU32, Ordering};

/// Reports a fixed NEGATIVE probability for every input
pub struct MockSentiment {
    name: String,
    negative: f32,
    call_count: AtomicU32,
}

impl MockSentiment {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            negative: 0.5,
            call_count: AtomicU32::new(0),
        }
    }

    /// Set the probability mass assigned to NEGATIVE
    pub fn with_negative(mut self, negative: f32) -> Self {
        self.negative = negative;
        self
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Classifier for MockSentiment {
    async fn classify(&self, _text: &str) -> Result<ClassificationResult> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let label = if self.negative > 0.5 {
            NEGATIVE_LABEL
        } else {
            POSITIVE_LABEL
        };

        Ok(ClassificationResult::new(label, self.negative.max(1.0 - self.negative))
            .with_scores(vec![
                (NEGATIVE_LABEL.to_string(), self.negative),
                (POSITIVE_LABEL.to_string(), 1.0 - self.negative),
            ]))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> ClassifierTier {
        ClassifierTier::C
    }
}

/// A classifier that always fails - for testing the fallback path
pub struct FailingClassifier {
    name: String,
    error_message: String,
}

impl FailingClassifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            error_message: "Simulated classifier failure".to_string(),
        }
    }
}

#[async_trait]
impl Classifier for FailingClassifier {
    async fn classify(&self, _text: &str) -> Result<ClassificationResult> {
        Err(investiguard_core::Error::classifier(&self.error_message))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> ClassifierTier {
        ClassifierTier::C
    }
}
