//! Classifier trait and common types

use async_trait::async_trait;
use investiguard_core::Result;

/// Label a sentiment model uses for negative polarity
pub const NEGATIVE_LABEL: &str = "NEGATIVE";

/// Label a sentiment model uses for positive polarity
pub const POSITIVE_LABEL: &str = "POSITIVE";

/// Trait for all sentiment classifiers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<ClassificationResult>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Get the tier (performance category)
    fn tier(&self) -> ClassifierTier;
}

/// Result of classification
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    /// Classification label
    pub label: String,

    /// Confidence score (0.0-1.0)
    pub score: f32,

    /// Additional metadata
    pub metadata: ClassificationMetadata,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
            metadata: ClassificationMetadata::default(),
            latency_us: 0,
        }
    }

    /// Attach a full label distribution
    pub fn with_scores(mut self, scores: Vec<(String, f32)>) -> Self {
        self.metadata.all_scores = Some(scores);
        self
    }

    /// Probability mass assigned to the negative label, if reported
    pub fn negative_probability(&self) -> Option<f32> {
        self.metadata.all_scores.as_ref().and_then(|scores| {
            scores
                .iter()
                .find(|(label, _)| label.eq_ignore_ascii_case(NEGATIVE_LABEL))
                .map(|(_, score)| *score)
        })
    }

    /// Sentiment signal in [0, 1] where 1.0 is maximally positive.
    ///
    /// Computed as `1 - P(NEGATIVE)`. Without a distribution, a negative
    /// top label with score `p` maps to `1 - p` and any other label to `p`.
    pub fn sentiment_signal(&self) -> f32 {
        let signal = match self.negative_probability() {
            Some(negative) => 1.0 - negative,
            None if self.label.eq_ignore_ascii_case(NEGATIVE_LABEL) => 1.0 - self.score,
            None => self.score,
        };

        if signal.is_nan() {
            0.5
        } else {
            signal.clamp(0.0, 1.0)
        }
    }
}

/// Metadata about classification
#[derive(Debug, Clone, Default)]
pub struct ClassificationMetadata {
    /// Model name or version
    pub model: Option<String>,

    /// All class scores (for multi-class classifiers)
    pub all_scores: Option<Vec<(String, f32)>>,
}

/// Classifier performance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierTier {
    /// Ultra-fast (<2ms) - keyword lexicons, simple rules
    A,
    /// Fast (<5ms) - quantized models, lightweight ML
    B,
    /// Moderate (<100ms) - full transformer models on CPU
    C,
}

impl ClassifierTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_from_distribution() {
        let result = ClassificationResult::new(NEGATIVE_LABEL, 0.9).with_scores(vec![
            (NEGATIVE_LABEL.to_string(), 0.9),
            (POSITIVE_LABEL.to_string(), 0.1),
        ]);
        assert!((result.sentiment_signal() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_signal_label_is_case_insensitive() {
        let result = ClassificationResult::new("positive", 0.8)
            .with_scores(vec![("negative".to_string(), 0.2), ("positive".to_string(), 0.8)]);
        assert!((result.sentiment_signal() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_signal_without_distribution() {
        let negative = ClassificationResult::new("negative", 0.75);
        assert!((negative.sentiment_signal() - 0.25).abs() < 1e-6);

        let positive = ClassificationResult::new("POSITIVE", 0.75);
        assert!((positive.sentiment_signal() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_signal_is_clamped() {
        assert_eq!(ClassificationResult::new("POSITIVE", 1.7).sentiment_signal(), 1.0);
        assert_eq!(ClassificationResult::new("POSITIVE", f32::NAN).sentiment_signal(), 0.5);
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(ClassifierTier::A.as_str(), "A");
        assert_eq!(ClassifierTier::C.as_str(), "C");
    }
}
