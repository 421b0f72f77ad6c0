//! Keyword sentiment classifier (Tier A fallback)
//!
//! This is a lexicon-based classifier used when no sentiment model is loaded,
//! and as the per-request fallback when the model fails. It never errors.

use crate::classifier::{
    ClassificationMetadata, ClassificationResult, Classifier, ClassifierTier, NEGATIVE_LABEL,
    POSITIVE_LABEL,
};
use aho_corasick::AhoCorasick;
use investiguard_core::Result;
use std::collections::HashSet;
use std::time::Instant;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "positive",
    "profitable",
    "successful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "negative",
    "risky",
    "dangerous",
    "suspicious",
];

/// Signal reported when positive words outnumber negative ones
pub const POSITIVE_SIGNAL: f32 = 0.7;

/// Signal reported when negative words outnumber positive ones
pub const NEGATIVE_SIGNAL: f32 = 0.3;

/// Signal reported on a tie, including text with no lexicon words at all
pub const NEUTRAL_SIGNAL: f32 = 0.5;

pub struct KeywordSentimentClassifier {
    name: String,
    positive: Option<AhoCorasick>,
    negative: Option<AhoCorasick>,
}

impl KeywordSentimentClassifier {
    pub fn new() -> Self {
        Self::with_name("keyword-sentiment")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positive: build_matcher(POSITIVE_WORDS),
            negative: build_matcher(NEGATIVE_WORDS),
        }
    }

    /// Sentiment signal for `text`: 0.7, 0.3 or 0.5
    pub fn signal(&self, text: &str) -> f32 {
        let positive_hits = distinct_hits(self.positive.as_ref(), text);
        let negative_hits = distinct_hits(self.negative.as_ref(), text);

        if positive_hits > negative_hits {
            POSITIVE_SIGNAL
        } else if negative_hits > positive_hits {
            NEGATIVE_SIGNAL
        } else {
            NEUTRAL_SIGNAL
        }
    }
}

impl Default for KeywordSentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn build_matcher(words: &[&str]) -> Option<AhoCorasick> {
    match AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(words)
    {
        Ok(matcher) => Some(matcher),
        Err(e) => {
            tracing::error!("Failed to build sentiment lexicon matcher: {}", e);
            None
        }
    }
}

/// Number of distinct lexicon words that occur anywhere in `text`
fn distinct_hits(matcher: Option<&AhoCorasick>, text: &str) -> usize {
    let Some(matcher) = matcher else {
        return 0;
    };

    matcher
        .find_overlapping_iter(text)
        .map(|m| m.pattern())
        .collect::<HashSet<_>>()
        .len()
}

#[async_trait::async_trait]
impl Classifier for KeywordSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let score = self.signal(text);
        let label = if score >= NEUTRAL_SIGNAL {
            POSITIVE_LABEL
        } else {
            NEGATIVE_LABEL
        };

        Ok(ClassificationResult {
            label: label.to_string(),
            score: if score >= NEUTRAL_SIGNAL { score } else { 1.0 - score },
            metadata: ClassificationMetadata {
                model: Some("sentiment-lexicon".to_string()),
                all_scores: Some(vec![
                    (NEGATIVE_LABEL.to_string(), 1.0 - score),
                    (POSITIVE_LABEL.to_string(), score),
                ]),
                ..Default::default()
            },
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> ClassifierTier {
        ClassifierTier::A
    }
}
