//! Fraud risk scoring engine
//!
//! Turns a text blob into a [`RiskVerdict`] by combining a sentiment signal
//! with presence counts from the phrase pattern tables:
//!
//! ```text
//! sentiment_risk     = (1 - s) * 40
//! pattern_risk       = min(50, suspicious * 15)
//! positive_reduction = min(20, reassuring * 5)
//! risk_score         = clamp(round(sentiment_risk + pattern_risk - positive_reduction), 0, 100)
//! ```
//!
//! The engine is total over its input: a failing sentiment classifier is
//! replaced by the keyword lexicon for that call and never surfaces an error.

use crate::classifier::Classifier;
use crate::patterns::{PatternCounts, PatternTables};
use crate::sentiment::{KeywordSentimentClassifier, NEUTRAL_SIGNAL};
use investiguard_core::{FraudAlert, Result, RiskVerdict, SentimentTone};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

const SENTIMENT_WEIGHT: f64 = 40.0;
const PATTERN_WEIGHT: f64 = 15.0;
const PATTERN_CAP: f64 = 50.0;
const REASSURING_WEIGHT: f64 = 5.0;
const REASSURING_CAP: f64 = 20.0;

const MIN_CONFIDENCE: i64 = 60;
const MAX_CONFIDENCE: i64 = 95;

/// Stateless scoring engine shared by every request
pub struct RiskEngine {
    tables: PatternTables,
    sentiment: Arc<dyn Classifier>,
    fallback: KeywordSentimentClassifier,
}

impl RiskEngine {
    /// Create an engine with the built-in pattern tables
    pub fn new(sentiment: Arc<dyn Classifier>) -> Result<Self> {
        Ok(Self::with_tables(PatternTables::new()?, sentiment))
    }

    /// Create an engine that only uses the keyword lexicon for sentiment
    pub fn with_keyword_sentiment() -> Result<Self> {
        Self::new(Arc::new(KeywordSentimentClassifier::new()))
    }

    pub fn with_tables(tables: PatternTables, sentiment: Arc<dyn Classifier>) -> Self {
        Self {
            tables,
            sentiment,
            fallback: KeywordSentimentClassifier::new(),
        }
    }

    /// The configured sentiment classifier
    pub fn sentiment_classifier(&self) -> &dyn Classifier {
        self.sentiment.as_ref()
    }

    /// Score `text`, obtaining the sentiment signal from the configured classifier
    pub async fn score(&self, text: &str) -> RiskVerdict {
        let start = Instant::now();
        let signal = self.sentiment_signal(text).await;
        let verdict = self.score_with_signal(text, signal);

        metrics::histogram!("investiguard_scoring_latency_us")
            .record(start.elapsed().as_micros() as f64);

        verdict
    }

    /// Sentiment signal in [0, 1], falling back to the keyword lexicon on error
    pub async fn sentiment_signal(&self, text: &str) -> f32 {
        match self.sentiment.classify(text).await {
            Ok(result) => {
                debug!(
                    classifier = self.sentiment.name(),
                    label = %result.label,
                    latency_us = result.latency_us,
                    "Sentiment classified"
                );
                result.sentiment_signal()
            }
            Err(e) => {
                warn!(
                    classifier = self.sentiment.name(),
                    error = %e,
                    "Sentiment classifier failed, using keyword fallback"
                );
                metrics::counter!("investiguard_sentiment_fallbacks_total").increment(1);
                self.fallback.signal(text)
            }
        }
    }

    /// Score `text` with an already known sentiment signal
    pub fn score_with_signal(&self, text: &str, signal: f32) -> RiskVerdict {
        let signal = sanitize_signal(signal);
        let counts = self.tables.scan(text);

        let risk_score = risk_score(signal, counts);
        let fraud_alert = FraudAlert::from_risk_score(risk_score);
        let tone = SentimentTone::from_signal(signal);

        let verdict = RiskVerdict {
            risk_score,
            fraud_alert,
            credibility_score: RiskVerdict::credibility_for(risk_score),
            suspicious_count: counts.suspicious,
            positive_count: counts.reassuring,
            confidence: confidence(counts),
            sentiment_score: signal,
            tone,
            analysis_text: analysis_text(fraud_alert, counts, signal),
        };

        debug!(
            text_len = text.len(),
            sentiment = signal,
            suspicious = counts.suspicious,
            reassuring = counts.reassuring,
            risk_score = verdict.risk_score,
            alert = %verdict.fraud_alert,
            "Scored text"
        );

        verdict
    }
}

fn sanitize_signal(signal: f32) -> f32 {
    if signal.is_nan() {
        NEUTRAL_SIGNAL
    } else {
        signal.clamp(0.0, 1.0)
    }
}

/// Combine sentiment and pattern counts into a 0-100 risk score
pub fn risk_score(signal: f32, counts: PatternCounts) -> u8 {
    let sentiment_risk = (1.0 - f64::from(signal)) * SENTIMENT_WEIGHT;
    let pattern_risk = (counts.suspicious as f64 * PATTERN_WEIGHT).min(PATTERN_CAP);
    let positive_reduction = (counts.reassuring as f64 * REASSURING_WEIGHT).min(REASSURING_CAP);

    (sentiment_risk + pattern_risk - positive_reduction)
        .round()
        .clamp(0.0, 100.0) as u8
}

/// Presentation confidence: `clamp(100 - suspicious*5 + reassuring*2, 60, 95)`
pub fn confidence(counts: PatternCounts) -> u8 {
    let suspicious = i64::try_from(counts.suspicious).unwrap_or(i64::MAX / 10);
    let reassuring = i64::try_from(counts.reassuring).unwrap_or(i64::MAX / 10);
    (100 - suspicious.saturating_mul(5) + reassuring.saturating_mul(2))
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

fn analysis_text(alert: FraudAlert, counts: PatternCounts, signal: f32) -> String {
    let tone = SentimentTone::from_signal(signal);
    match alert {
        FraudAlert::LikelySafe => format!(
            "Content analysis suggests legitimate investment content. Sentiment is {}, with {} reassuring patterns detected.",
            if tone == SentimentTone::Positive { "positive" } else { "neutral" },
            counts.reassuring
        ),
        FraudAlert::Warning => format!(
            "Moderate risk detected. Found {} suspicious patterns. Sentiment analysis shows {} tone. Exercise caution.",
            counts.suspicious,
            if tone == SentimentTone::Negative { "negative" } else { "mixed" }
        ),
        FraudAlert::Suspicious => format!(
            "High risk of fraud detected. Multiple suspicious patterns ({}) found. Sentiment analysis indicates {} tone. Avoid this investment.",
            counts.suspicious, tone
        ),
    }
}
