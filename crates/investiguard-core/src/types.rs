//! Core types for InvestiGuard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk score at or above which content is labelled suspicious
pub const SUSPICIOUS_THRESHOLD: u8 = 70;

/// Risk score at or above which content is labelled a warning
pub const WARNING_THRESHOLD: u8 = 40;

/// Lowest credibility score ever reported
pub const MIN_CREDIBILITY: u8 = 10;

/// Categorical fraud verdict.
///
/// The serialized spellings are consumed by existing clients and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FraudAlert {
    #[serde(rename = "Likely Safe")]
    LikelySafe,
    #[serde(rename = "Warning")]
    Warning,
    #[serde(rename = "Suspicious")]
    Suspicious,
}

impl FraudAlert {
    /// Classify a risk score, evaluating thresholds from high to low
    pub fn from_risk_score(risk_score: u8) -> Self {
        if risk_score >= SUSPICIOUS_THRESHOLD {
            Self::Suspicious
        } else if risk_score >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::LikelySafe
        }
    }

    /// Wire spelling of this alert level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikelySafe => "Likely Safe",
            Self::Warning => "Warning",
            Self::Suspicious => "Suspicious",
        }
    }
}

impl fmt::Display for FraudAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse polarity of a sentiment signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTone {
    Positive,
    Negative,
    Mixed,
}

impl SentimentTone {
    /// Bucket a sentiment signal in [0, 1]: above 0.6 is positive, below 0.4 negative
    pub fn from_signal(signal: f32) -> Self {
        if signal > 0.6 {
            Self::Positive
        } else if signal < 0.4 {
            Self::Negative
        } else {
            Self::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SentimentTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete output of one scoring call.
///
/// Every HTTP response shape is a projection of this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskVerdict {
    /// Overall risk, 0-100
    pub risk_score: u8,

    /// Alert level derived from `risk_score`
    pub fraud_alert: FraudAlert,

    /// `max(10, 100 - risk_score)`
    pub credibility_score: u8,

    /// Number of distinct suspicious patterns present
    pub suspicious_count: usize,

    /// Number of distinct reassuring patterns present
    pub positive_count: usize,

    /// Presentation confidence, 60-95
    pub confidence: u8,

    /// Sentiment signal used for scoring (1.0 = maximally positive)
    pub sentiment_score: f32,

    /// Bucketed sentiment polarity
    pub tone: SentimentTone,

    /// Human-readable explanation
    pub analysis_text: String,
}

impl RiskVerdict {
    /// Credibility derived from a risk score
    pub fn credibility_for(risk_score: u8) -> u8 {
        MIN_CREDIBILITY.max(100u8.saturating_sub(risk_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_thresholds() {
        assert_eq!(FraudAlert::from_risk_score(0), FraudAlert::LikelySafe);
        assert_eq!(FraudAlert::from_risk_score(39), FraudAlert::LikelySafe);
        assert_eq!(FraudAlert::from_risk_score(40), FraudAlert::Warning);
        assert_eq!(FraudAlert::from_risk_score(69), FraudAlert::Warning);
        assert_eq!(FraudAlert::from_risk_score(70), FraudAlert::Suspicious);
        assert_eq!(FraudAlert::from_risk_score(100), FraudAlert::Suspicious);
    }

    #[test]
    fn test_alert_is_monotonic() {
        let mut previous = FraudAlert::from_risk_score(0);
        for score in 1..=100u8 {
            let current = FraudAlert::from_risk_score(score);
            assert!(current >= previous, "score {} lowered the alert", score);
            previous = current;
        }
    }

    #[test]
    fn test_alert_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&FraudAlert::LikelySafe).unwrap(),
            "\"Likely Safe\""
        );
        assert_eq!(
            serde_json::to_string(&FraudAlert::Suspicious).unwrap(),
            "\"Suspicious\""
        );
        let parsed: FraudAlert = serde_json::from_str("\"Warning\"").unwrap();
        assert_eq!(parsed, FraudAlert::Warning);
    }

    #[test]
    fn test_tone_buckets() {
        assert_eq!(SentimentTone::from_signal(0.7), SentimentTone::Positive);
        assert_eq!(SentimentTone::from_signal(0.6), SentimentTone::Mixed);
        assert_eq!(SentimentTone::from_signal(0.5), SentimentTone::Mixed);
        assert_eq!(SentimentTone::from_signal(0.4), SentimentTone::Mixed);
        assert_eq!(SentimentTone::from_signal(0.3), SentimentTone::Negative);
    }

    #[test]
    fn test_credibility_floor() {
        assert_eq!(RiskVerdict::credibility_for(0), 100);
        assert_eq!(RiskVerdict::credibility_for(20), 80);
        assert_eq!(RiskVerdict::credibility_for(90), 10);
        assert_eq!(RiskVerdict::credibility_for(100), 10);
    }
}
