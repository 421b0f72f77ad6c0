//! Property tests for the verdict invariants

use investiguard_classifiers::RiskEngine;
use investiguard_core::FraudAlert;
use proptest::prelude::*;

fn engine() -> RiskEngine {
    RiskEngine::with_keyword_sentiment().unwrap()
}

const PHRASES: &[&str] = &[
    "guaranteed profit",
    "get rich quick",
    "no risk",
    "double your money",
    "secret strategy",
    "diversified portfolio",
    "long term investment",
    "transparent fees",
    "great",
    "risky",
    "hello world",
];

proptest! {
    #[test]
    fn verdict_fields_stay_in_range(text in ".{0,200}", signal in 0.0f32..=1.0) {
        let verdict = engine().score_with_signal(&text, signal);

        prop_assert!(verdict.risk_score <= 100);
        prop_assert!((10..=100).contains(&verdict.credibility_score));
        prop_assert!((60..=95).contains(&verdict.confidence));
        prop_assert_eq!(
            verdict.credibility_score,
            10u8.max(100 - verdict.risk_score)
        );
    }

    #[test]
    fn alert_matches_thresholds(
        picks in proptest::collection::vec(0..PHRASES.len(), 0..12),
        signal in 0.0f32..=1.0,
    ) {
        let text = picks.iter().map(|i| PHRASES[*i]).collect::<Vec<_>>().join(" and ");
        let verdict = engine().score_with_signal(&text, signal);

        let expected = if verdict.risk_score >= 70 {
            FraudAlert::Suspicious
        } else if verdict.risk_score >= 40 {
            FraudAlert::Warning
        } else {
            FraudAlert::LikelySafe
        };
        prop_assert_eq!(verdict.fraud_alert, expected);
    }

    #[test]
    fn repetition_does_not_change_counts(idx in 0..PHRASES.len(), times in 1usize..10) {
        let engine = engine();
        let once = engine.score_with_signal(PHRASES[idx], 0.5);
        let repeated = engine.score_with_signal(&vec![PHRASES[idx]; times].join(". "), 0.5);

        prop_assert_eq!(once.suspicious_count, repeated.suspicious_count);
        prop_assert_eq!(once.positive_count, repeated.positive_count);
        prop_assert_eq!(once.risk_score, repeated.risk_score);
    }

    #[test]
    fn lower_sentiment_never_lowers_risk(text in "[a-z ]{0,80}", a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        let engine = engine();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let negative = engine.score_with_signal(&text, low);
        let positive = engine.score_with_signal(&text, high);
        prop_assert!(negative.risk_score >= positive.risk_score);
        prop_assert!(negative.fraud_alert >= positive.fraud_alert);
    }
}
