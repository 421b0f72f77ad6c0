//! Simulated fraud alert feed
//!
//! [`AlertLog`] is a bounded ring buffer of recent alerts. [`AlertFeed`]
//! appends a freshly simulated alert whenever the log is empty or its newest
//! entry is older than the configured interval, then returns a snapshot.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

const COMPANIES: &[&str] = &[
    "TechGrowth Inc",
    "GreenEnergy Ltd",
    "BioPharma Solutions",
    "CryptoMining Corp",
    "RealEstate Ventures",
    "OilExploration Co",
    "MiningResources Ltd",
    "StartupXYZ Inc",
];

const ALERT_TYPES: &[&str] = &["Suspicious", "Warning", "High Risk"];

const ALERT_SOURCE: &str = "AI Monitoring System";

const PATTERNS_DETECTED: &[&str] = &["unusual_volume", "suspicious_patterns", "credibility_concerns"];

const RISK_FACTORS: &[&str] = &["low_credibility", "suspicious_source", "pattern_anomaly"];

const RECOMMENDATION: &str = "Investigate further before making investment decisions";

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually advanced clock for tests and replays
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let by = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// One simulated market alert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAlert {
    /// `alert_{n}`, numbered from 1
    pub id: String,
    pub company: String,
    pub alert_type: String,
    pub credibility_score: u8,
    pub description: String,
    pub details: AlertDetails,
    pub timestamp: DateTime<Utc>,
    pub is_new: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertDetails {
    pub source: String,
    pub patterns_detected: Vec<String>,
    pub risk_factors: Vec<String>,
    pub recommendation: String,
}

/// Bounded log of recent alerts, oldest first
#[derive(Debug)]
pub struct AlertLog {
    capacity: usize,
    entries: VecDeque<MarketAlert>,
}

impl AlertLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an alert, evicting the oldest entries beyond capacity
    pub fn append(&mut self, alert: MarketAlert) {
        self.entries.push_back(alert);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Up to `limit` most recent alerts, oldest first
    pub fn recent(&self, limit: usize) -> Vec<MarketAlert> {
        let skip = self.entries.len().saturating_sub(limit);
        self.entries.iter().skip(skip).cloned().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Seeded generator of plausible-looking alerts
pub struct AlertSimulator {
    rng: StdRng,
    next_id: u64,
}

impl AlertSimulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn generate(&mut self, now: DateTime<Utc>) -> MarketAlert {
        let company = pick(&mut self.rng, COMPANIES);
        let alert_type = pick(&mut self.rng, ALERT_TYPES);
        let credibility_score = self.rng.gen_range(10..=90);

        let id = format!("alert_{}", self.next_id);
        self.next_id += 1;

        MarketAlert {
            id,
            description: format!("Suspicious activity detected for {}", company),
            details: AlertDetails {
                source: ALERT_SOURCE.to_string(),
                patterns_detected: to_strings(PATTERNS_DETECTED),
                risk_factors: to_strings(RISK_FACTORS),
                recommendation: RECOMMENDATION.to_string(),
            },
            company: company.to_string(),
            alert_type: alert_type.to_string(),
            credibility_score,
            timestamp: now,
            is_new: true,
        }
    }
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Snapshot returned to `/alerts` callers
#[derive(Debug, Clone)]
pub struct AlertSnapshot {
    pub alerts: Vec<MarketAlert>,
    pub new_alerts: usize,
    pub timestamp: DateTime<Utc>,
}

struct FeedState {
    log: AlertLog,
    simulator: AlertSimulator,
}

/// Alert log plus the simulator that feeds it, behind one mutex
pub struct AlertFeed {
    state: Mutex<FeedState>,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl AlertFeed {
    pub fn new(capacity: usize, interval: Duration, seed: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(FeedState {
                log: AlertLog::new(capacity),
                simulator: AlertSimulator::new(seed),
            }),
            clock,
            interval,
        }
    }

    /// Generate an alert if one is due, then return the retained alerts
    pub fn poll(&self) -> AlertSnapshot {
        let now = self.clock.now();
        let mut state = self.state.lock();

        let due = match state.log.recent(1).first() {
            None => true,
            Some(newest) => (now - newest.timestamp)
                .to_std()
                .map(|age| age > self.interval)
                .unwrap_or(false),
        };

        if due {
            let alert = state.simulator.generate(now);
            tracing::debug!(
                id = %alert.id,
                company = %alert.company,
                alert_type = %alert.alert_type,
                "Generated market alert"
            );
            state.log.append(alert);
        }

        let alerts = state.log.recent(state.log.capacity());
        drop(state);

        let new_alerts = alerts.iter().filter(|a| a.is_new).count();
        AlertSnapshot {
            alerts,
            new_alerts,
            timestamp: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn feed(capacity: usize, clock: Arc<ManualClock>) -> AlertFeed {
        AlertFeed::new(capacity, Duration::from_secs(30), 3, clock)
    }

    #[test]
    fn test_log_evicts_oldest() {
        let mut log = AlertLog::new(3);
        let mut simulator = AlertSimulator::new(0);
        for _ in 0..5 {
            log.append(simulator.generate(start()));
        }

        let ids: Vec<String> = log.recent(10).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["alert_3", "alert_4", "alert_5"]);
        let ids: Vec<String> = log.recent(2).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["alert_4", "alert_5"]);
    }

    #[test]
    fn test_generated_alert_shape() {
        let mut simulator = AlertSimulator::new(11);
        for n in 1..=50 {
            let alert = simulator.generate(start());
            assert_eq!(alert.id, format!("alert_{}", n));
            assert!(COMPANIES.contains(&alert.company.as_str()));
            assert!(ALERT_TYPES.contains(&alert.alert_type.as_str()));
            assert!((10..=90).contains(&alert.credibility_score));
            assert!(alert.is_new);
            assert_eq!(
                alert.description,
                format!("Suspicious activity detected for {}", alert.company)
            );
            assert_eq!(alert.details.source, "AI Monitoring System");
            assert_eq!(
                alert.details.patterns_detected,
                vec!["unusual_volume", "suspicious_patterns", "credibility_concerns"]
            );
            assert_eq!(
                alert.details.risk_factors,
                vec!["low_credibility", "suspicious_source", "pattern_anomaly"]
            );
            assert_eq!(
                alert.details.recommendation,
                "Investigate further before making investment decisions"
            );
        }
    }

    #[test]
    fn test_alert_wire_fields() {
        let alert = AlertSimulator::new(0).generate(start());
        let value = serde_json::to_value(&alert).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "alert_type",
                "company",
                "credibility_score",
                "description",
                "details",
                "id",
                "is_new",
                "timestamp"
            ]
        );
        assert_eq!(value["id"], "alert_1");
        assert_eq!(value["is_new"], true);
        assert!(value.get("type").is_none());
    }

    #[test]
    fn test_simulator_is_seeded() {
        let a: Vec<_> = (0..5)
            .scan(AlertSimulator::new(9), |s, _| Some(s.generate(start())))
            .collect();
        let b: Vec<_> = (0..5)
            .scan(AlertSimulator::new(9), |s, _| Some(s.generate(start())))
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_feed_respects_interval() {
        let clock = Arc::new(ManualClock::new(start()));
        let feed = feed(50, clock.clone());

        assert_eq!(feed.poll().alerts.len(), 1);
        assert_eq!(feed.poll().alerts.len(), 1);

        clock.advance(Duration::from_secs(30));
        assert_eq!(feed.poll().alerts.len(), 1);

        clock.advance(Duration::from_secs(1));
        let snapshot = feed.poll();
        assert_eq!(snapshot.alerts.len(), 2);
        assert_eq!(snapshot.new_alerts, 2);
        assert_eq!(snapshot.timestamp, clock.now());
    }

    #[test]
    fn test_feed_is_capped() {
        let clock = Arc::new(ManualClock::new(start()));
        let feed = feed(50, clock.clone());

        for _ in 0..60 {
            feed.poll();
            clock.advance(Duration::from_secs(31));
        }

        let snapshot = feed.poll();
        assert_eq!(snapshot.alerts.len(), 50);
        assert_eq!(
            snapshot.alerts.last().map(|a| a.id.as_str()),
            Some("alert_61")
        );
    }
}
