use crate::alerts::{AlertFeed, Clock, SystemClock};
use crate::config::ServiceConfig;
use investiguard_classifiers::{
    AdvisorRegistry, Classifier, DeepfakeDetector, KeywordSentimentClassifier, RiskEngine,
};
use investiguard_core::RiskVerdict;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<ServiceConfig>,

    /// Fraud risk scoring engine
    pub engine: Arc<RiskEngine>,

    /// Static advisor registry
    pub advisors: Arc<AdvisorRegistry>,

    /// Simulated deepfake detector
    pub deepfake: DeepfakeDetector,

    /// Simulated market alert feed
    pub alerts: Arc<AlertFeed>,

    /// Prometheus handle for rendering metrics
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state from configuration, loading the sentiment classifier.
    ///
    /// A model backend that fails to load is replaced by the keyword lexicon so
    /// the service still starts.
    pub async fn new(
        config: ServiceConfig,
        metrics_handle: Option<PrometheusHandle>,
    ) -> anyhow::Result<Self> {
        let sentiment_config = config.sentiment.clone();
        let sentiment: Arc<dyn Classifier> =
            match tokio::task::spawn_blocking(move || sentiment_config.build()).await? {
                Ok(classifier) => classifier,
                Err(e) => {
                    warn!(
                        backend = ?config.sentiment.backend,
                        error = %e,
                        "Failed to load sentiment classifier, falling back to keyword lexicon"
                    );
                    Arc::new(KeywordSentimentClassifier::new())
                }
            };

        info!(
            classifier = sentiment.name(),
            tier = sentiment.tier().as_str(),
            "Sentiment classifier ready"
        );

        let engine = RiskEngine::new(sentiment)?;
        Ok(Self::with_engine(config, engine, Arc::new(SystemClock))
            .with_metrics(metrics_handle))
    }

    /// Build state around an existing engine and clock
    pub fn with_engine(config: ServiceConfig, engine: RiskEngine, clock: Arc<dyn Clock>) -> Self {
        let alerts = AlertFeed::new(
            config.alerts.capacity,
            config.alerts.interval(),
            config.alerts.seed,
            clock,
        );

        Self {
            deepfake: DeepfakeDetector::new(config.deepfake.seed),
            config: Arc::new(config),
            engine: Arc::new(engine),
            advisors: Arc::new(AdvisorRegistry::new()),
            alerts: Arc::new(alerts),
            metrics_handle: None,
        }
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics_handle = handle;
        self
    }

    /// Score `text` and count the verdict
    pub async fn score(&self, text: &str) -> RiskVerdict {
        let verdict = self.engine.score(text).await;
        metrics::counter!(
            "investiguard_verdicts_total",
            "alert" => verdict.fraud_alert.as_str()
        )
        .increment(1);
        verdict
    }
}
