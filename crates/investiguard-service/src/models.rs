//! Request and response bodies
//!
//! Every analysis response is a projection of one [`RiskVerdict`].

use crate::alerts::MarketAlert;
use chrono::{DateTime, Utc};
use investiguard_classifiers::AdvisorVerification;
use investiguard_core::{FraudAlert, RiskVerdict};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NlpAnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextAnalysisRequest {
    pub content: String,
    #[serde(default = "default_text_content_type")]
    pub content_type: String,
}

fn default_text_content_type() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlForm {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorForm {
    pub name: String,
}

// ============================================================================
// Analysis responses
// ============================================================================

/// Compact verdict returned by `/analyze` and `/nlp-analyze`
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub fraud_alert: FraudAlert,
    pub credibility_score: u8,
    pub advisor_verified: bool,
    pub deepfake_detected: bool,
}

impl AnalyzeResponse {
    pub fn project(verdict: &RiskVerdict, advisor_verified: bool, deepfake_detected: bool) -> Self {
        Self {
            fraud_alert: verdict.fraud_alert,
            credibility_score: verdict.credibility_score,
            advisor_verified,
            deepfake_detected,
        }
    }
}

/// Verdict fields shared by the detailed `/api/analyze/*` responses
#[derive(Debug, Clone, Serialize)]
pub struct VerdictDetails {
    pub fraud_alert: FraudAlert,
    pub credibility_score: u8,
    pub deepfake_detected: bool,
    pub analysis: String,
    pub risk_score: u8,
    pub confidence: u8,
    pub timestamp: DateTime<Utc>,
    /// Milliseconds spent handling the request
    pub processing_time: f64,
}

impl VerdictDetails {
    pub fn project(verdict: &RiskVerdict, deepfake_detected: bool, processing_time: f64) -> Self {
        Self {
            fraud_alert: verdict.fraud_alert,
            credibility_score: verdict.credibility_score,
            deepfake_detected,
            analysis: verdict.analysis_text.clone(),
            risk_score: verdict.risk_score,
            confidence: verdict.confidence,
            timestamp: Utc::now(),
            processing_time,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextAnalysisResponse {
    pub id: String,
    pub content_type: String,
    pub advisor_verified: bool,
    #[serde(flatten)]
    pub verdict: VerdictDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentAnalysisResponse {
    pub id: String,
    pub filename: Option<String>,
    pub content_type: String,
    #[serde(flatten)]
    pub verdict: VerdictDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrlAnalysisResponse {
    pub id: String,
    pub url: String,
    pub content_type: String,
    #[serde(flatten)]
    pub verdict: VerdictDetails,
}

// ============================================================================
// Advisor verification
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AdvisorVerificationResponse {
    pub success: bool,
    pub data: AdvisorVerificationData,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisorVerificationData {
    pub advisor_name: String,
    #[serde(flatten)]
    pub verification: AdvisorVerification,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Service information
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
    pub models: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub capabilities: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentStatus {
    pub backend: String,
    pub tier: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelsStatusResponse {
    pub models: BTreeMap<&'static str, ModelStatus>,
    pub sentiment: SentimentStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<MarketAlert>,
    pub total_count: usize,
    pub new_alerts: usize,
    pub timestamp: DateTime<Utc>,
}
