use crate::models::{
    AdvisorForm, AdvisorVerificationData, AdvisorVerificationResponse, AlertsResponse,
    AnalyzeRequest, AnalyzeResponse, DocumentAnalysisResponse, HealthResponse, ModelStatus,
    ModelsStatusResponse, NlpAnalyzeRequest, SentimentStatus, ServiceInfo, TextAnalysisRequest,
    TextAnalysisResponse, UrlAnalysisResponse, UrlForm, VerdictDetails,
};
use crate::server::AppError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Form, Json,
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

const SERVICE_NAME: &str = "InvestiGuard AI Service";
const API_VERSION: &str = "1.0.0";
const MODEL_READY: &str = "ready";

fn count_request(endpoint: &'static str) {
    metrics::counter!("investiguard_requests_total", "endpoint" => endpoint).increment(1);
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Stand-in text for a link; pages are never fetched
pub fn simulated_link_content(link: &str) -> String {
    format!(
        "Content extracted from {}. This is a simulated analysis of the webpage content.",
        link
    )
}

// ============================================================================
// Service endpoints
// ============================================================================

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_NAME,
        version: API_VERSION,
        status: "running",
        timestamp: Utc::now(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    let models = BTreeMap::from([
        ("fraud_detector", MODEL_READY),
        ("deepfake_detector", MODEL_READY),
        ("advisor_verifier", MODEL_READY),
    ]);

    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Utc::now(),
        models,
    })
}

pub async fn models_status(State(state): State<AppState>) -> Json<ModelsStatusResponse> {
    let sentiment = state.engine.sentiment_classifier();

    let models = BTreeMap::from([
        (
            "fraud_detector",
            ModelStatus {
                status: MODEL_READY,
                version: API_VERSION,
                capabilities: vec!["text_analysis", "pattern_detection", "risk_scoring"],
            },
        ),
        (
            "deepfake_detector",
            ModelStatus {
                status: MODEL_READY,
                version: API_VERSION,
                capabilities: vec!["image_analysis", "video_analysis", "audio_analysis"],
            },
        ),
        (
            "advisor_verifier",
            ModelStatus {
                status: MODEL_READY,
                version: API_VERSION,
                capabilities: vec!["credential_verification", "regulatory_checks"],
            },
        ),
    ]);

    Json(ModelsStatusResponse {
        models,
        sentiment: SentimentStatus {
            backend: sentiment.name().to_string(),
            tier: sentiment.tier().as_str(),
        },
        timestamp: Utc::now(),
    })
}

pub async fn metrics(State(state): State<AppState>) -> Result<String, AppError> {
    state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| AppError::Unavailable("Metrics recorder is not installed".to_string()))
}

// ============================================================================
// Analysis endpoints
// ============================================================================

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    count_request("analyze");

    let (content, kind) = match (non_empty(req.text), non_empty(req.link)) {
        (Some(text), _) => (text, "text"),
        (None, Some(link)) => (simulated_link_content(&link), "link"),
        (None, None) => {
            return Err(AppError::BadRequest(
                "Either text or link must be provided".to_string(),
            ))
        }
    };

    let verdict = state.score(&content).await;
    let advisor_verified = state.advisors.verify_mentioned(&content);
    let deepfake_detected = state.deepfake.detect(kind).is_deepfake;

    info!(
        kind,
        alert = %verdict.fraud_alert,
        credibility = verdict.credibility_score,
        "Analyzed content"
    );

    Ok(Json(AnalyzeResponse::project(
        &verdict,
        advisor_verified,
        deepfake_detected,
    )))
}

pub async fn nlp_analyze(
    State(state): State<AppState>,
    Json(req): Json<NlpAnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    count_request("nlp_analyze");

    let verdict = state.score(&req.text).await;
    let advisor_verified = state.advisors.verify_mentioned(&req.text);

    debug!(alert = %verdict.fraud_alert, "NLP analysis complete");

    Json(AnalyzeResponse::project(&verdict, advisor_verified, false))
}

pub async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<TextAnalysisRequest>,
) -> Json<TextAnalysisResponse> {
    let start = Instant::now();
    count_request("analyze_text");

    let verdict = state.score(&req.content).await;
    let advisor_verified = state.advisors.verify_mentioned(&req.content);
    let deepfake_detected = state.deepfake.detect(&req.content_type).is_deepfake;

    Json(TextAnalysisResponse {
        id: Uuid::new_v4().to_string(),
        content_type: req.content_type,
        advisor_verified,
        verdict: VerdictDetails::project(&verdict, deepfake_detected, elapsed_ms(start)),
    })
}

pub async fn analyze_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DocumentAnalysisResponse>, AppError> {
    let start = Instant::now();
    count_request("analyze_document");

    let mut file: Option<(Option<String>, String)> = None;
    let mut content_type = "document".to_string();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                file = Some((filename, String::from_utf8_lossy(&bytes).into_owned()));
            }
            Some("content_type") => content_type = field.text().await?,
            _ => {}
        }
    }

    let (filename, content) =
        file.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    let verdict = state.score(&content).await;
    let deepfake_detected = state.deepfake.detect(&content_type).is_deepfake;

    info!(
        filename = filename.as_deref().unwrap_or("<unnamed>"),
        bytes = content.len(),
        alert = %verdict.fraud_alert,
        "Analyzed document"
    );

    Ok(Json(DocumentAnalysisResponse {
        id: Uuid::new_v4().to_string(),
        filename,
        content_type,
        verdict: VerdictDetails::project(&verdict, deepfake_detected, elapsed_ms(start)),
    }))
}

pub async fn analyze_url(
    State(state): State<AppState>,
    Form(form): Form<UrlForm>,
) -> Json<UrlAnalysisResponse> {
    let start = Instant::now();
    count_request("analyze_url");

    let content = simulated_link_content(&form.url);
    let verdict = state.score(&content).await;
    let deepfake_detected = state.deepfake.detect("webpage").is_deepfake;

    Json(UrlAnalysisResponse {
        id: Uuid::new_v4().to_string(),
        url: form.url,
        content_type: "url".to_string(),
        verdict: VerdictDetails::project(&verdict, deepfake_detected, elapsed_ms(start)),
    })
}

// ============================================================================
// Advisor and alert endpoints
// ============================================================================

pub async fn verify_advisor(
    State(state): State<AppState>,
    Form(form): Form<AdvisorForm>,
) -> Json<AdvisorVerificationResponse> {
    count_request("verify_advisor");

    let verification = state.advisors.verify(&form.name);
    debug!(advisor = %form.name, verified = verification.verified, "Verified advisor");

    Json(AdvisorVerificationResponse {
        success: true,
        data: AdvisorVerificationData {
            advisor_name: form.name,
            verification,
            timestamp: Utc::now(),
        },
    })
}

pub async fn alerts(State(state): State<AppState>) -> Json<AlertsResponse> {
    count_request("alerts");

    let snapshot = state.alerts.poll();
    Json(AlertsResponse {
        total_count: snapshot.alerts.len(),
        new_alerts: snapshot.new_alerts,
        alerts: snapshot.alerts,
        timestamp: snapshot.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_link_content() {
        assert_eq!(
            simulated_link_content("https://example.com"),
            "Content extracted from https://example.com. This is a simulated analysis of the webpage content."
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("x".into())), Some("x".to_string()));
        assert_eq!(non_empty(Some("  ".into())), Some("  ".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }
}
