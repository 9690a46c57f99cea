//! HTTP surface for the letter explainer

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use explainer_core::types::{
    AnalyzeLetterRequest, AnalyzeLetterResponse, HealthCheckResult, HealthStatus, RejectionReason,
};
use explainer_core::LetterAnalyzer;
use std::sync::Arc;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<LetterAnalyzer>,
}

/// Build the service router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze-letter", post(analyze_letter_handler))
        .with_state(state)
}

async fn health_handler() -> Json<HealthCheckResult> {
    Json(HealthCheckResult {
        status: HealthStatus::Healthy,
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        last_check: Utc::now(),
    })
}

/// Analysis responses always use HTTP 200; rejections and internal
/// failures are encoded in the body envelope.
async fn analyze_letter_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeLetterRequest>,
) -> Json<AnalyzeLetterResponse> {
    let file_url = request
        .file_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty());

    let file_url = match file_url {
        Some(url) => url,
        None => {
            log::warn!("Analyze request without a file URL");
            return Json(AnalyzeLetterResponse::rejected(
                &RejectionReason::MissingFileUrl,
            ));
        }
    };

    match state.analyzer.analyze(file_url).await {
        Ok(outcome) => Json(AnalyzeLetterResponse::from_outcome(outcome)),
        Err(e) => {
            log::error!("Letter analysis failed: {}", e);
            Json(AnalyzeLetterResponse::internal_failure(&e))
        }
    }
}
