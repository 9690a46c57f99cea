//! Common types used throughout the letter explainer

use crate::error::ExplainerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message returned when the request carries no usable file URL
pub const MISSING_FILE_URL_MESSAGE: &str = "No file URL provided";

/// Message returned when the downloaded file is not a PDF document
pub const NON_PDF_MESSAGE: &str =
    "The file does not appear to be a PDF document. Please upload your SARS letter as a PDF and try again.";

/// Message returned when too little machine-readable text survived extraction
pub const UNREADABLE_MESSAGE: &str =
    "We could not reliably read the text in this letter. It may be a scanned image or contain no machine-readable text. Please upload a text-based PDF copy of your SARS letter.";

/// Message returned when analysis fails for an internal reason
pub const ANALYSIS_FAILURE_MESSAGE: &str =
    "Sorry, something went wrong while analysing your letter. Please try again later.";

/// Incoming request body for letter analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeLetterRequest {
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Response envelope returned for every analysis request.
/// `debug` carries the error description and is present only on internal failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeLetterResponse {
    pub result: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl AnalyzeLetterResponse {
    /// Envelope for a produced explanation
    pub fn explained(result: String) -> Self {
        Self {
            result,
            debug: None,
        }
    }

    /// Envelope for a rejected input, carrying the fixed user-facing message
    pub fn rejected(reason: &RejectionReason) -> Self {
        Self {
            result: reason.user_message().to_string(),
            debug: None,
        }
    }

    /// Map a completed analysis to its envelope
    pub fn from_outcome(outcome: AnalysisOutcome) -> Self {
        match outcome {
            AnalysisOutcome::Explained(text) => Self::explained(text),
            AnalysisOutcome::Rejected(reason) => Self::rejected(&reason),
        }
    }

    /// Envelope for an internal failure: fixed apology plus the error text
    pub fn internal_failure(error: &ExplainerError) -> Self {
        Self {
            result: ANALYSIS_FAILURE_MESSAGE.to_string(),
            debug: Some(error.to_string()),
        }
    }
}

/// Raw downloaded document, held only for the duration of one request
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub bytes: Vec<u8>,
    /// Declared Content-Type header value, lower-cased (empty when absent)
    pub content_type: String,
}

/// Terminal result of a completed analysis pipeline run.
/// Internal failures travel separately as `ExplainerError`.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// The model produced an explanation, returned verbatim
    Explained(String),
    /// The input was rejected before the model was invoked
    Rejected(RejectionReason),
}

/// Expected, user-facing reasons for turning a letter away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    MissingFileUrl,
    UnsupportedContentType { content_type: String },
    InsufficientText { chars: usize },
}

impl RejectionReason {
    /// Fixed message shown to the caller for this rejection
    pub fn user_message(&self) -> &'static str {
        match self {
            RejectionReason::MissingFileUrl => MISSING_FILE_URL_MESSAGE,
            RejectionReason::UnsupportedContentType { .. } => NON_PDF_MESSAGE,
            RejectionReason::InsufficientText { .. } => UNREADABLE_MESSAGE,
        }
    }
}

/// Health check status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Payload for the liveness probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub last_check: DateTime<Utc>,
}
