//! SARS Letter Explainer Core Library
//!
//! Business logic for the letter explanation service: configuration,
//! document fetching, PDF text extraction, sufficiency validation, and
//! explanation generation through a chat-completion model.

pub mod clients;
pub mod config;
pub mod error;
pub mod prompt;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_fixtures;

// Re-export main types for easy access
pub use config::ExplainerConfig;
pub use error::{ExplainerError, Result};

// Re-export all client types
pub use clients::{CompletionClient, DocumentClient, DocumentFetcher, OpenAIClient};

// Re-export service types
pub use services::{LetterAnalyzer, LetterExplainer};

// Re-export shared data types
pub use types::{
    AnalysisOutcome,
    AnalyzeLetterRequest,
    AnalyzeLetterResponse,
    FetchedDocument,
    HealthCheckResult,
    HealthStatus,
    RejectionReason,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_envelope_uses_fixed_message() {
        let response = AnalyzeLetterResponse::rejected(&RejectionReason::MissingFileUrl);
        assert_eq!(response.result, types::MISSING_FILE_URL_MESSAGE);
        assert!(response.debug.is_none());
    }
}
