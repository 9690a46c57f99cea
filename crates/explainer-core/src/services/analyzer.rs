//! Letter analysis pipeline

use crate::clients::{CompletionClient, DocumentFetcher};
use crate::error::Result;
use crate::services::explainer::LetterExplainer;
use crate::services::{extractor, validator};
use crate::types::{AnalysisOutcome, RejectionReason};
use std::sync::Arc;
use uuid::Uuid;

/// Runs one letter through fetch, gate, extraction, validation, and
/// explanation. Both clients are injected so tests can substitute doubles.
pub struct LetterAnalyzer {
    fetcher: Arc<dyn DocumentFetcher>,
    explainer: LetterExplainer,
}

impl LetterAnalyzer {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        completion_client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            fetcher,
            explainer: LetterExplainer::new(completion_client),
        }
    }

    /// Analyze the letter at `file_url`.
    /// Expected rejections come back as `AnalysisOutcome::Rejected`;
    /// only internal failures surface as errors.
    pub async fn analyze(&self, file_url: &str) -> Result<AnalysisOutcome> {
        let request_id = Uuid::new_v4();
        log::info!("[{}] Analyzing letter from {}", request_id, file_url);

        // Step 1: Download the letter
        let document = self.fetcher.fetch(file_url).await?;
        log::info!(
            "[{}] Step 1: Fetched {} bytes (content type '{}')",
            request_id,
            document.bytes.len(),
            document.content_type
        );

        // Step 2: PDF gate
        if !extractor::is_supported_media_type(&document.content_type)
            || !extractor::has_pdf_magic(&document.bytes)
        {
            log::warn!(
                "[{}] Step 2: Rejected non-PDF content (declared type '{}')",
                request_id,
                document.content_type
            );
            return Ok(AnalysisOutcome::Rejected(
                RejectionReason::UnsupportedContentType {
                    content_type: document.content_type,
                },
            ));
        }
        log::info!("[{}] Step 2: Content type accepted", request_id);

        // Step 3: Extract text page by page
        let letter = extractor::extract_letter_text(&document.bytes)?;
        log::info!(
            "[{}] Step 3: Extracted {} chars from {} pages",
            request_id,
            letter.text.chars().count(),
            letter.pages
        );

        // Step 4: Sufficiency check
        if !validator::is_sufficient(&letter.text) {
            let chars = validator::counted_chars(&letter.text);
            log::warn!(
                "[{}] Step 4: Too little readable text ({} chars)",
                request_id,
                chars
            );
            return Ok(AnalysisOutcome::Rejected(RejectionReason::InsufficientText {
                chars,
            }));
        }
        log::info!("[{}] Step 4: Text sufficient", request_id);

        // Step 5: Generate the explanation
        let explanation = self.explainer.explain(&letter.text).await?;
        log::info!(
            "[{}] Step 5: Explanation generated ({} chars)",
            request_id,
            explanation.chars().count()
        );

        Ok(AnalysisOutcome::Explained(explanation))
    }
}
