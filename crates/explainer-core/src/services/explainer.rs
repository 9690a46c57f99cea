//! Explanation generation through the chat-completion client

use crate::clients::CompletionClient;
use crate::error::Result;
use crate::prompt;
use std::sync::Arc;

pub struct LetterExplainer {
    completion_client: Arc<dyn CompletionClient>,
}

impl LetterExplainer {
    pub fn new(completion_client: Arc<dyn CompletionClient>) -> Self {
        Self { completion_client }
    }

    /// Ask the model to explain the letter; the reply is returned verbatim
    pub async fn explain(&self, letter_text: &str) -> Result<String> {
        let prompt = prompt::build_prompt(letter_text);

        log::debug!("Built explanation prompt ({} chars)", prompt.chars().count());

        self.completion_client.complete(&prompt).await
    }
}
