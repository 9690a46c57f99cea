//! Clients for external collaborators

pub mod document;
pub mod openai;

// Re-export all client types
pub use document::{DocumentClient, DocumentFetcher};
pub use openai::{CompletionClient, OpenAIClient};
