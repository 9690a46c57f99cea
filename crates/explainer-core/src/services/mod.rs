//! Business services for letter analysis

pub mod analyzer;
pub mod explainer;
pub mod extractor;
pub mod validator;

// Re-export service types
pub use analyzer::LetterAnalyzer;
pub use explainer::LetterExplainer;
pub use extractor::ExtractedLetter;
