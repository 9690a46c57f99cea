//! Prompt template for SARS letter explanations.
//! Kept in one place so tests can assert on the exact wording sent to the model.

/// Sentence the model must reply with when the letter text is not enough
/// to explain reliably.
pub const INSUFFICIENT_LETTER_FALLBACK: &str =
    "This letter does not contain enough information for a reliable explanation.";

/// Instruction block sent ahead of the letter text
pub const LETTER_EXPLANATION_INSTRUCTIONS: &str = r#"You are a South African tax assistant.

Explain the following SARS letter in plain English.
Do NOT give tax advice.

Work ONLY from the letter text provided below. Do not use outside knowledge
about SARS processes, do not guess the letter type, and do not invent
deadlines or consequences the letter does not state.

Include:
- Letter type (only if the letter states it explicitly)
- What it means
- What SARS wants
- Deadlines (only those stated in the letter)
- Consequences (only those stated in the letter)
- Safe next steps (practical, without giving tax advice)

If the letter text is too fragmentary or unclear to explain reliably, reply with exactly this sentence:
This letter does not contain enough information for a reliable explanation."#;

/// Build the single-turn prompt for one letter.
/// The extracted text is appended verbatim, unmodified.
pub fn build_prompt(letter_text: &str) -> String {
    format!(
        "{}\n\nSARS LETTER:\n{}",
        LETTER_EXPLANATION_INSTRUCTIONS, letter_text
    )
}
