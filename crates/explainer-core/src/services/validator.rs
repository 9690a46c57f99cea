//! Sufficiency check for extracted letter text

/// Minimum number of characters, after trimming, before a letter is
/// considered readable enough to explain
pub const MIN_LETTER_TEXT_CHARS: usize = 200;

/// Number of characters the sufficiency check counts for `text`
pub fn counted_chars(text: &str) -> usize {
    text.trim().chars().count()
}

/// Whether enough machine-readable text survived extraction to hand the
/// letter to the model
pub fn is_sufficient(text: &str) -> bool {
    counted_chars(text) >= MIN_LETTER_TEXT_CHARS
}
