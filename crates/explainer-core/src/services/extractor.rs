//! Content-type gate and PDF text extraction

use crate::error::Result;
use lopdf::Document;

/// Media types accepted by the PDF gate
pub const ALLOWED_MEDIA_TYPES: &[&str] = &["application/pdf", "application/x-pdf"];

/// Magic marker at the start of every PDF file
const PDF_MAGIC: &[u8] = b"%PDF";

/// Extracted letter text together with the number of pages it came from
#[derive(Debug, Clone)]
pub struct ExtractedLetter {
    pub text: String,
    pub pages: usize,
}

/// Reduce a Content-Type header value to its media-type essence:
/// parameters and surrounding whitespace stripped, then lower-cased.
pub fn media_type_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Check the declared content type against the PDF allow-list.
/// Exact essence comparison, no substring matching.
pub fn is_supported_media_type(content_type: &str) -> bool {
    let essence = media_type_essence(content_type);
    ALLOWED_MEDIA_TYPES.contains(&essence.as_str())
}

/// Corroborate the declared type against the file's leading bytes
pub fn has_pdf_magic(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Extract machine-readable text from every page in order, concatenated
/// without separators. A page that yields no text contributes an empty
/// string; only a document that fails to parse at all is an error.
pub fn extract_letter_text(data: &[u8]) -> Result<ExtractedLetter> {
    let doc = Document::load_mem(data)?;

    let pages = doc.get_pages();
    let page_count = pages.len();

    let mut text = String::new();
    for (page_num, _page_id) in pages {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                log::debug!("Page {} yielded no text: {}", page_num, e);
            }
        }
    }

    Ok(ExtractedLetter {
        text,
        pages: page_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::sample_pdf;

    #[test]
    fn test_media_type_essence_strips_parameters() {
        assert_eq!(
            media_type_essence("application/pdf; charset=binary"),
            "application/pdf"
        );
        assert_eq!(media_type_essence(" Application/PDF "), "application/pdf");
        assert_eq!(
            media_type_essence("image/png;name=\"scan.png\""),
            "image/png"
        );
        assert_eq!(media_type_essence(""), "");
    }

    #[test]
    fn test_allow_list_accepts_only_pdf_types() {
        assert!(is_supported_media_type("application/pdf"));
        assert!(is_supported_media_type("application/x-pdf"));
        assert!(is_supported_media_type("application/pdf; name=letter.pdf"));
        assert!(is_supported_media_type("APPLICATION/PDF"));

        assert!(!is_supported_media_type("image/png"));
        assert!(!is_supported_media_type("text/html"));
        assert!(!is_supported_media_type(""));
        // Exact essence match, not a substring check
        assert!(!is_supported_media_type("application/pdfx"));
        assert!(!is_supported_media_type("application/vnd.pdf-ish"));
    }

    #[test]
    fn test_pdf_magic_detection() {
        assert!(has_pdf_magic(b"%PDF-1.7\n..."));
        assert!(!has_pdf_magic(b"\x89PNG\r\n\x1a\n"));
        assert!(!has_pdf_magic(b""));
        assert!(!has_pdf_magic(b"PDF-1.7"));
    }

    #[test]
    fn test_extract_concatenates_pages_in_order() {
        let bytes = sample_pdf(&[
            "First page covers the VAT217 assessment.",
            "Second page lists the payment deadline.",
        ]);

        let letter = extract_letter_text(&bytes).expect("extract sample PDF");

        assert_eq!(letter.pages, 2);
        assert!(letter.text.contains("First page covers the VAT217 assessment."));
        assert!(letter.text.contains("Second page lists the payment deadline."));

        let first = letter.text.find("First page").expect("first page text");
        let second = letter.text.find("Second page").expect("second page text");
        assert!(first < second, "pages must keep document order");
    }

    #[test]
    fn test_extract_handles_textless_pages() {
        let bytes = sample_pdf(&["", "Only the middle page has text.", ""]);

        let letter = extract_letter_text(&bytes).expect("extract sample PDF");

        assert_eq!(letter.pages, 3);
        assert!(letter.text.contains("Only the middle page has text."));
    }

    #[test]
    fn test_extract_of_blank_document_is_empty() {
        let bytes = sample_pdf(&[""]);

        let letter = extract_letter_text(&bytes).expect("extract sample PDF");

        assert_eq!(letter.pages, 1);
        assert!(letter.text.trim().is_empty());
    }

    #[test]
    fn test_extract_rejects_malformed_bytes() {
        let result = extract_letter_text(b"%PDF-1.4 but nothing else of substance");
        assert!(result.is_err(), "malformed PDF must propagate as an error");
    }
}
