//! PDF text extraction.
//!
//! Extraction is best-effort by contract: a corrupt, encrypted, or zero-page
//! document yields an empty string, never an error. The caller decides what
//! an empty result means (for the analyze endpoint: an unprocessable upload).

use lopdf::Document;
use tracing::warn;

/// Extracts lower-cased plain text from a PDF supplied as raw bytes.
///
/// Pages are walked in page order, each page's text followed by a newline.
/// If lopdf cannot parse the document (or parses it to nothing), a
/// whole-document pass with pdf-extract is attempted before giving up.
pub fn extract_text(bytes: &[u8]) -> String {
    let text = match extract_pages(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("pdf parse failed: {e}");
            String::new()
        }
    };

    if text.trim().is_empty() {
        return match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text.to_lowercase(),
            Err(e) => {
                warn!("fallback pdf extraction failed: {e}");
                String::new()
            }
        };
    }

    text.to_lowercase()
}

/// Page-by-page extraction with lopdf. A page that fails to extract is
/// skipped; only a document-level parse failure is an error.
fn extract_pages(bytes: &[u8]) -> Result<String, lopdf::Error> {
    let doc = Document::load_mem(bytes)?;

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(content) => {
                text.push_str(&content);
                text.push('\n');
            }
            Err(e) => warn!("text extraction failed for page {page_num}: {e}"),
        }
    }
    Ok(text)
}
