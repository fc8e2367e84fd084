use docbridge_common::{DocBridgeError, Result};
use lopdf::Document;
use tracing::{debug, warn};

use crate::types::{DocumentKind, ExtractedText};

/// Extract page text in document order
///
/// Each page that yields text is prefixed with a `--- Page N ---` marker.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText> {
    let document = Document::load_mem(bytes)
        .map_err(|e| DocBridgeError::extraction(format!("Failed to read PDF: {}", e)))?;

    if document.is_encrypted() {
        return Err(DocBridgeError::extraction("PDF is encrypted"));
    }

    // BTreeMap keyed by page number, so iteration is in document order
    let pages = document.get_pages();
    debug!("PDF loaded - Pages: {}", pages.len());

    let mut sections = Vec::new();
    for page_number in pages.keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => {
                let page_text = page_text.trim();
                if !page_text.is_empty() {
                    sections.push(format!("--- Page {} ---\n{}", page_number, page_text));
                }
            }
            Err(e) => {
                warn!("Skipping PDF page {}: {}", page_number, e);
            }
        }
    }

    if sections.is_empty() && !pages.is_empty() {
        debug!("PDF has no extractable text (scanned or image-only?)");
    }

    let mut extracted = ExtractedText::new(sections.join("\n\n"), DocumentKind::Pdf);
    extracted.page_count = Some(sections.len());
    Ok(extracted)
}
