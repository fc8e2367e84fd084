//! DocBridge Document Extractor
//!
//! Plain text extraction from PDF, DOCX and TXT uploads

pub mod docx;
pub mod pdf;
pub mod text;
pub mod types;

pub use types::{DocumentKind, ExtractedText, UploadedDocument};

use docbridge_common::Result;
use tracing::info;

/// Extract text from raw bytes of a known kind
pub fn extract_bytes(bytes: &[u8], kind: DocumentKind) -> Result<ExtractedText> {
    match kind {
        DocumentKind::Pdf => pdf::extract_text(bytes),
        DocumentKind::Docx => docx::extract_text(bytes),
        DocumentKind::Txt => text::extract_text(bytes),
    }
}

/// Extract text from an uploaded document
///
/// Fails with `UnsupportedFormat` before reading any bytes when the declared
/// type is not PDF/DOCX/TXT.
pub fn extract(document: &UploadedDocument) -> Result<ExtractedText> {
    let kind = document.kind()?;
    let extracted = extract_bytes(&document.bytes, kind)?;

    info!(
        "Extracted text from {} ({}) - {} bytes in, {} chars out",
        document.filename,
        kind,
        document.bytes.len(),
        extracted.char_count()
    );

    Ok(extracted)
}
