use docbridge_common::{DocBridgeError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tracing::debug;
use zip::ZipArchive;

use crate::types::{DocumentKind, ExtractedText};

/// Main document part inside the OOXML package
const DOCUMENT_PART: &str = "word/document.xml";

/// Upper bound on the decompressed size of `word/document.xml`
pub const MAX_DOCUMENT_PART_BYTES: u64 = 64 * 1024 * 1024;

/// Extract paragraph text in document order
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText> {
    extract_text_with_limit(bytes, MAX_DOCUMENT_PART_BYTES)
}

/// Extract paragraph text, refusing a document part that inflates past `limit` bytes
pub fn extract_text_with_limit(bytes: &[u8], limit: u64) -> Result<ExtractedText> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DocBridgeError::extraction(format!("Failed to open DOCX container: {}", e)))?;

    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DocBridgeError::extraction(format!("DOCX is missing {}: {}", DOCUMENT_PART, e)))?;

    // Declared size, then the inflated stream
    if part.size() > limit {
        return Err(too_large(limit));
    }

    let mut xml = Vec::new();
    part.take(limit + 1)
        .read_to_end(&mut xml)
        .map_err(|e| DocBridgeError::extraction(format!("Failed to read {}: {}", DOCUMENT_PART, e)))?;
    if xml.len() as u64 > limit {
        return Err(too_large(limit));
    }

    let paragraphs = parse_paragraphs(&xml)?;
    debug!("DOCX parsed - Paragraphs: {}", paragraphs.len());

    let mut extracted = ExtractedText::new(paragraphs.join("\n\n"), DocumentKind::Docx);
    extracted.paragraph_count = Some(paragraphs.len());
    Ok(extracted)
}

fn too_large(limit: u64) -> DocBridgeError {
    DocBridgeError::extraction(format!(
        "DOCX content exceeds the {} byte limit for {}",
        limit, DOCUMENT_PART
    ))
}

/// Collect non-blank `w:p` paragraphs from document.xml
///
/// Paragraphs nested in text boxes get their own buffer and are emitted
/// when they close, so the enclosing paragraph keeps its text. Tabs and
/// breaks count only inside a run (`w:r`), which skips tab-stop definitions
/// in paragraph properties.
fn parse_paragraphs(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = run_depth > 0,
                _ => {}
            },
            Ok(Event::Empty(e)) if run_depth > 0 => {
                if let Some(current) = open.last_mut() {
                    match e.name().as_ref() {
                        b"w:tab" => current.push('\t'),
                        b"w:br" | b"w:cr" => current.push('\n'),
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| DocBridgeError::extraction(format!("Malformed DOCX text: {}", e)))?;
                if let Some(current) = open.last_mut() {
                    current.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        if !paragraph.trim().is_empty() {
                            paragraphs.push(paragraph);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocBridgeError::extraction(format!(
                    "Malformed DOCX XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
