use docbridge_common::{DocBridgeError, Result};

use crate::types::{DocumentKind, ExtractedText};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode a plain text file as strict UTF-8
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let text = std::str::from_utf8(bytes).map_err(|e| {
        DocBridgeError::encoding(format!(
            "text file is not valid UTF-8 (invalid byte sequence at offset {})",
            e.valid_up_to()
        ))
    })?;

    Ok(ExtractedText::new(text.to_string(), DocumentKind::Txt))
}
