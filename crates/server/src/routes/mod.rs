pub mod analyze;
pub mod languages;
pub mod system;
pub mod translate;
pub mod upload;

use actix_web::web;
use docbridge_common::{DocBridgeError, Result};
use docbridge_extract::{ExtractedText, UploadedDocument};
use docbridge_llm::SummaryStyle;
use docbridge_translate::{explicit_source, TranslationRequest, TranslationResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Characters of translated input echoed back as `original_text`
pub const PREVIEW_CHARS: usize = 500;

/// Canonical target and optional source language codes
///
/// A missing, empty or `auto` source means auto-detection.
pub(crate) fn resolve_languages(
    state: &AppState,
    target: Option<&str>,
    source: Option<&str>,
) -> Result<(String, Option<String>)> {
    let target = target
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DocBridgeError::validation("No target_lang provided"))?;
    let target = state.languages.resolve(target)?.to_string();

    let source = match explicit_source(source) {
        Some(code) => Some(state.languages.resolve(code)?.to_string()),
        None => None,
    };

    Ok((target, source))
}

/// Summary style from an optional request value
pub(crate) fn parse_style(value: Option<&str>, default: SummaryStyle) -> Result<SummaryStyle> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.parse().map_err(DocBridgeError::validation),
        None => Ok(default),
    }
}

/// Extract text on the blocking pool; blank documents are rejected
pub(crate) async fn extract_document(document: UploadedDocument) -> std::result::Result<ExtractedText, ApiError> {
    let extracted = web::block(move || docbridge_extract::extract(&document)).await??;

    if extracted.is_blank() {
        return Err(DocBridgeError::validation("No text content found in document").into());
    }

    Ok(extracted)
}

/// Translate through the configured provider
///
/// Text longer than `max_translate_chars` is rejected before any upstream call.
pub(crate) async fn translate_text(
    state: &AppState,
    text: String,
    target: &str,
    source: Option<String>,
) -> Result<TranslationResult> {
    let max_chars = state.config.max_translate_chars;
    let (_, too_long) = truncate_chars(&text, max_chars);
    if too_long {
        return Err(DocBridgeError::validation(format!(
            "Text is too long to translate: {} chars (limit {})",
            text.chars().count(),
            max_chars
        )));
    }

    let request = TranslationRequest::new(text, target).with_source(source);
    state.translator.translate(request).await
}

/// First `max_chars` characters of `text`, and whether anything was cut
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}

/// Short preview with an ellipsis when cut
pub(crate) fn preview(text: &str) -> String {
    match truncate_chars(text, PREVIEW_CHARS) {
        (head, true) => format!("{}...", head),
        (all, false) => all.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("héllo", 2), ("hé", true));
        assert_eq!(truncate_chars("héllo", 5), ("héllo", false));
        assert_eq!(truncate_chars("", 3), ("", false));
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short"), "short");

        let long = "a".repeat(PREVIEW_CHARS + 1);
        let p = preview(&long);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_parse_style() {
        assert_eq!(parse_style(None, SummaryStyle::Analysis).unwrap(), SummaryStyle::Analysis);
        assert_eq!(
            parse_style(Some("bullet_points"), SummaryStyle::Concise).unwrap(),
            SummaryStyle::BulletPoints
        );
        assert_eq!(
            parse_style(Some("haiku"), SummaryStyle::Concise).unwrap_err().kind(),
            "ValidationError"
        );
    }
}
