use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use docbridge_llm::{SummaryOptions, SummaryStyle};
use docbridge_translate::AUTO_DETECT;
use tracing::info;

use super::{extract_document, parse_style, preview, resolve_languages, translate_text, truncate_chars};
use crate::error::ApiError;
use crate::multipart::read_form;
use crate::state::AppState;
use crate::types::UploadResponse;

/// Extract a document's text and translate it
///
/// Form fields: `file`, `target_lang`, `source_lang`, `summarize`, `summary_style`.
#[post("/upload")]
pub async fn upload(payload: Multipart, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mut form = read_form(payload, state.config.max_upload_bytes).await?;
    let document = form.take_file()?;

    // Reject unsupported types before any other work
    let kind = document.kind()?;

    let (target_lang, source_lang) = resolve_languages(
        &state,
        form.field_any(&["target_lang", "target_language"]),
        form.field_any(&["source_lang", "source_language"]),
    )?;
    let summarize = form.flag("summarize");
    let style = parse_style(form.field("summary_style"), SummaryStyle::Concise)?;

    let filename = document.filename.clone();
    info!(
        "Upload received - {} ({}, {} bytes) -> {}, summarize: {}",
        filename,
        kind,
        document.bytes.len(),
        target_lang,
        summarize
    );

    let extracted = extract_document(document).await?;
    let extracted_text_length = extracted.char_count();

    let (input, text_truncated, summary, tokens_used) = if summarize {
        let summary = state
            .summarizer
            .summarize(&extracted.text, SummaryOptions::with_style(style))
            .await?;
        (summary.text.clone(), false, Some(summary.text), Some(summary.tokens_used))
    } else {
        let (head, truncated) = truncate_chars(&extracted.text, state.config.max_translate_chars);
        if truncated {
            info!(
                "Translating first {} of {} chars",
                state.config.max_translate_chars, extracted_text_length
            );
        }
        (head.to_string(), truncated, None, None)
    };

    let original_text = preview(&input);
    let result = translate_text(&state, input, &target_lang, source_lang.clone()).await?;

    Ok(HttpResponse::Ok().json(UploadResponse {
        success: true,
        filename,
        file_type: kind.as_str().to_string(),
        extracted_text: extracted.text,
        extracted_text_length,
        original_text,
        translated_text: result.translated_text,
        source_lang: source_lang.unwrap_or_else(|| AUTO_DETECT.to_string()),
        target_lang,
        detected_language: result.detected_language,
        text_truncated,
        summary,
        tokens_used,
    }))
}
