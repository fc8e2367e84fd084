use actix_web::{post, web, HttpResponse};
use docbridge_common::DocBridgeError;
use docbridge_llm::{SummaryOptions, SummaryStyle};
use docbridge_translate::AUTO_DETECT;
use tracing::info;

use super::{parse_style, resolve_languages, translate_text};
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{TranslateRequest, TranslateResponse};

/// Translate plain text, optionally summarizing it first
#[post("/translate")]
pub async fn translate(
    state: web::Data<AppState>,
    body: web::Json<TranslateRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let text = request.text.trim();
    if text.is_empty() {
        return Err(DocBridgeError::validation("No text provided").into());
    }

    let (target_lang, source_lang) = resolve_languages(
        &state,
        request.target_lang.as_deref(),
        request.source_lang.as_deref(),
    )?;
    let style = parse_style(request.summary_style.as_deref(), SummaryStyle::Concise)?;

    info!(
        "Translate request - {} chars, {} -> {}, summarize: {}",
        text.chars().count(),
        source_lang.as_deref().unwrap_or(AUTO_DETECT),
        target_lang,
        request.summarize
    );

    let (input, summary, tokens_used) = if request.summarize {
        let summary = state
            .summarizer
            .summarize(text, SummaryOptions::with_style(style))
            .await?;
        (summary.text.clone(), Some(summary.text), Some(summary.tokens_used))
    } else {
        (text.to_string(), None, None)
    };

    let result = translate_text(&state, input, &target_lang, source_lang.clone()).await?;

    Ok(HttpResponse::Ok().json(TranslateResponse {
        success: true,
        original_text: text.to_string(),
        source_lang: source_lang.unwrap_or_else(|| AUTO_DETECT.to_string()),
        target_lang,
        detected_language: result.detected_language,
        translated_text: result.translated_text,
        summary,
        tokens_used,
    }))
}
