use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{post, web, HttpRequest, HttpResponse};
use docbridge_common::{DocBridgeError, Result};
use docbridge_llm::{SummaryOptions, SummaryStyle};
use futures_util::StreamExt;
use tracing::info;

use super::{extract_document, parse_style};
use crate::error::ApiError;
use crate::multipart::read_form;
use crate::state::AppState;
use crate::types::{AnalyzeRequest, AnalyzeResponse};

/// Summarize or analyze a document or a block of text
///
/// Accepts multipart (`file`, `prompt`, `style`) or JSON (`text`, `prompt`, `style`).
#[post("/analyze")]
pub async fn analyze(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> std::result::Result<HttpResponse, ApiError> {
    let limit = state.config.max_upload_bytes;
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);

    let (filename, text, options) = if is_multipart {
        let mut form = read_form(Multipart::new(req.headers(), payload), limit).await?;
        let document = form.take_file()?;
        document.kind()?;

        let options = SummaryOptions {
            style: parse_style(form.field_any(&["style", "summary_style"]), SummaryStyle::Analysis)?,
            instructions: form.field_any(&["prompt", "instructions"]).map(str::to_string),
        };
        let filename = document.filename.clone();
        let extracted = extract_document(document).await?;
        (Some(filename), extracted.text, options)
    } else {
        let body = read_body(payload, limit).await?;
        let request: AnalyzeRequest = serde_json::from_slice(&body)
            .map_err(|e| DocBridgeError::validation(format!("Invalid JSON body: {}", e)))?;

        if request.text.trim().is_empty() {
            return Err(DocBridgeError::validation("No text provided").into());
        }

        let options = SummaryOptions {
            style: parse_style(request.style.as_deref(), SummaryStyle::Analysis)?,
            instructions: request.prompt.filter(|p| !p.trim().is_empty()),
        };
        (None, request.text, options)
    };

    info!(
        "Analyze request - {} chars, style: {:?}, custom prompt: {}",
        text.chars().count(),
        options.style,
        options.instructions.is_some()
    );

    let summary = state.summarizer.summarize(&text, options).await?;

    Ok(HttpResponse::Ok().json(AnalyzeResponse {
        success: true,
        filename,
        summary: summary.text,
        tokens_used: summary.tokens_used,
        model: summary.model,
        chunks: summary.chunks,
    }))
}

/// Collect a raw body up to `limit` bytes
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut> {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk
            .map_err(|e| DocBridgeError::validation(format!("Failed to read request body: {}", e)))?;
        if body.len() + chunk.len() > limit {
            return Err(DocBridgeError::payload_too_large(format!(
                "Request body exceeds the {} byte limit",
                limit
            )));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}
