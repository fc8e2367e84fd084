use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error body for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub kind: String,
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Supported languages response
#[derive(Debug, Serialize)]
pub struct LanguagesResponse<'a> {
    pub success: bool,
    pub languages: &'a BTreeMap<String, String>,
    pub count: usize,
}

/// Plain text translation request
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default, alias = "target_language")]
    pub target_lang: Option<String>,

    #[serde(default, alias = "source_language")]
    pub source_lang: Option<String>,

    /// Summarize before translating
    #[serde(default)]
    pub summarize: bool,

    #[serde(default)]
    pub summary_style: Option<String>,
}

/// Plain text translation response
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub original_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub detected_language: Option<String>,
    pub translated_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

/// Document upload + translation response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
    pub file_type: String,
    pub extracted_text: String,
    pub extracted_text_length: usize,

    /// Preview of the text that was translated
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub detected_language: Option<String>,
    pub text_truncated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

/// JSON form of an analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,

    /// Custom instructions
    #[serde(default, alias = "instructions")]
    pub prompt: Option<String>,

    #[serde(default, alias = "summary_style")]
    pub style: Option<String>,
}

/// Analysis response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub summary: String,
    pub tokens_used: u32,
    pub model: String,
    pub chunks: usize,
}
