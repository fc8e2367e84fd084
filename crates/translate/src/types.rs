use serde::{Deserialize, Serialize};

/// Sentinel accepted in place of a source language to request auto-detection
pub const AUTO_DETECT: &str = "auto";

/// One translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,

    /// Target language code
    pub target_lang: String,

    /// Source language code; `None` lets the service detect it
    pub source_lang: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: target_lang.into(),
            source_lang: None,
        }
    }

    /// Set the source language; empty or `auto` means auto-detect
    pub fn with_source(mut self, source_lang: Option<String>) -> Self {
        self.source_lang = explicit_source(source_lang.as_deref()).map(str::to_string);
        self
    }
}

/// Trimmed source language code, or `None` when auto-detection is requested
pub fn explicit_source(code: Option<&str>) -> Option<&str> {
    code.map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(AUTO_DETECT))
}

/// Translation outcome
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TranslationResult {
    /// Translated text (never empty)
    pub translated_text: String,

    /// Source language as requested
    pub source_lang: Option<String>,

    /// Source language detected by the service
    pub detected_language: Option<String>,

    /// Target language
    pub target_lang: String,
}

impl TranslationResult {
    /// Language the text was translated from: the detected one, else the requested one
    pub fn source_language(&self) -> Option<&str> {
        self.detected_language
            .as_deref()
            .or(self.source_lang.as_deref())
    }
}

/// Request body element for Translator v3
#[derive(Debug, Serialize)]
pub(crate) struct TranslateItem<'a> {
    #[serde(rename = "Text")]
    pub text: &'a str,
}

/// Response element for Translator v3
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslateResponseItem {
    #[serde(default)]
    pub detected_language: Option<DetectedLanguage>,

    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetectedLanguage {
    pub language: String,

    #[serde(default)]
    #[allow(dead_code)]
    pub score: f32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Translation {
    pub text: String,

    #[allow(dead_code)]
    pub to: String,
}

/// Error body returned by Azure Cognitive Services
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub code: serde_json::Value,

    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_source_auto_detect() {
        let req = TranslationRequest::new("Hello", "es").with_source(Some("auto".to_string()));
        assert_eq!(req.source_lang, None);

        let req = TranslationRequest::new("Hello", "es").with_source(Some("  ".to_string()));
        assert_eq!(req.source_lang, None);

        let req = TranslationRequest::new("Hello", "es").with_source(Some("en".to_string()));
        assert_eq!(req.source_lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_explicit_source() {
        assert_eq!(explicit_source(None), None);
        assert_eq!(explicit_source(Some("AUTO")), None);
        assert_eq!(explicit_source(Some(" fr ")), Some("fr"));
    }

    #[test]
    fn test_source_language_prefers_detected() {
        let result = TranslationResult {
            translated_text: "Hola".to_string(),
            source_lang: Some("en".to_string()),
            detected_language: Some("fr".to_string()),
            target_lang: "es".to_string(),
        };
        assert_eq!(result.source_language(), Some("fr"));
    }

    #[test]
    fn test_parse_response_with_detection() {
        let body = r#"[{"detectedLanguage":{"language":"en","score":1.0},"translations":[{"text":"Hola mundo","to":"es"}]}]"#;
        let items: Vec<TranslateResponseItem> = serde_json::from_str(body).unwrap();
        assert_eq!(items[0].detected_language.as_ref().unwrap().language, "en");
        assert_eq!(items[0].translations[0].text, "Hola mundo");
    }
}
