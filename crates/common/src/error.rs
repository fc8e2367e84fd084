/// DocBridge error types
#[derive(Debug, thiserror::Error)]
pub enum DocBridgeError {
    /// Document type is not one of PDF/DOCX/TXT
    #[error("Unsupported file type: {0}. Supported: pdf, docx, txt")]
    UnsupportedFormat(String),

    /// Document container could not be read
    #[error("Failed to extract text: {0}")]
    ExtractionFailure(String),

    /// Plain text is not valid UTF-8
    #[error("Invalid text encoding: {0}")]
    Encoding(String),

    /// Language code not in the supported set
    #[error("Unsupported language: {0}")]
    InvalidLanguage(String),

    /// Missing or malformed request field
    #[error("{0}")]
    Validation(String),

    /// Request body exceeds the configured limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// External translation/summarization service failed
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// Credentials for an external service are missing
    #[error("Service not configured: {0}")]
    NotConfigured(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DocBridgeError {
    /// Create unsupported format error
    pub fn unsupported_format<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Create extraction failure
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        Self::ExtractionFailure(msg.into())
    }

    /// Create encoding error
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Self::Encoding(msg.into())
    }

    /// Create invalid language error
    pub fn invalid_language<S: Into<String>>(msg: S) -> Self {
        Self::InvalidLanguage(msg.into())
    }

    /// Create validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create payload too large error
    pub fn payload_too_large<S: Into<String>>(msg: S) -> Self {
        Self::PayloadTooLarge(msg.into())
    }

    /// Create upstream error
    pub fn upstream<S: Into<String>>(msg: S) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create not configured error
    pub fn not_configured<S: Into<String>>(msg: S) -> Self {
        Self::NotConfigured(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

// HTTP response mapping (used by the server's ResponseError impl)
impl DocBridgeError {
    /// Stable error kind reported to API clients
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat(_) => "UnsupportedFormat",
            Self::ExtractionFailure(_) => "ExtractionFailure",
            Self::Encoding(_) => "EncodingError",
            Self::InvalidLanguage(_) => "InvalidLanguage",
            Self::Validation(_) => "ValidationError",
            Self::PayloadTooLarge(_) => "PayloadTooLarge",
            Self::Upstream(_) => "UpstreamError",
            Self::NotConfigured(_) => "NotConfigured",
            Self::Config(_) => "ConfigurationError",
            Self::Json(_) => "ValidationError",
            Self::Io(_) | Self::Other(_) => "InternalError",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UnsupportedFormat(_) => 400,
            Self::ExtractionFailure(_) => 400,
            Self::Encoding(_) => 400,
            Self::InvalidLanguage(_) => 400,
            Self::Validation(_) => 400,
            Self::PayloadTooLarge(_) => 413,
            Self::Upstream(_) => 502,
            Self::NotConfigured(_) => 503,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_400() {
        assert_eq!(DocBridgeError::unsupported_format("xyz").status_code(), 400);
        assert_eq!(DocBridgeError::extraction("bad pdf").status_code(), 400);
        assert_eq!(DocBridgeError::encoding("bad utf-8").status_code(), 400);
        assert_eq!(DocBridgeError::invalid_language("xx").status_code(), 400);
        assert_eq!(DocBridgeError::validation("No text provided").status_code(), 400);
    }

    #[test]
    fn test_upstream_errors_are_5xx() {
        assert_eq!(DocBridgeError::upstream("timeout").status_code(), 502);
        assert_eq!(DocBridgeError::not_configured("AZURE_TRANSLATOR_KEY").status_code(), 503);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(DocBridgeError::unsupported_format("xyz").kind(), "UnsupportedFormat");
        assert_eq!(DocBridgeError::encoding("x").kind(), "EncodingError");
        assert_eq!(DocBridgeError::upstream("x").kind(), "UpstreamError");
        assert_eq!(DocBridgeError::validation("x").kind(), "ValidationError");
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = DocBridgeError::unsupported_format("xyz");
        assert_eq!(err.to_string(), "Unsupported file type: xyz. Supported: pdf, docx, txt");
    }
}
