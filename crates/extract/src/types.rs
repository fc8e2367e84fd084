use docbridge_common::{DocBridgeError, Result};
use serde::Serialize;
use std::path::Path;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Supported document containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Match a file extension (without dot, case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" | "text" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Match a declared MIME type, ignoring parameters such as charset
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "application/pdf" => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            "text/plain" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Determine the kind from the filename, or from the MIME type when the
    /// filename carries no extension
    pub fn detect(filename: &str, content_type: Option<&str>) -> Result<Self> {
        match Path::new(filename).extension().and_then(|e| e.to_str()) {
            Some(ext) => Self::from_extension(ext)
                .ok_or_else(|| DocBridgeError::unsupported_format(ext.to_ascii_lowercase())),
            None => content_type
                .and_then(Self::from_mime)
                .ok_or_else(|| {
                    DocBridgeError::unsupported_format(content_type.unwrap_or("unknown").to_string())
                }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uploaded file held in memory for one request
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Original filename as sent by the client
    pub filename: String,

    /// Declared content type
    pub content_type: Option<String>,

    /// Raw bytes
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            bytes,
        }
    }

    /// Resolve the document kind
    pub fn kind(&self) -> Result<DocumentKind> {
        DocumentKind::detect(&self.filename, self.content_type.as_deref())
    }
}

/// Plain text derived from a document
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedText {
    /// Extracted text
    pub text: String,

    /// Source container
    pub kind: DocumentKind,

    /// Pages that produced text (PDF only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,

    /// Non-empty paragraphs (DOCX only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_count: Option<usize>,
}

impl ExtractedText {
    pub fn new(text: String, kind: DocumentKind) -> Self {
        Self {
            text,
            kind,
            page_count: None,
            paragraph_count: None,
        }
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when there is nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
