use actix_multipart::Multipart;
use docbridge_common::{DocBridgeError, Result};
use docbridge_extract::UploadedDocument;
use futures_util::StreamExt;
use std::collections::HashMap;
use tracing::debug;

/// Name of the form field carrying the document
pub const FILE_FIELD: &str = "file";

/// Multipart form read fully into memory
#[derive(Debug, Default)]
pub struct UploadForm {
    /// Text fields by name
    pub fields: HashMap<String, String>,

    /// The uploaded document, when a file was selected
    pub file: Option<UploadedDocument>,
}

impl UploadForm {
    /// Non-empty, trimmed text field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// First non-empty field among the given names
    pub fn field_any(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.field(name))
    }

    /// Checkbox-style flag: `true`, `1`, `on` or `yes`
    pub fn flag(&self, name: &str) -> bool {
        self.field(name)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "on" | "yes"))
            .unwrap_or(false)
    }

    /// The document, or a validation error
    pub fn take_file(&mut self) -> Result<UploadedDocument> {
        self.file
            .take()
            .ok_or_else(|| DocBridgeError::validation("No file provided"))
    }
}

/// Read a multipart body, rejecting it once it exceeds `limit` bytes
pub async fn read_form(mut payload: Multipart, limit: usize) -> Result<UploadForm> {
    let mut form = UploadForm::default();
    let mut total = 0usize;

    while let Some(field) = payload.next().await {
        let mut field =
            field.map_err(|e| DocBridgeError::validation(format!("Invalid multipart body: {}", e)))?;

        let content_disposition = field.content_disposition();
        let name = content_disposition.get_name().unwrap_or_default().to_string();
        let filename = content_disposition.get_filename().map(str::to_string);
        let content_type = field.content_type().map(|m| m.essence_str().to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| DocBridgeError::validation(format!("Failed to read upload: {}", e)))?;
            total += chunk.len();
            if total > limit {
                return Err(DocBridgeError::payload_too_large(format!(
                    "Upload exceeds the {} byte limit",
                    limit
                )));
            }
            data.extend_from_slice(&chunk);
        }

        if name == FILE_FIELD {
            // Browsers send an empty filename when nothing was selected
            match filename {
                Some(filename) if !filename.is_empty() => {
                    debug!("Received file '{}' ({} bytes)", filename, data.len());
                    form.file = Some(UploadedDocument::new(filename, content_type, data));
                }
                _ => {}
            }
        } else {
            let value = String::from_utf8(data).map_err(|_| {
                DocBridgeError::validation(format!("Form field '{}' is not valid UTF-8", name))
            })?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}
