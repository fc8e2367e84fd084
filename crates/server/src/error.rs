use actix_web::error::{BlockingError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use docbridge_common::DocBridgeError;
use std::fmt;
use tracing::{error, warn};

use crate::types::ErrorResponse;

/// HTTP wrapper around `DocBridgeError`
#[derive(Debug)]
pub struct ApiError(pub DocBridgeError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DocBridgeError> for ApiError {
    fn from(err: DocBridgeError) -> Self {
        Self(err)
    }
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        Self(DocBridgeError::Other(anyhow::anyhow!("Blocking task failed: {}", err)))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed ({}): {}", self.0.kind(), self.0);
        } else {
            warn!("Request rejected ({}): {}", self.0.kind(), self.0);
        }

        HttpResponse::build(status).json(ErrorResponse {
            success: false,
            kind: self.0.kind().to_string(),
            error: self.0.to_string(),
        })
    }
}

/// JSON extractor config that reports failures in the API error shape
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let error = match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    DocBridgeError::payload_too_large(format!("Request body too large: {}", err))
                }
                JsonPayloadError::ContentType => {
                    DocBridgeError::validation("Content type must be application/json")
                }
                _ => DocBridgeError::validation(format!("Invalid JSON body: {}", err)),
            };
            ApiError(error).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DocBridgeError::unsupported_format("xyz"), 400),
            (DocBridgeError::payload_too_large("big"), 413),
            (DocBridgeError::upstream("down"), 502),
            (DocBridgeError::not_configured("key"), 503),
            (DocBridgeError::config("bad"), 500),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError(err).status_code().as_u16(), status);
        }
    }
}
