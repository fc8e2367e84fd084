use async_trait::async_trait;
use docbridge_common::Result;

use crate::types::{TranslationRequest, TranslationResult};

/// Common trait for translation backends
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate text into the requested language
    async fn translate(&self, request: TranslationRequest) -> Result<TranslationResult>;

    /// Backend name for logs
    fn name(&self) -> &str;
}
