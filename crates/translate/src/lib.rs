//! DocBridge Translation Client
//!
//! Provider abstraction and Azure AI Translator implementation

mod azure;
mod provider;
mod types;

pub use azure::AzureTranslator;
pub use provider::TranslationProvider;
pub use types::{explicit_source, TranslationRequest, TranslationResult, AUTO_DETECT};
