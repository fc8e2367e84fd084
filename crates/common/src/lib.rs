pub mod config;
pub mod error;
pub mod languages;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, OpenAiConfig, TranslatorConfig};
pub use error::DocBridgeError;
pub use languages::LanguageCatalog;
pub type Result<T> = std::result::Result<T, DocBridgeError>;
