use docbridge_common::{AppConfig, LanguageCatalog, Result};
use docbridge_llm::{AzureOpenAiClient, LlmClient, Summarizer, SummaryProvider};
use docbridge_translate::{AzureTranslator, TranslationProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Shared application state, read-only after startup
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Supported languages
    pub languages: Arc<LanguageCatalog>,

    /// Translation backend
    pub translator: Arc<dyn TranslationProvider>,

    /// Summarization backend
    pub summarizer: Arc<dyn SummaryProvider>,
}

impl AppState {
    /// Create state with the Azure-backed providers
    pub fn new(config: AppConfig) -> Result<Self> {
        let languages = Arc::new(config.language_catalog()?);
        let timeout = Duration::from_secs(config.upstream_timeout_secs);

        let translator = AzureTranslator::new(config.translator.clone(), languages.clone(), timeout)?;
        let llm = AzureOpenAiClient::new(config.openai.clone(), timeout)?;
        info!(
            "Providers ready - Translator: {}, Summarization model: {}",
            translator.name(),
            llm.model_name()
        );
        let summarizer = Summarizer::new(Arc::new(llm), config.summary_chunk_chars);

        Ok(Self {
            config,
            languages,
            translator: Arc::new(translator),
            summarizer: Arc::new(summarizer),
        })
    }

    /// Create state with caller-supplied providers
    pub fn with_providers(
        config: AppConfig,
        translator: Arc<dyn TranslationProvider>,
        summarizer: Arc<dyn SummaryProvider>,
    ) -> Result<Self> {
        let languages = Arc::new(config.language_catalog()?);
        info!("Providers ready - Translator: {}", translator.name());

        Ok(Self {
            config,
            languages,
            translator,
            summarizer,
        })
    }
}
