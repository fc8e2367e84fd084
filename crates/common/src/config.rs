use crate::error::DocBridgeError;
use crate::languages::LanguageCatalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Azure AI Translator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Subscription key (checked for presence at call time)
    pub api_key: Option<String>,

    /// Resource region
    pub region: String,

    /// Service endpoint
    pub endpoint: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            region: "centralindia".to_string(),
            endpoint: "https://api.cognitive.microsofttranslator.com/".to_string(),
        }
    }
}

/// Azure OpenAI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key (checked for presence at call time)
    pub api_key: Option<String>,

    /// Resource endpoint, e.g. https://my-resource.openai.azure.com/
    pub endpoint: Option<String>,

    /// Deployment name
    pub deployment: String,

    /// REST API version
    pub api_version: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum completion tokens
    pub max_tokens: u32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            deployment: "gpt-4o-mini".to_string(),
            api_version: "2024-02-15-preview".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

/// DocBridge application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Write logs to a file in addition to the console
    pub log_to_file: bool,

    /// Directory holding index.html and assets
    pub static_dir: PathBuf,

    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,

    /// Maximum characters of extracted text sent for translation
    pub max_translate_chars: usize,

    /// Texts longer than this are summarized chunk by chunk
    pub summary_chunk_chars: usize,

    /// Timeout for calls to external services
    pub upstream_timeout_secs: u64,

    /// Restricts the built-in language table when set
    pub supported_languages: Option<Vec<String>>,

    /// Translator settings
    pub translator: TranslatorConfig,

    /// Azure OpenAI settings
    pub openai: OpenAiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            log_dir: PathBuf::from("./logs"),
            log_level: "info".to_string(),
            log_to_file: true,
            static_dir: PathBuf::from("./static"),
            max_upload_bytes: 16 * 1024 * 1024,
            max_translate_chars: 10_000,
            summary_chunk_chars: 4_000,
            upstream_timeout_secs: 30,
            supported_languages: None,
            translator: TranslatorConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, DocBridgeError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DocBridgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let config = Self {
            server_host: var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var(&var, "SERVER_PORT")?.unwrap_or(defaults.server_port),
            log_dir: var("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_to_file: parse_var(&var, "LOG_TO_FILE")?.unwrap_or(defaults.log_to_file),
            static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            max_upload_bytes: parse_var(&var, "MAX_UPLOAD_BYTES")?
                .unwrap_or(defaults.max_upload_bytes),
            max_translate_chars: parse_var(&var, "MAX_TRANSLATE_CHARS")?
                .unwrap_or(defaults.max_translate_chars),
            summary_chunk_chars: parse_var(&var, "SUMMARY_CHUNK_CHARS")?
                .unwrap_or(defaults.summary_chunk_chars),
            upstream_timeout_secs: parse_var(&var, "UPSTREAM_TIMEOUT_SECS")?
                .unwrap_or(defaults.upstream_timeout_secs),
            supported_languages: var("SUPPORTED_LANGUAGES").map(|list| {
                list.split(',')
                    .map(|code| code.trim().to_string())
                    .filter(|code| !code.is_empty())
                    .collect()
            }),
            translator: TranslatorConfig {
                api_key: var("AZURE_TRANSLATOR_KEY"),
                region: var("AZURE_TRANSLATOR_REGION").unwrap_or(defaults.translator.region),
                endpoint: var("AZURE_TRANSLATOR_ENDPOINT").unwrap_or(defaults.translator.endpoint),
            },
            openai: OpenAiConfig {
                api_key: var("AZURE_OPENAI_API_KEY"),
                endpoint: var("AZURE_OPENAI_ENDPOINT"),
                deployment: var("AZURE_OPENAI_DEPLOYMENT_NAME")
                    .unwrap_or(defaults.openai.deployment),
                api_version: var("AZURE_OPENAI_API_VERSION")
                    .unwrap_or(defaults.openai.api_version),
                temperature: parse_var(&var, "AZURE_OPENAI_TEMPERATURE")?
                    .unwrap_or(defaults.openai.temperature),
                max_tokens: parse_var(&var, "AZURE_OPENAI_MAX_TOKENS")?
                    .unwrap_or(defaults.openai.max_tokens),
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Get log file path
    pub fn get_log_path(&self, filename: &str) -> PathBuf {
        self.log_dir.join(filename)
    }

    /// Language catalog for this configuration
    pub fn language_catalog(&self) -> Result<LanguageCatalog, DocBridgeError> {
        match &self.supported_languages {
            Some(codes) => LanguageCatalog::from_codes(codes.as_slice()),
            None => Ok(LanguageCatalog::builtin()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DocBridgeError> {
        if !is_http_url(&self.translator.endpoint) {
            return Err(DocBridgeError::config(
                "AZURE_TRANSLATOR_ENDPOINT must start with http:// or https://",
            ));
        }

        if let Some(endpoint) = &self.openai.endpoint {
            if !is_http_url(endpoint) {
                return Err(DocBridgeError::config(
                    "AZURE_OPENAI_ENDPOINT must start with http:// or https://",
                ));
            }
        }

        if self.server_port == 0 {
            return Err(DocBridgeError::config("Server port cannot be 0"));
        }

        if self.max_upload_bytes == 0
            || self.max_translate_chars == 0
            || self.summary_chunk_chars == 0
            || self.upstream_timeout_secs == 0
        {
            return Err(DocBridgeError::config("Size and timeout limits must be positive"));
        }

        self.language_catalog()?;

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn parse_var<T, F>(var: &F, key: &str) -> Result<Option<T>, DocBridgeError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| DocBridgeError::config(format!("Invalid value for {}: '{}'", key, raw))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.openai.deployment, "gpt-4o-mini");
        assert!(config.translator.api_key.is_none());
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.translator.endpoint = "ftp://example.com".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.max_upload_bytes = 0;
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_from_lookup_reads_credentials() {
        let config = AppConfig::from_lookup(lookup(&[
            ("AZURE_TRANSLATOR_KEY", "tkey"),
            ("AZURE_TRANSLATOR_REGION", "westeurope"),
            ("AZURE_OPENAI_API_KEY", "okey"),
            ("AZURE_OPENAI_ENDPOINT", "https://example.openai.azure.com/"),
            ("SERVER_PORT", "8081"),
            ("LOG_TO_FILE", "false"),
        ]))
        .unwrap();

        assert_eq!(config.translator.api_key.as_deref(), Some("tkey"));
        assert_eq!(config.translator.region, "westeurope");
        assert_eq!(config.openai.api_key.as_deref(), Some("okey"));
        assert_eq!(config.server_port, 8081);
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_from_lookup_blank_values_are_absent() {
        let config = AppConfig::from_lookup(lookup(&[("AZURE_TRANSLATOR_KEY", "  ")])).unwrap();
        assert!(config.translator.api_key.is_none());
    }

    #[test]
    fn test_from_lookup_rejects_bad_number() {
        let result = AppConfig::from_lookup(lookup(&[("SERVER_PORT", "eighty")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_supported_languages_restriction() {
        let config = AppConfig::from_lookup(lookup(&[("SUPPORTED_LANGUAGES", "en, es ,fr")])).unwrap();
        let catalog = config.language_catalog().unwrap();
        assert_eq!(catalog.len(), 3);

        let result = AppConfig::from_lookup(lookup(&[("SUPPORTED_LANGUAGES", "en,zz")]));
        assert!(result.is_err());
    }
}
