use async_trait::async_trait;
use docbridge_common::{DocBridgeError, LanguageCatalog, Result, TranslatorConfig};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::provider::TranslationProvider;
use crate::types::{ApiErrorBody, TranslateItem, TranslateResponseItem, TranslationRequest, TranslationResult};

const API_VERSION: &str = "3.0";

/// Azure AI Translator (v3) client
#[derive(Debug, Clone)]
pub struct AzureTranslator {
    config: TranslatorConfig,
    languages: Arc<LanguageCatalog>,
    client: Client,
}

impl AzureTranslator {
    /// Create new translator client
    pub fn new(config: TranslatorConfig, languages: Arc<LanguageCatalog>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        if config.api_key.is_none() {
            warn!("AZURE_TRANSLATOR_KEY is not set; /translate and /upload will fail until it is");
        }

        info!("Azure Translator client initialized: {} ({})", config.endpoint, config.region);
        Ok(Self {
            config,
            languages,
            client,
        })
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.config.endpoint.trim_end_matches('/'))
    }

    /// Single attempt; failures are reported, never retried
    async fn try_translate(
        &self,
        api_key: &str,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<TranslateResponseItem> {
        let mut query = vec![("api-version", API_VERSION), ("to", target)];
        if let Some(source) = source {
            query.push(("from", source));
        }

        let trace_id = Uuid::new_v4().to_string();
        debug!(
            "Sending translate request - To: {}, From: {:?}, Text length: {}, Trace: {}",
            target,
            source,
            text.len(),
            trace_id
        );

        let response = self
            .client
            .post(self.translate_url())
            .query(&query)
            .header("Ocp-Apim-Subscription-Key", api_key)
            .header("Ocp-Apim-Subscription-Region", &self.config.region)
            .header("X-ClientTraceId", trace_id)
            .json(&[TranslateItem { text }])
            .send()
            .await
            .map_err(|e| DocBridgeError::upstream(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| format!(" - ({}) {}", b.error.code, b.error.message))
                .unwrap_or_default();
            return Err(DocBridgeError::upstream(format!(
                "HTTP Error: {}{}",
                status.as_u16(),
                detail
            )));
        }

        let items: Vec<TranslateResponseItem> = response
            .json()
            .await
            .map_err(|e| DocBridgeError::upstream(format!("Failed to parse Translator response: {}", e)))?;

        items
            .into_iter()
            .next()
            .ok_or_else(|| DocBridgeError::upstream("Empty response from Translator API"))
    }
}

#[async_trait]
impl TranslationProvider for AzureTranslator {
    async fn translate(&self, request: TranslationRequest) -> Result<TranslationResult> {
        let target = self.languages.resolve(&request.target_lang)?.to_string();
        let source = match request.source_lang.as_deref() {
            Some(code) => Some(self.languages.resolve(code)?.to_string()),
            None => None,
        };

        if request.text.trim().is_empty() {
            return Err(DocBridgeError::validation("No text provided"));
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| DocBridgeError::not_configured("Missing AZURE_TRANSLATOR_KEY"))?;

        let item = self
            .try_translate(api_key, &request.text, &target, source.as_deref())
            .await?;

        let translated_text = item
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| DocBridgeError::upstream("Translator returned no translation"))?;

        let detected_language = item.detected_language.map(|d| d.language);
        debug!(
            "Translation complete - Detected: {:?}, Length: {}",
            detected_language,
            translated_text.len()
        );

        Ok(TranslationResult {
            translated_text,
            source_lang: source,
            detected_language,
            target_lang: target,
        })
    }

    fn name(&self) -> &str {
        "azure-translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

    /// Starts an in-process stand-in for the Translator endpoint
    fn spawn_stub<F>(handler: F) -> String
    where
        F: Fn(HttpRequest, web::Json<serde_json::Value>) -> HttpResponse + Clone + Send + 'static,
    {
        let server = HttpServer::new(move || {
            let handler = handler.clone();
            App::new().route(
                "/translate",
                web::post().to(move |req: HttpRequest, body: web::Json<serde_json::Value>| {
                    let response = handler(req, body);
                    async move { response }
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/", addr)
    }

    fn translator(endpoint: String, api_key: Option<&str>) -> AzureTranslator {
        let config = TranslatorConfig {
            api_key: api_key.map(str::to_string),
            region: "westeurope".to_string(),
            endpoint,
        };
        AzureTranslator::new(config, Arc::new(LanguageCatalog::builtin()), Duration::from_secs(5)).unwrap()
    }

    #[actix_web::test]
    async fn test_translate_success() {
        let endpoint = spawn_stub(|req, body| {
            let query = req.query_string().to_string();
            assert!(query.contains("api-version=3.0"));
            assert!(query.contains("to=es"));
            assert!(!query.contains("from="));
            assert_eq!(req.headers().get("Ocp-Apim-Subscription-Key").unwrap(), "secret");
            assert_eq!(req.headers().get("Ocp-Apim-Subscription-Region").unwrap(), "westeurope");
            assert!(req.headers().contains_key("X-ClientTraceId"));
            assert_eq!(body[0]["Text"], "Hello world");

            HttpResponse::Ok().json(serde_json::json!([{
                "detectedLanguage": {"language": "en", "score": 1.0},
                "translations": [{"text": "Hola mundo", "to": "es"}]
            }]))
        });

        let result = translator(endpoint, Some("secret"))
            .translate(TranslationRequest::new("Hello world", "ES"))
            .await
            .unwrap();

        assert_eq!(result.translated_text, "Hola mundo");
        assert_eq!(result.detected_language.as_deref(), Some("en"));
        assert_eq!(result.target_lang, "es");
        assert_ne!(result.translated_text, "Hello world");
    }

    #[actix_web::test]
    async fn test_translate_sends_source_language() {
        let endpoint = spawn_stub(|req, _body| {
            assert!(req.query_string().contains("from=en"));
            HttpResponse::Ok().json(serde_json::json!([{
                "translations": [{"text": "Bonjour", "to": "fr"}]
            }]))
        });

        let request = TranslationRequest::new("Hello", "fr").with_source(Some("en".to_string()));
        let result = translator(endpoint, Some("secret")).translate(request).await.unwrap();

        assert_eq!(result.translated_text, "Bonjour");
        assert_eq!(result.source_language(), Some("en"));
    }

    #[actix_web::test]
    async fn test_http_error_becomes_upstream_error() {
        let endpoint = spawn_stub(|_req, _body| {
            HttpResponse::Unauthorized().json(serde_json::json!({
                "error": {"code": 401000, "message": "Access denied due to invalid subscription key."}
            }))
        });

        let err = translator(endpoint, Some("wrong"))
            .translate(TranslationRequest::new("Hello", "es"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "UpstreamError");
        assert!(err.to_string().contains("HTTP Error: 401"));
        assert!(err.to_string().contains("invalid subscription key"));
    }

    #[actix_web::test]
    async fn test_empty_translation_is_not_passed_through() {
        let endpoint = spawn_stub(|_req, _body| {
            HttpResponse::Ok().json(serde_json::json!([{"translations": []}]))
        });

        let err = translator(endpoint, Some("secret"))
            .translate(TranslationRequest::new("Hello", "es"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "UpstreamError");
    }

    #[test]
    fn test_provider_name() {
        let translator = translator("http://127.0.0.1:9/".to_string(), None);
        assert_eq!(translator.name(), "azure-translator");
    }

    #[actix_web::test]
    async fn test_unreachable_service() {
        // Nothing listens on port 9 locally
        let err = translator("http://127.0.0.1:9/".to_string(), Some("secret"))
            .translate(TranslationRequest::new("Hello", "es"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "UpstreamError");
        assert!(err.to_string().contains("Request failed"));
    }

    #[actix_web::test]
    async fn test_invalid_language_checked_before_network() {
        let client = translator("http://127.0.0.1:9/".to_string(), Some("secret"));

        let err = client
            .translate(TranslationRequest::new("Hello", "xx"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "InvalidLanguage");

        let request = TranslationRequest::new("Hello", "es").with_source(Some("qq".to_string()));
        let err = client.translate(request).await.unwrap_err();
        assert_eq!(err.kind(), "InvalidLanguage");
    }

    #[actix_web::test]
    async fn test_missing_key() {
        let err = translator("http://127.0.0.1:9/".to_string(), None)
            .translate(TranslationRequest::new("Hello", "es"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "NotConfigured");
    }
}
