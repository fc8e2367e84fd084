use async_trait::async_trait;
use docbridge_common::{DocBridgeError, OpenAiConfig, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::llm_trait::LlmClient;
use crate::types::{ChatCompletion, ChatRequest, ChatResponse};

/// Error body returned by Azure OpenAI
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Azure OpenAI chat completions client
#[derive(Debug, Clone)]
pub struct AzureOpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

impl AzureOpenAiClient {
    /// Create new Azure OpenAI client
    pub fn new(config: OpenAiConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        if config.api_key.is_none() || config.endpoint.is_none() {
            warn!("Azure OpenAI credentials are incomplete; summarization will fail until they are set");
        }

        info!("Azure OpenAI client initialized: deployment={}", config.deployment);
        Ok(Self { config, client })
    }

    fn completions_url(&self, endpoint: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            endpoint.trim_end_matches('/'),
            self.config.deployment
        )
    }

    /// Single attempt; no retries
    async fn try_complete(&self, api_key: &str, endpoint: &str, request: &ChatRequest) -> Result<ChatCompletion> {
        let mut request = request.clone();
        request.temperature.get_or_insert(self.config.temperature);
        request.max_tokens.get_or_insert(self.config.max_tokens);

        debug!(
            "Sending chat request - Deployment: {}, Prompt length: {}",
            self.config.deployment,
            request.messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        let response = self
            .client
            .post(self.completions_url(endpoint))
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DocBridgeError::upstream(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| format!(" - {}", b.error.message))
                .unwrap_or_default();
            return Err(DocBridgeError::upstream(format!(
                "OpenAI API Error: HTTP {}{}",
                status.as_u16(),
                detail
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| DocBridgeError::upstream(format!("Failed to parse OpenAI response: {}", e)))?;

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DocBridgeError::upstream("OpenAI returned no choices"))?;

        if choice.finish_reason.as_deref() == Some("content_filter") {
            return Err(DocBridgeError::upstream("Response blocked by the content filter"));
        }

        let content = choice
            .message
            .content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| DocBridgeError::upstream("Empty response from OpenAI"))?;

        let usage = result.usage.unwrap_or_default();
        debug!("Received completion - Length: {}, Tokens: {}", content.len(), usage.total_tokens);

        Ok(ChatCompletion {
            content,
            usage,
            model: result.model.unwrap_or_else(|| self.config.deployment.clone()),
        })
    }
}

#[async_trait]
impl LlmClient for AzureOpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| DocBridgeError::not_configured("Missing AZURE_OPENAI_API_KEY"))?;
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or_else(|| DocBridgeError::not_configured("Missing AZURE_OPENAI_ENDPOINT"))?;

        self.try_complete(api_key, endpoint, &request).await
    }

    fn model_name(&self) -> &str {
        &self.config.deployment
    }
}
