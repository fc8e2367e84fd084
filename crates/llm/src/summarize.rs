use async_trait::async_trait;
use docbridge_common::{DocBridgeError, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::chunking::chunk_text;
use crate::llm_trait::{LlmClient, SummaryProvider};
use crate::prompts;
use crate::types::{ChatRequest, Summary, SummaryOptions};

/// Summarizer for long text using map-reduce strategy
pub struct Summarizer {
    client: Arc<dyn LlmClient>,
    chunk_chars: usize,
}

impl Summarizer {
    /// Create new summarizer
    ///
    /// Inputs longer than `chunk_chars` characters are summarized chunk by
    /// chunk before the final pass.
    pub fn new(client: Arc<dyn LlmClient>, chunk_chars: usize) -> Self {
        Self { client, chunk_chars }
    }

    /// Summarize text, splitting it first when it is too long
    pub async fn summarize(&self, text: &str, options: &SummaryOptions) -> Result<Summary> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DocBridgeError::validation("No text provided"));
        }

        info!(
            "Starting summarization - Text length: {} chars, Style: {:?}",
            text.chars().count(),
            options.style
        );

        let chunks = chunk_text(text, self.chunk_chars, self.chunk_chars / 10);
        let mut tokens_used = 0;

        // Map phase only for long inputs
        let input = if chunks.len() == 1 {
            debug!("Text is short, using direct summarization");
            text.to_string()
        } else {
            info!("Split text into {} chunks", chunks.len());

            let mut chunk_summaries = Vec::with_capacity(chunks.len());
            for (i, chunk) in chunks.iter().enumerate() {
                debug!("Summarizing chunk {}/{}", i + 1, chunks.len());
                let request = ChatRequest::new(prompts::SUMMARIZER_SYSTEM, prompts::chunk_prompt(&chunk.text))
                    .with_limits(0.3, 500);
                let completion = self.client.complete(request).await?;
                tokens_used += completion.usage.total_tokens;
                chunk_summaries.push(completion.content);
            }

            let combined = chunk_summaries.join("\n\n");
            info!("Combined chunk summaries - Length: {} chars", combined.len());
            combined
        };

        // Final pass with the requested style
        let prompt = match options.instructions.as_deref().map(str::trim) {
            Some(instructions) if !instructions.is_empty() => prompts::custom_prompt(instructions, &input),
            _ => prompts::summary_prompt(options.style, &input),
        };
        let completion = self
            .client
            .complete(ChatRequest::new(prompts::system_message(options.style), prompt))
            .await?;
        tokens_used += completion.usage.total_tokens;

        Ok(Summary {
            text: completion.content,
            tokens_used,
            model: completion.model,
            chunks: chunks.len(),
        })
    }
}

#[async_trait]
impl SummaryProvider for Summarizer {
    async fn summarize(&self, text: &str, options: SummaryOptions) -> Result<Summary> {
        Summarizer::summarize(self, text, &options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatCompletion, SummaryStyle, Usage};
    use std::sync::Mutex;

    /// Records prompts and answers with a fixed reply
    struct RecordingClient {
        prompts: Mutex<Vec<(String, String)>>,
    }

    impl RecordingClient {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmClient for RecordingClient {
        async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion> {
            let system = request.messages[0].content.clone();
            let user = request.messages[1].content.clone();
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push((system, user));
            Ok(ChatCompletion {
                content: format!("summary #{}", prompts.len()),
                usage: Usage {
                    prompt_tokens: 8,
                    completion_tokens: 2,
                    total_tokens: 10,
                },
                model: "fake".to_string(),
            })
        }

        fn model_name(&self) -> &str {
            "fake"
        }
    }

    struct FailingClient;

    #[async_trait]
    impl LlmClient for FailingClient {
        async fn complete(&self, _request: ChatRequest) -> Result<ChatCompletion> {
            Err(DocBridgeError::upstream("service down"))
        }

        fn model_name(&self) -> &str {
            "down"
        }
    }

    #[tokio::test]
    async fn test_direct_summary() {
        let client = RecordingClient::new();
        let summarizer = Summarizer::new(client.clone(), 4000);

        let summary = summarizer
            .summarize("A short document.", &SummaryOptions::default())
            .await
            .unwrap();

        assert_eq!(summary.text, "summary #1");
        assert_eq!(summary.tokens_used, 10);
        assert_eq!(summary.chunks, 1);

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, prompts::SUMMARIZER_SYSTEM);
        assert!(calls[0].1.starts_with("Provide a brief, concise summary"));
        assert!(calls[0].1.ends_with("A short document."));
    }

    #[tokio::test]
    async fn test_long_text_map_reduce() {
        let client = RecordingClient::new();
        let summarizer = Summarizer::new(client.clone(), 100);
        let text = "This sentence is filler text. ".repeat(20);

        let summary = summarizer
            .summarize(&text, &SummaryOptions::with_style(SummaryStyle::BulletPoints))
            .await
            .unwrap();

        let calls = client.calls();
        assert!(summary.chunks > 1);
        assert_eq!(calls.len(), summary.chunks + 1);
        assert_eq!(summary.tokens_used, 10 * calls.len() as u32);

        // Final pass sees chunk summaries, not the raw text
        let (_, final_prompt) = calls.last().unwrap();
        assert!(final_prompt.starts_with("Summarize the following text as bullet points"));
        assert!(final_prompt.contains("summary #1"));
        assert!(!final_prompt.contains("filler"));
    }

    #[tokio::test]
    async fn test_custom_instructions() {
        let client = RecordingClient::new();
        let summarizer = Summarizer::new(client.clone(), 4000);
        let options = SummaryOptions {
            style: SummaryStyle::Analysis,
            instructions: Some("List the risks.".to_string()),
        };

        summarizer.summarize("Body text", &options).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls[0].0, prompts::ASSISTANT_SYSTEM);
        assert_eq!(calls[0].1, "List the risks.\n\nDocument content:\nBody text");
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let summarizer = Summarizer::new(RecordingClient::new(), 4000);
        let err = summarizer
            .summarize("   \n", &SummaryOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "ValidationError");
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let summarizer = Summarizer::new(Arc::new(FailingClient), 4000);
        let err = SummaryProvider::summarize(&summarizer, "Text", SummaryOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "UpstreamError");
    }
}
