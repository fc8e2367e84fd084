use crate::types::{ChatCompletion, ChatRequest, Summary, SummaryOptions};
use async_trait::async_trait;
use docbridge_common::Result;

/// Common trait for chat-completion LLM clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run one stateless completion
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion>;

    /// Model or deployment name
    fn model_name(&self) -> &str;
}

/// Capability the HTTP layer depends on for summaries
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Summarize text according to the options
    async fn summarize(&self, text: &str, options: SummaryOptions) -> Result<Summary>;
}
