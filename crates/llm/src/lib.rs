//! DocBridge LLM Integration
//!
//! Azure OpenAI chat client, text summarization and explanation

mod chunking;
mod client;
mod explain;
mod llm_trait;
mod prompts;
mod summarize;
mod types;

pub use chunking::{chunk_text, TextChunk};
pub use client::AzureOpenAiClient;
pub use explain::explain;
pub use llm_trait::{LlmClient, SummaryProvider};
pub use prompts::{custom_prompt, explain_prompt, summary_prompt, ASSISTANT_SYSTEM, EXPLAINER_SYSTEM, SUMMARIZER_SYSTEM};
pub use summarize::Summarizer;
pub use types::{
    Audience, ChatCompletion, ChatMessage, ChatRequest, ChatResponse, Summary, SummaryOptions, SummaryStyle, Usage,
};
