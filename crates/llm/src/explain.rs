use docbridge_common::{DocBridgeError, Result};
use tracing::info;

use crate::llm_trait::LlmClient;
use crate::prompts;
use crate::types::{Audience, ChatCompletion, ChatRequest};

/// Explain text for the given audience in one completion
pub async fn explain(client: &dyn LlmClient, text: &str, audience: Audience) -> Result<ChatCompletion> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DocBridgeError::validation("No text provided"));
    }

    info!(
        "Explaining text - Length: {} chars, Audience: {:?}, Model: {}",
        text.chars().count(),
        audience,
        client.model_name()
    );

    client
        .complete(ChatRequest::new(
            prompts::EXPLAINER_SYSTEM,
            prompts::explain_prompt(audience, text),
        ))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Usage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct EchoClient {
        last: Mutex<Option<ChatRequest>>,
    }

    #[async_trait]
    impl LlmClient for EchoClient {
        async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion> {
            let content = request.messages[1].content.clone();
            *self.last.lock().unwrap() = Some(request);
            Ok(ChatCompletion {
                content,
                usage: Usage::default(),
                model: "echo".to_string(),
            })
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_explain_uses_teaching_prompt() {
        let client = EchoClient::default();
        let completion = explain(&client, "  Photosynthesis  ", Audience::General)
            .await
            .unwrap();

        assert_eq!(
            completion.content,
            "Explain the following in simple, everyday language:\n\nPhotosynthesis"
        );
        let request = client.last.lock().unwrap().clone().unwrap();
        assert_eq!(request.messages[0].content, prompts::EXPLAINER_SYSTEM);
    }

    #[tokio::test]
    async fn test_explain_rejects_blank_text() {
        let err = explain(&EchoClient::default(), " ", Audience::Technical)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "ValidationError");
    }
}
