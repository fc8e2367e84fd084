use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    pub role: String,

    /// Message text
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Conversation (always one system + one user message here)
    pub messages: Vec<ChatMessage>,

    /// Temperature (0.0 - 2.0); client default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate; client default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_limits(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = Some(temperature);
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Chat completions response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub choices: Vec<ChatChoice>,

    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,

    #[serde(default)]
    pub completion_tokens: u32,

    #[serde(default)]
    pub total_tokens: u32,
}

/// Text produced by one completion call
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    pub content: String,
    pub usage: Usage,
    pub model: String,
}

/// Summary flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    /// Two or three sentences
    #[default]
    Concise,
    /// All key points
    Detailed,
    /// Bullet list
    BulletPoints,
    /// Analysis and summary of a whole document
    Analysis,
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concise" => Ok(Self::Concise),
            "detailed" => Ok(Self::Detailed),
            "bullet_points" | "bullets" => Ok(Self::BulletPoints),
            "analysis" | "analyze" => Ok(Self::Analysis),
            other => Err(format!(
                "Unknown summary style '{}'. Supported: concise, detailed, bullet_points, analysis",
                other
            )),
        }
    }
}

/// Reader an explanation is written for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    General,
    Technical,
    Beginner,
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "technical" => Ok(Self::Technical),
            "beginner" => Ok(Self::Beginner),
            other => Err(format!(
                "Unknown audience '{}'. Supported: general, technical, beginner",
                other
            )),
        }
    }
}

/// Directives for one summarization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryOptions {
    pub style: SummaryStyle,

    /// Custom instructions; replace the style prompt when present
    pub instructions: Option<String>,
}

impl SummaryOptions {
    pub fn with_style(style: SummaryStyle) -> Self {
        Self {
            style,
            instructions: None,
        }
    }
}

/// Summarization result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Summary text
    pub text: String,

    /// Total tokens consumed across all calls
    pub tokens_used: u32,

    /// Model or deployment used
    pub model: String,

    /// Number of chunks the input was split into
    pub chunks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_str() {
        assert_eq!("concise".parse::<SummaryStyle>().unwrap(), SummaryStyle::Concise);
        assert_eq!("Bullet_Points".parse::<SummaryStyle>().unwrap(), SummaryStyle::BulletPoints);
        assert_eq!("analysis".parse::<SummaryStyle>().unwrap(), SummaryStyle::Analysis);
        assert!("haiku".parse::<SummaryStyle>().is_err());
    }

    #[test]
    fn test_audience_from_str() {
        assert_eq!("Beginner".parse::<Audience>().unwrap(), Audience::Beginner);
        assert_eq!(Audience::default(), Audience::General);
        assert!("children".parse::<Audience>().is_err());
    }

    #[test]
    fn test_request_serialization_skips_unset_limits() {
        let value = serde_json::to_value(ChatRequest::new("sys", "hi")).unwrap();
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert!(value.get("temperature").is_none());
        assert!(value.get("max_tokens").is_none());
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "model": "gpt-4o-mini",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Short."}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 20, "completion_tokens": 3, "total_tokens": 23}
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("Short."));
        assert_eq!(response.usage.unwrap().total_tokens, 23);
    }
}
