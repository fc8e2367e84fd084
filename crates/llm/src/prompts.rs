//! Prompt templates for summarization and explanation

use crate::types::{Audience, SummaryStyle};

/// System message for summaries
pub const SUMMARIZER_SYSTEM: &str =
    "You are an expert summarizer. Create clear and accurate summaries.";

/// System message for free-form analysis
pub const ASSISTANT_SYSTEM: &str =
    "You are a helpful AI assistant. Provide clear, concise, and accurate responses.";

/// Instruction line for each style
pub fn style_instruction(style: SummaryStyle) -> &'static str {
    match style {
        SummaryStyle::Concise => {
            "Provide a brief, concise summary of the following text in 2-3 sentences:"
        }
        SummaryStyle::Detailed => {
            "Provide a comprehensive summary of the following text, covering all key points:"
        }
        SummaryStyle::BulletPoints => {
            "Summarize the following text as bullet points highlighting the key information:"
        }
        SummaryStyle::Analysis => "Analyze and summarize the following document:",
    }
}

/// System message matching the style
pub fn system_message(style: SummaryStyle) -> &'static str {
    match style {
        SummaryStyle::Analysis => ASSISTANT_SYSTEM,
        _ => SUMMARIZER_SYSTEM,
    }
}

/// Prompt for a styled summary
pub fn summary_prompt(style: SummaryStyle, text: &str) -> String {
    format!("{}\n\n{}", style_instruction(style), text)
}

/// Prompt for caller-supplied instructions
pub fn custom_prompt(instructions: &str, text: &str) -> String {
    format!("{}\n\nDocument content:\n{}", instructions.trim(), text)
}

/// Prompt for one chunk of a long document (map phase)
pub fn chunk_prompt(chunk: &str) -> String {
    format!(
        "The following is one part of a longer document. Summarize it concisely, keeping every important fact, name and number:\n\n{}",
        chunk
    )
}

/// System message for explanations
pub const EXPLAINER_SYSTEM: &str =
    "You are a skilled teacher who explains complex topics clearly.";

/// Prompt explaining text for an audience
pub fn explain_prompt(audience: Audience, text: &str) -> String {
    let instruction = match audience {
        Audience::General => "Explain the following in simple, everyday language:",
        Audience::Technical => "Provide a technical explanation of the following:",
        Audience::Beginner => "Explain the following as if teaching a complete beginner:",
    };
    format!("{}\n\n{}", instruction, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_includes_text() {
        let prompt = summary_prompt(SummaryStyle::Concise, "Some text.");
        assert!(prompt.starts_with("Provide a brief, concise summary"));
        assert!(prompt.ends_with("Some text."));
    }

    #[test]
    fn test_custom_prompt_layout() {
        let prompt = custom_prompt("  List the action items.  ", "Body");
        assert_eq!(prompt, "List the action items.\n\nDocument content:\nBody");
    }

    #[test]
    fn test_explain_prompt_per_audience() {
        let prompt = explain_prompt(Audience::Beginner, "Entropy");
        assert_eq!(prompt, "Explain the following as if teaching a complete beginner:\n\nEntropy");
        assert!(explain_prompt(Audience::Technical, "x").starts_with("Provide a technical explanation"));
    }

    #[test]
    fn test_analysis_uses_assistant_system() {
        assert_eq!(system_message(SummaryStyle::Analysis), ASSISTANT_SYSTEM);
        assert_eq!(system_message(SummaryStyle::Detailed), SUMMARIZER_SYSTEM);
    }
}
