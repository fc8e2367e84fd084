use anyhow::{bail, Context, Result};
use clap::Args;
use docbridge_extract::UploadedDocument;
use docbridge_llm::{SummaryOptions, SummaryProvider, SummaryStyle};
use docbridge_translate::{TranslationProvider, TranslationRequest};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Text given inline or read from a document
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to process
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// PDF, DOCX or TXT file to process
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Inline text, or the text extracted from `--file`
    pub fn load(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();

                let extracted = docbridge_extract::extract(&UploadedDocument::new(filename, None, bytes))?;
                Ok(extracted.text)
            }
            (None, None) => bail!("Provide --text or --file"),
        }
    }
}

/// Result of summarize-then-translate
#[derive(Debug, Serialize)]
pub struct PipelineOutput {
    pub input_chars: usize,
    pub summary: String,
    pub tokens_used: u32,
    pub target_lang: String,
    pub detected_language: Option<String>,
    pub translated_text: String,
}

/// Summarize the text, then translate the summary
pub async fn run_pipeline(
    summarizer: &dyn SummaryProvider,
    translator: &dyn TranslationProvider,
    text: &str,
    target_lang: &str,
    style: SummaryStyle,
) -> docbridge_common::Result<PipelineOutput> {
    info!("[1/2] Summarizing {} chars ({:?})", text.chars().count(), style);
    let summary = summarizer
        .summarize(text, SummaryOptions::with_style(style))
        .await?;
    info!("Summary ready - Tokens used: {}", summary.tokens_used);

    info!("[2/2] Translating summary to {} with {}", target_lang, translator.name());
    let translation = translator
        .translate(TranslationRequest::new(summary.text.clone(), target_lang))
        .await?;

    Ok(PipelineOutput {
        input_chars: text.chars().count(),
        summary: summary.text,
        tokens_used: summary.tokens_used,
        target_lang: translation.target_lang,
        detected_language: translation.detected_language,
        translated_text: translation.translated_text,
    })
}
