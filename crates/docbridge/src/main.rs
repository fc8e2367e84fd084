mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::InputArgs;
use docbridge_common::{logger, AppConfig};
use docbridge_llm::{Audience, AzureOpenAiClient, SummaryOptions, SummaryStyle};
use docbridge_server::AppState;
use docbridge_translate::TranslationRequest;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "docbridge")]
#[command(about = "DocBridge - document translation and summarization API", long_about = None)]
struct Cli {
    /// Load environment variables from this file before reading the config
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Summarize text, then translate the summary
    Pipeline {
        #[command(flatten)]
        input: InputArgs,

        /// Target language code
        #[arg(long, default_value = "hi")]
        target: String,

        /// Summary style (concise, detailed, bullet_points, analysis)
        #[arg(long, default_value = "concise")]
        style: SummaryStyle,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate text with Azure Translator
    Translate {
        #[command(flatten)]
        input: InputArgs,

        /// Target language code
        #[arg(long)]
        target: String,

        /// Source language code; detected when omitted
        #[arg(long)]
        source: Option<String>,
    },

    /// Summarize text with Azure OpenAI
    Summarize {
        #[command(flatten)]
        input: InputArgs,

        /// Summary style (concise, detailed, bullet_points, analysis)
        #[arg(long, default_value = "concise")]
        style: SummaryStyle,

        /// Custom instructions replacing the style prompt
        #[arg(long)]
        prompt: Option<String>,
    },

    /// Explain text for a given audience
    Explain {
        #[command(flatten)]
        input: InputArgs,

        /// Audience (general, technical, beginner)
        #[arg(long, default_value = "general")]
        audience: Audience,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Explicit file first; dotenv never overrides variables that are already set
    if let Some(path) = &cli.env_file {
        dotenv::from_path(path).with_context(|| format!("Failed to load {}", path.display()))?;
    }

    let mut config = AppConfig::from_env()?;

    let command = cli.command.unwrap_or(Commands::Serve { host: None, port: None });
    if let Commands::Serve { host, port } = &command {
        if let Some(host) = host {
            config.server_host = host.clone();
        }
        if let Some(port) = port {
            config.server_port = *port;
        }
    } else {
        // Keep stdout for command output
        logger::setup_console_logging("warn")?;
    }

    run(config, command).await
}

async fn serve(config: AppConfig) -> Result<()> {
    config.validate()?;
    logger::init(&config)?;

    tracing::info!("DocBridge starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Translator region: {}", config.translator.region);
    tracing::info!("  OpenAI deployment: {}", config.openai.deployment);
    if config.translator.api_key.is_none() {
        tracing::warn!("AZURE_TRANSLATOR_KEY is not set; translation requests will fail");
    }

    docbridge_server::start_server(config).await?;

    Ok(())
}

async fn run(config: AppConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Serve { .. } => serve(config).await?,
        Commands::Pipeline {
            input,
            target,
            style,
            json,
        } => {
            let text = input.load()?;
            let state = AppState::new(config)?;
            let output = commands::run_pipeline(
                state.summarizer.as_ref(),
                state.translator.as_ref(),
                &text,
                &target,
                style,
            )
            .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Summary ({} tokens):\n{}\n", output.tokens_used, output.summary);
                println!("Translation ({}):\n{}", output.target_lang, output.translated_text);
            }
        }
        Commands::Translate { input, target, source } => {
            let text = input.load()?;
            let state = AppState::new(config)?;
            let request = TranslationRequest::new(text, target).with_source(source);
            let result = state.translator.translate(request).await?;

            if let Some(detected) = &result.detected_language {
                eprintln!("Detected language: {}", detected);
            }
            println!("{}", result.translated_text);
        }
        Commands::Summarize { input, style, prompt } => {
            let text = input.load()?;
            let state = AppState::new(config)?;
            let options = SummaryOptions {
                style,
                instructions: prompt,
            };
            let summary = state.summarizer.summarize(&text, options).await?;

            eprintln!("Tokens used: {}", summary.tokens_used);
            println!("{}", summary.text);
        }
        Commands::Explain { input, audience } => {
            let text = input.load()?;
            let timeout = Duration::from_secs(config.upstream_timeout_secs);
            let client = AzureOpenAiClient::new(config.openai, timeout)?;
            let completion = docbridge_llm::explain(&client, &text, audience).await?;

            println!("{}", completion.content);
        }
    }

    Ok(())
}
