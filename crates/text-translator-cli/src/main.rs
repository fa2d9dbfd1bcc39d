//! Text Translator CLI - translate text from the command line.
//!
//! Talks to a running text-translator-web service when `--backend` is given,
//! otherwise runs the same provider cascade in-process.

mod backend;

use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::time::Duration;
use text_translator_core::{AppConfig, Cascade, Lang, TranslationRequest, list_all, name_of};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use backend::Backend;

/// Above this many characters, auto-detection tends to be unreliable.
const LONG_TEXT_HINT_CHARS: usize = 500;

#[derive(Parser, Debug)]
#[command(name = "translate")]
#[command(author, version, about = "Translate text through provider fallback", long_about = None)]
struct Args {
    /// Text to translate (read from stdin when omitted)
    text: Option<String>,

    /// Source language code, or "auto" to let the provider detect it
    #[arg(short = 's', long, default_value = "auto")]
    source: String,

    /// Target language code
    #[arg(short = 't', long, default_value = "en")]
    target: String,

    /// Also save the translation to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base URL of a text-translator-web service (runs in-process when unset)
    #[arg(long, env = "TRANSLATOR_BACKEND")]
    backend: Option<String>,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hugging Face Inference API key
    #[arg(long, env = "HUGGINGFACE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Hugging Face model identifier
    #[arg(long, env = "HUGGINGFACE_MODEL")]
    model: Option<String>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Translated text plus what the caller should know about it.
struct Outcome {
    text: String,
    provider: Option<String>,
    warnings: Vec<String>,
}

fn read_input(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Enter text, then press Ctrl-D:");
        }
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(path) = &args.config {
        AppConfig::from_file(path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };

    if let Some(ref key) = args.api_key {
        config.translator.huggingface.api_key = Some(key.clone());
    }
    if let Some(ref model) = args.model {
        config.translator.huggingface.model.clone_from(model);
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Language rows from the backend, or the built-in registry when it cannot answer.
async fn fetch_languages(backend: Option<&Backend>) -> Vec<(String, String)> {
    let remote = match backend {
        Some(backend) => match backend.languages().await {
            Ok(languages) => Some(languages),
            Err(e) => {
                warn!("Could not fetch languages from the backend, using the built-in list: {e:#}");
                None
            }
        },
        None => None,
    };

    match remote {
        Some(languages) => languages.into_iter().map(|l| (l.code, l.name)).collect(),
        None => list_all()
            .into_iter()
            .map(|l| (l.code.to_string(), l.name.to_string()))
            .collect(),
    }
}

async fn print_languages(backend: Option<&Backend>) {
    let languages = fetch_languages(backend).await;

    // CLI output is intentional
    #[allow(clippy::print_stdout)]
    for (code, name) in languages {
        println!("{code:<4} {name}");
    }
}

async fn translate(
    args: &Args,
    backend: Option<&Backend>,
    request: &TranslationRequest,
) -> Result<Outcome> {
    if let Some(backend) = backend {
        let remote = backend.translate(request).await?;
        return Ok(Outcome {
            text: remote.translated_text,
            provider: remote.provider,
            warnings: remote.warnings,
        });
    }

    let config = load_config(args)?;
    let cascade =
        Cascade::from_config(&config.translator).context("Failed to build translator cascade")?;

    let translation = cascade
        .translate_with_deadline(request, config.request_deadline())
        .await
        .context("Translation failed")?;

    Ok(Outcome {
        text: translation.text,
        provider: Some(translation.provider),
        warnings: translation.notes,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let backend = args.backend.as_deref().map(Backend::new).transpose()?;

    if args.list_languages {
        print_languages(backend.as_ref()).await;
        return Ok(());
    }

    let text = read_input(args.text.clone())?;
    if text.trim().is_empty() {
        bail!("Please enter some text to translate.");
    }

    let source = Lang::new(&args.source);
    let target = Lang::new(&args.target);

    if source.is_auto() && text.chars().count() > LONG_TEXT_HINT_CHARS {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("For long texts, pass a specific --source language to improve reliability.");
        }
    }

    info!(
        "Translating {} -> {}",
        if source.is_auto() { "Auto Detect" } else { name_of(source.as_str()) },
        name_of(target.as_str())
    );

    let request = TranslationRequest::new(text, source, target);

    let spinner = ProgressBar::new_spinner();
    // Template is hardcoded and valid, unwrap is safe
    #[allow(clippy::unwrap_used)]
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}").unwrap());
    spinner.set_message("Translating...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = translate(&args, backend.as_ref(), &request).await;
    spinner.finish_and_clear();
    let outcome = outcome?;

    if let Some(ref provider) = outcome.provider {
        info!("Translated by {}", provider);
    }

    #[allow(clippy::print_stderr)]
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }

    // CLI output is intentional
    #[allow(clippy::print_stdout)]
    {
        println!("{}", outcome.text);
    }

    if let Some(ref path) = args.output {
        std::fs::write(path, &outcome.text)
            .with_context(|| format!("Failed to write output: {}", path.display()))?;
        info!("Saved translation to {}", path.display());
    }

    Ok(())
}
