//! Text Translator Web - JSON service exposing the provider cascade.

mod helpers;
mod routes;
mod state;

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use text_translator_core::AppConfig;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter, prelude::*};

use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "text-translator-web")]
#[command(author, version, about = "Text Translator Web Server", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Config file path (defaults to ~/.config/text-translator/config.toml or ./config.toml)
    #[arg(short, long, env = "TRANSLATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Hugging Face Inference API key (enables the inference provider)
    #[arg(long, env = "HUGGINGFACE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Hugging Face model identifier
    #[arg(long, env = "HUGGINGFACE_MODEL")]
    model: Option<String>,

    /// Overall deadline for one translation request, in seconds
    #[arg(long, env = "TRANSLATOR_REQUEST_DEADLINE")]
    deadline: Option<u64>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let mut config = if let Some(path) = &args.config {
        AppConfig::from_file(path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };

    // CLI / environment overrides
    if let Some(key) = args.api_key {
        config.translator.huggingface.api_key = Some(key);
    }
    if let Some(model) = args.model {
        config.translator.huggingface.model = model;
    }
    if let Some(deadline) = args.deadline {
        config.request_deadline_secs = deadline;
    }

    let state = Arc::new(
        AppState::new(&config).context("Failed to initialize application state")?,
    );

    for translator in state.cascade.translators() {
        info!(
            "Provider: {}{}",
            translator.name,
            if translator.requires_api_key { " (requires API key)" } else { "" }
        );
    }

    let app = routes::router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
