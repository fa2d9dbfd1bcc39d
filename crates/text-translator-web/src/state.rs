use anyhow::{Context, Result};
use std::time::Duration;
use text_translator_core::{AppConfig, Cascade};

/// Global application state
///
/// Read-only after startup; requests share it without locking.
pub struct AppState {
    /// Provider cascade used by every translation request
    pub cascade: Cascade,
    /// Upper bound on a single translation request
    pub request_deadline: Duration,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate().context("Invalid configuration")?;

        let cascade = Cascade::from_config(&config.translator)
            .context("Failed to build translator cascade")?;

        Ok(Self::with_cascade(cascade, config.request_deadline()))
    }

    pub const fn with_cascade(cascade: Cascade, request_deadline: Duration) -> Self {
        Self {
            cascade,
            request_deadline,
        }
    }
}
