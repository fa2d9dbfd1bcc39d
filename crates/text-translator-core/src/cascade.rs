//! Ordered provider fallback.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::config::TranslatorConfig;
use crate::error::{Error, Result};
use crate::request::{Translation, TranslationRequest};
use crate::translator::{Translator, TranslatorInfo, create_translators};

/// Tries translators one at a time, in order, until one succeeds.
///
/// Translators whose skip precondition holds are passed over silently. Each
/// failure is recorded and the next translator is consulted; the first
/// success ends the run. A cascade holds no per-request state, so one
/// instance can serve any number of concurrent requests.
#[derive(Clone)]
pub struct Cascade {
    translators: Vec<Arc<dyn Translator>>,
}

impl Cascade {
    pub fn new(translators: Vec<Arc<dyn Translator>>) -> Self {
        Self { translators }
    }

    /// Build the standard provider cascade from configuration
    pub fn from_config(config: &TranslatorConfig) -> Result<Self> {
        Ok(Self::new(create_translators(config)?))
    }

    pub fn translators(&self) -> Vec<TranslatorInfo> {
        self.translators.iter().map(|t| t.info()).collect()
    }

    /// Translate with the first translator that succeeds.
    ///
    /// Returns [`Error::InvalidRequest`] before contacting anyone if the
    /// request is malformed, and [`Error::CascadeExhausted`] with every
    /// recorded failure, in order, if no translator produced text.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        self.run(request, None).await
    }

    /// Like [`Cascade::translate`], bounded by `deadline` across all attempts.
    ///
    /// The attempt in flight when time runs out is abandoned and the run
    /// ends with [`Error::DeadlineExceeded`], carrying the failures recorded
    /// so far followed by the interrupted translator.
    pub async fn translate_with_deadline(
        &self,
        request: &TranslationRequest,
        deadline: Duration,
    ) -> Result<Translation> {
        self.run(request, Some(deadline)).await
    }

    async fn run(
        &self,
        request: &TranslationRequest,
        deadline: Option<Duration>,
    ) -> Result<Translation> {
        request.validate()?;

        let started = Instant::now();
        let mut failures = Vec::new();

        for translator in &self.translators {
            let name = translator.name();

            if let Some(reason) = translator.skip_reason(request) {
                debug!("Skipping {}: {}", name, reason);
                continue;
            }

            debug!(
                "Trying {} ({} -> {})",
                name, request.source_lang, request.target_lang
            );

            let attempt = translator.translate(request);
            let outcome = match deadline {
                None => attempt.await,
                Some(deadline) => {
                    let remaining = deadline.saturating_sub(started.elapsed());
                    if let Ok(outcome) = tokio::time::timeout(remaining, attempt).await {
                        outcome
                    } else {
                        warn!("{} interrupted by the {:?} deadline", name, deadline);
                        failures.push(format!("{name}: interrupted by deadline"));
                        return Err(Error::DeadlineExceeded { deadline, failures });
                    }
                }
            };

            match outcome {
                Ok(translation) => {
                    info!(
                        "Translated {} chars with {}{}",
                        request.text.chars().count(),
                        name,
                        if translation.is_partial() { " (partial)" } else { "" }
                    );
                    return Ok(translation);
                }
                Err(e) => {
                    warn!("{}", e);
                    failures.push(e.to_string());
                }
            }
        }

        error!(
            "All translators failed or were skipped ({} failure(s))",
            failures.len()
        );
        Err(Error::CascadeExhausted { failures })
    }
}

impl std::fmt::Debug for Cascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cascade")
            .field(
                "translators",
                &self.translators.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
