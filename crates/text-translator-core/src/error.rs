use std::time::Duration;
use thiserror::Error;

/// Unified error type for text-translator-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - Request validation (rejected before any network call)
/// - Provider failures (unreachable, rejected, empty result)
/// - Cascade exhaustion (every provider skipped or failed, or time ran out)
/// - Configuration operations (loading, validation)
/// - General I/O operations
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Request Errors
    // ==========================================================================
    /// Malformed or missing request fields
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    // ==========================================================================
    // Provider Errors
    // ==========================================================================
    /// Provider could not be reached or did not answer in time
    #[error("{provider}: unreachable ({reason})")]
    ProviderUnavailable { provider: String, reason: String },

    /// Provider answered with a non-success status or a malformed body
    #[error("{provider}: {reason}")]
    ProviderRejected { provider: String, reason: String },

    /// Provider answered successfully but without usable text
    #[error("{provider}: {reason}")]
    ProviderEmptyResult { provider: String, reason: String },

    /// Every provider in the cascade was skipped or failed
    #[error("{}", summarize_failures(.failures))]
    CascadeExhausted { failures: Vec<String> },

    /// The request deadline passed before any provider succeeded
    #[error("{}", summarize_deadline(.deadline, .failures))]
    DeadlineExceeded {
        deadline: Duration,
        failures: Vec<String>,
    },

    /// Failed to build the HTTP client for a provider
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    /// Invalid configuration value
    #[error("invalid config value for '{field}': {reason}")]
    ConfigInvalid { field: String, reason: String },

    // ==========================================================================
    // I/O Errors
    // ==========================================================================
    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the caller sent a bad request (as opposed to an upstream failure).
    pub const fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

fn summarize_failures(failures: &[String]) -> String {
    if failures.is_empty() {
        "translation failed".to_string()
    } else {
        failures.join("; ")
    }
}

fn summarize_deadline(deadline: &Duration, failures: &[String]) -> String {
    let timeout = format!(
        "translation did not finish within {}s",
        deadline.as_secs_f32()
    );
    if failures.is_empty() {
        timeout
    } else {
        format!("{}; {timeout}", failures.join("; "))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
