use serde::{Deserialize, Serialize};

use crate::config::Lang;
use crate::error::{Error, Result};

/// A piece of text to translate between two languages.
///
/// `source_lang` may be `"auto"`; `target_lang` may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: Lang,
    pub target_lang: Lang,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<Lang>,
        target_lang: impl Into<Lang>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    /// Check the request before any provider is contacted.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(Error::InvalidRequest("text must not be empty".to_string()));
        }
        if self.source_lang.is_empty() {
            return Err(Error::InvalidRequest("source_lang must not be empty".to_string()));
        }
        if self.target_lang.is_empty() {
            return Err(Error::InvalidRequest("target_lang must not be empty".to_string()));
        }
        if self.target_lang.is_auto() {
            return Err(Error::InvalidRequest(
                "target_lang cannot be \"auto\"".to_string(),
            ));
        }
        Ok(())
    }
}

/// Successful translation produced by one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub text: String,
    /// Name of the provider that produced the text
    pub provider: String,
    /// Non-fatal problems, e.g. chunks that were dropped from the output
    pub notes: Vec<String>,
}

impl Translation {
    pub fn new(text: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provider: provider.into(),
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Whether part of the input is missing from the output.
    pub fn is_partial(&self) -> bool {
        !self.notes.is_empty()
    }
}
