use async_trait::async_trait;
use crate::config::Lang;
use crate::error::Result;
use crate::request::{Translation, TranslationRequest};

/// Information about a translator backend
#[derive(Debug, Clone)]
pub struct TranslatorInfo {
    /// Human-readable name, used as the prefix of failure messages
    pub name: String,
    /// Whether this translator requires an API key
    pub requires_api_key: bool,
    /// Whether this translator supports auto-detection of source language
    pub supports_auto_detect: bool,
}

/// Why a translator was left out of a cascade run.
///
/// A skip is not a failure and contributes nothing to the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Required credential is missing
    NotConfigured,
    /// Source is "auto" and the backend needs an explicit language
    AutoDetectUnsupported,
    /// The backend has no mapping for one of the languages
    UnsupportedLanguage,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::NotConfigured => "not configured",
            Self::AutoDetectUnsupported => "source language detection unsupported",
            Self::UnsupportedLanguage => "language pair unsupported",
        };
        f.write_str(reason)
    }
}

/// Trait for translation backends
///
/// Implementations make exactly one attempt per call; falling back to the
/// next backend is the cascade's job.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Get information about this translator
    fn info(&self) -> TranslatorInfo;

    /// Get the translator name (convenience method)
    fn name(&self) -> String {
        self.info().name
    }

    /// Translate the request's text from source language to target language
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation>;

    /// Check if the translator is available (e.g., API key configured)
    fn is_available(&self) -> bool {
        true
    }

    /// Check whether both languages can be served
    fn supports_pair(&self, _source: &Lang, _target: &Lang) -> bool {
        true
    }

    /// Decide whether this translator must sit out the given request
    fn skip_reason(&self, request: &TranslationRequest) -> Option<SkipReason> {
        if !self.is_available() {
            return Some(SkipReason::NotConfigured);
        }
        if request.source_lang.is_auto() && !self.info().supports_auto_detect {
            return Some(SkipReason::AutoDetectUnsupported);
        }
        if !self.supports_pair(&request.source_lang, &request.target_lang) {
            return Some(SkipReason::UnsupportedLanguage);
        }
        None
    }
}
