use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Reserved source language meaning "let the provider detect it"
pub const AUTO_LANG: &str = "auto";

/// Language code (ISO 639-1 style, case-insensitive).
///
/// Codes are stored trimmed and lowercased so lookups and comparisons do not
/// depend on how the caller spelled them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Lang(String);

impl Lang {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_lowercase())
    }

    pub fn auto() -> Self {
        Self(AUTO_LANG.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_auto(&self) -> bool {
        self.0 == AUTO_LANG
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Lang {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Lang {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Lang> for String {
    fn from(lang: Lang) -> Self {
        lang.0
    }
}

/// Hugging Face Inference API settings.
///
/// The adapter is skipped entirely when `api_key` is not set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    #[serde(default = "default_hf_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_hf_model")]
    pub model: String,
    #[serde(default = "default_hf_timeout")]
    pub timeout_secs: u64,
}

impl HuggingFaceConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_hf_api_base() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_hf_model() -> String {
    "facebook/m2m100_418M".to_string()
}

const fn default_hf_timeout() -> u64 {
    15
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_base: default_hf_api_base(),
            api_key: None,
            model: default_hf_model(),
            timeout_secs: default_hf_timeout(),
        }
    }
}

/// LibreTranslate-compatible endpoints, tried in the listed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibreTranslateConfig {
    #[serde(default = "default_libre_endpoints")]
    pub endpoints: Vec<String>,
    /// Sent as `api_key` in the request body when set
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_libre_timeout")]
    pub timeout_secs: u64,
}

impl LibreTranslateConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_libre_endpoints() -> Vec<String> {
    vec![
        "https://libretranslate.de/translate".to_string(),
        "https://libretranslate.com/translate".to_string(),
        "https://translate.argosopentech.com/translate".to_string(),
    ]
}

const fn default_libre_timeout() -> u64 {
    10
}

impl Default for LibreTranslateConfig {
    fn default() -> Self {
        Self {
            endpoints: default_libre_endpoints(),
            api_key: None,
            timeout_secs: default_libre_timeout(),
        }
    }
}

/// MyMemory settings (chunked fallback of last resort).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyMemoryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_mymemory_api_base")]
    pub api_base: String,
    /// Contact address; MyMemory grants a larger daily quota when present
    #[serde(default)]
    pub email: Option<String>,
    /// Maximum characters per request
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Timeout for each chunk request
    #[serde(default = "default_mymemory_timeout")]
    pub timeout_secs: u64,
}

impl MyMemoryConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

const fn default_true() -> bool {
    true
}

fn default_mymemory_api_base() -> String {
    "https://api.mymemory.translated.net".to_string()
}

const fn default_chunk_size() -> usize {
    450
}

const fn default_mymemory_timeout() -> u64 {
    10
}

impl Default for MyMemoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base: default_mymemory_api_base(),
            email: None,
            chunk_size: default_chunk_size(),
            timeout_secs: default_mymemory_timeout(),
        }
    }
}

/// Provider cascade configuration, one section per provider family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub huggingface: HuggingFaceConfig,
    #[serde(default)]
    pub libretranslate: LibreTranslateConfig,
    #[serde(default)]
    pub mymemory: MyMemoryConfig,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider cascade configuration
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Upper bound on a whole translation request, across all providers
    #[serde(default = "default_request_deadline")]
    pub request_deadline_secs: u64,
}

const fn default_request_deadline() -> u64 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            request_deadline_secs: default_request_deadline(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ConfigLoad(format!("Failed to parse config: {e}")))
    }

    /// Load from default locations (~/.config/text-translator/config.toml, ./config.toml)
    pub fn load() -> Self {
        // Try user config
        if let Some(config_dir) = crate::util::config_dir() {
            let user_config = config_dir.join("text-translator").join("config.toml");
            if user_config.exists() {
                match Self::from_file(&user_config) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {}", user_config.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Try local config
        let local_config = std::path::PathBuf::from("config.toml");
        if local_config.exists() {
            match Self::from_file(&local_config) {
                Ok(config) => {
                    tracing::debug!("Loaded config from ./config.toml");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load ./config.toml: {}", e);
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Self::default()
    }

    pub const fn request_deadline(&self) -> Duration {
        Duration::from_secs(self.request_deadline_secs)
    }

    /// Reject values that would make a provider unusable.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &str, reason: &str| Error::ConfigInvalid {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self.request_deadline_secs == 0 {
            return Err(invalid("request_deadline_secs", "must be greater than zero"));
        }

        let translator = &self.translator;
        if translator.huggingface.timeout_secs == 0 {
            return Err(invalid("huggingface.timeout_secs", "must be greater than zero"));
        }
        if translator.libretranslate.timeout_secs == 0 {
            return Err(invalid("libretranslate.timeout_secs", "must be greater than zero"));
        }
        if translator
            .libretranslate
            .endpoints
            .iter()
            .any(|url| url.trim().is_empty())
        {
            return Err(invalid("libretranslate.endpoints", "endpoint URL is empty"));
        }
        if translator.mymemory.timeout_secs == 0 {
            return Err(invalid("mymemory.timeout_secs", "must be greater than zero"));
        }
        if translator.mymemory.chunk_size == 0 {
            return Err(invalid("mymemory.chunk_size", "must be greater than zero"));
        }

        Ok(())
    }
}
