//! Text Translator Core Library
//!
//! This library provides the core functionality for translating text through
//! a cascade of external providers:
//! - Language registry (display names and provider locales)
//! - Word-safe chunking for providers with payload limits
//! - Provider adapters (Hugging Face, LibreTranslate mirrors, MyMemory)
//! - The cascade that tries them in order until one succeeds

pub mod cascade;
pub mod chunker;
pub mod config;
pub mod error;
pub mod languages;
pub mod request;
pub mod translator;
pub mod util;

pub use cascade::Cascade;
pub use config::{
    AUTO_LANG, AppConfig, HuggingFaceConfig, Lang, LibreTranslateConfig, MyMemoryConfig,
    TranslatorConfig,
};
pub use error::{Error, Result};
pub use languages::{LanguageOption, list_all, locale_of, name_of};
pub use request::{Translation, TranslationRequest};
pub use translator::{SkipReason, Translator, TranslatorInfo, create_translators};
