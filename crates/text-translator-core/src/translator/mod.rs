mod traits;
mod huggingface;
mod libretranslate;
mod mymemory;

pub use traits::{SkipReason, Translator, TranslatorInfo};
pub use huggingface::{HuggingFaceTranslator, extract_translation};
pub use libretranslate::LibreTranslateTranslator;
pub use mymemory::MyMemoryTranslator;

use crate::config::TranslatorConfig;
use crate::error::Result;
use std::sync::Arc;

/// Create the translators from configuration, in cascade order.
///
/// Paid inference first, then each LibreTranslate mirror, then the chunked
/// MyMemory fallback. The inference translator is always included; without an
/// API key it is skipped at request time.
pub fn create_translators(config: &TranslatorConfig) -> Result<Vec<Arc<dyn Translator>>> {
    let mut translators: Vec<Arc<dyn Translator>> = Vec::new();

    translators.push(Arc::new(HuggingFaceTranslator::from_config(&config.huggingface)?));

    for url in &config.libretranslate.endpoints {
        translators.push(Arc::new(LibreTranslateTranslator::new(
            url.clone(),
            config.libretranslate.api_key.clone(),
            config.libretranslate.timeout(),
        )?));
    }

    if config.mymemory.enabled {
        translators.push(Arc::new(MyMemoryTranslator::from_config(&config.mymemory)?));
    }

    Ok(translators)
}
