use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::chunker;
use crate::config::{Lang, MyMemoryConfig};
use crate::error::{Error, Result};
use crate::languages::locale_of;
use crate::request::{Translation, TranslationRequest};
use crate::util::truncate_detail;
use super::traits::{Translator, TranslatorInfo};

const NAME: &str = "mymemory";

/// MyMemory free translator, used as the fallback of last resort.
///
/// MyMemory rejects long payloads, so text is split into word-safe chunks and
/// each chunk is translated on its own. Chunks that are rejected or come back
/// empty are dropped and reported as notes on the result; the call fails when
/// every chunk does, or as soon as the service cannot be reached.
pub struct MyMemoryTranslator {
    client: Client,
    pub api_base: String,
    pub email: Option<String>,
    pub chunk_size: usize,
    pub timeout: Duration,
}

impl MyMemoryTranslator {
    pub fn new(
        api_base: String,
        email: Option<String>,
        chunk_size: usize,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_base,
            email,
            chunk_size,
            timeout,
        })
    }

    pub fn from_config(config: &MyMemoryConfig) -> Result<Self> {
        Self::new(
            config.api_base.clone(),
            config.email.clone(),
            config.chunk_size,
            config.timeout(),
        )
    }

    async fn translate_chunk(&self, chunk: &str, langpair: &str) -> Result<String> {
        let url = format!("{}/get", self.api_base.trim_end_matches('/'));

        let mut query = vec![("q", chunk), ("langpair", langpair)];
        if let Some(ref email) = self.email {
            query.push(("de", email.as_str()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::ProviderUnavailable {
                provider: NAME.to_string(),
                reason: if e.is_timeout() {
                    format!("timed out after {}s", self.timeout.as_secs())
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| Error::ProviderUnavailable {
            provider: NAME.to_string(),
            reason: format!("failed to read body: {e}"),
        })?;

        if !status.is_success() {
            return Err(Error::ProviderRejected {
                provider: NAME.to_string(),
                reason: format!("HTTP {status}: {}", truncate_detail(&text)),
            });
        }

        let value: Value = serde_json::from_str(&text).map_err(|_| Error::ProviderRejected {
            provider: NAME.to_string(),
            reason: "invalid JSON body".to_string(),
        })?;

        if let Some(code) = response_status(&value)
            && code != 200
        {
            let details = value
                .get("responseDetails")
                .and_then(Value::as_str)
                .unwrap_or_default();
            return Err(Error::ProviderRejected {
                provider: NAME.to_string(),
                reason: format!("status {code}: {}", truncate_detail(details)),
            });
        }

        extract_translation(&value).ok_or_else(|| Error::ProviderEmptyResult {
            provider: NAME.to_string(),
            reason: "empty result for chunk".to_string(),
        })
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: NAME.to_string(),
            requires_api_key: false,
            supports_auto_detect: false,
        }
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        let (Some(source), Some(target)) = (
            locale_of(request.source_lang.as_str()),
            locale_of(request.target_lang.as_str()),
        ) else {
            return Err(Error::ProviderRejected {
                provider: NAME.to_string(),
                reason: format!(
                    "no locale for {} -> {}",
                    request.source_lang, request.target_lang
                ),
            });
        };
        let langpair = format!("{source}|{target}");

        let chunks = chunker::split(&request.text, self.chunk_size);
        let total = chunks.len();
        debug!("MyMemory translating {} chunk(s) as {}", total, langpair);

        let mut translated = Vec::with_capacity(total);
        let mut notes = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            match self.translate_chunk(chunk, &langpair).await {
                Ok(text) => translated.push(text),
                // Stop at the first transport failure
                Err(e @ Error::ProviderUnavailable { .. }) => {
                    warn!("MyMemory unreachable at chunk {}/{}: {}", idx + 1, total, e);
                    return Err(e);
                }
                Err(e) => {
                    warn!("MyMemory chunk {}/{} failed: {}", idx + 1, total, e);
                    notes.push(format!("chunk {}/{} dropped ({e})", idx + 1, total));
                }
            }
        }

        if translated.is_empty() {
            return Err(Error::ProviderEmptyResult {
                provider: NAME.to_string(),
                reason: format!("every chunk failed: {}", notes.join(", ")),
            });
        }

        Ok(Translation::new(translated.join(" "), NAME).with_notes(notes))
    }

    fn supports_pair(&self, source: &Lang, target: &Lang) -> bool {
        locale_of(source.as_str()).is_some() && locale_of(target.as_str()).is_some()
    }
}

/// `responseStatus` arrives as either a number or a numeric string.
fn response_status(value: &Value) -> Option<u64> {
    match value.get("responseStatus")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read `responseData.translatedText`, falling back to the first translation memory match.
fn extract_translation(value: &Value) -> Option<String> {
    let non_blank = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    };

    non_blank(value.pointer("/responseData/translatedText")).or_else(|| {
        value
            .get("matches")
            .and_then(Value::as_array)
            .and_then(|matches| matches.first())
            .and_then(|first| non_blank(first.get("translation")))
    })
}
