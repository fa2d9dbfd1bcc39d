use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::HuggingFaceConfig;
use crate::error::{Error, Result};
use crate::request::{Translation, TranslationRequest};
use crate::util::truncate_detail;
use super::traits::{Translator, TranslatorInfo};

/// Response fields that may hold the translated text, in lookup order.
const RESULT_FIELDS: [&str; 2] = ["translation_text", "generated_text"];

/// Hugging Face Inference API translator (e.g. `facebook/m2m100_418M`).
///
/// Only usable with an API key and an explicit source language.
pub struct HuggingFaceTranslator {
    client: Client,
    /// Base URL for the API (e.g., "https://api-inference.huggingface.co")
    pub api_base: String,
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
}

#[derive(Debug, Serialize)]
struct InferenceParameters<'a> {
    src_lang: &'a str,
    tgt_lang: &'a str,
}

impl HuggingFaceTranslator {
    pub fn new(
        api_base: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_base,
            api_key,
            model,
            timeout,
        })
    }

    pub fn from_config(config: &HuggingFaceConfig) -> Result<Self> {
        Self::new(
            config.api_base.clone(),
            config.api_key.clone(),
            config.model.clone(),
            config.timeout(),
        )
    }

    fn url(&self) -> String {
        format!("{}/models/{}", self.api_base.trim_end_matches('/'), self.model)
    }
}

#[async_trait]
impl Translator for HuggingFaceTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: format!("huggingface {}", self.model),
            requires_api_key: true,
            supports_auto_detect: false,
        }
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        let name = self.name();
        let url = self.url();
        let body = InferenceRequest {
            inputs: &request.text,
            parameters: InferenceParameters {
                src_lang: request.source_lang.as_str(),
                tgt_lang: request.target_lang.as_str(),
            },
        };

        debug!("Inference request to {}", url);

        let mut req = self.client.post(&url).json(&body);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await.map_err(|e| {
            warn!("Inference request failed: {}", e);
            Error::ProviderUnavailable {
                provider: name.clone(),
                reason: if e.is_timeout() {
                    format!("timed out after {}s", self.timeout.as_secs())
                } else {
                    e.to_string()
                },
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| Error::ProviderUnavailable {
            provider: name.clone(),
            reason: format!("failed to read body: {e}"),
        })?;

        if !status.is_success() {
            return Err(Error::ProviderRejected {
                provider: name,
                reason: format!("HTTP {status}: {}", truncate_detail(&text)),
            });
        }

        let value: Value = serde_json::from_str(&text).map_err(|_| Error::ProviderRejected {
            provider: name.clone(),
            reason: "invalid JSON response".to_string(),
        })?;

        match extract_translation(&value) {
            Some(translated) => Ok(Translation::new(translated, name)),
            None => Err(Error::ProviderEmptyResult {
                provider: name,
                reason: "no translation field in response".to_string(),
            }),
        }
    }

    fn is_available(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

/// Pull the translated text out of an inference response.
///
/// The API answers either with a list of result objects or a single object.
/// Fields are tried in [`RESULT_FIELDS`] order; blank strings count as absent.
pub fn extract_translation(value: &Value) -> Option<String> {
    let object = match value {
        Value::Array(items) => items.first()?,
        Value::Object(_) => value,
        _ => return None,
    };

    RESULT_FIELDS.iter().find_map(|field| {
        object
            .get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    })
}
