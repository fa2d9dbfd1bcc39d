use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::request::{Translation, TranslationRequest};
use crate::util::truncate_detail;
use super::traits::{Translator, TranslatorInfo};

/// A single LibreTranslate-compatible endpoint.
///
/// The endpoint URL doubles as the translator name so failures from each
/// mirror stay distinguishable in the aggregated error.
pub struct LibreTranslateTranslator {
    client: Client,
    /// Full URL of the `/translate` endpoint
    pub url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl LibreTranslateTranslator {
    pub fn new(url: String, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            url,
            api_key,
            timeout,
        })
    }
}

#[async_trait]
impl Translator for LibreTranslateTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: self.url.clone(),
            requires_api_key: false,
            supports_auto_detect: true,
        }
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        let body = LibreRequest {
            q: &request.text,
            source: request.source_lang.as_str(),
            target: request.target_lang.as_str(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        debug!("LibreTranslate request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("LibreTranslate request to {} failed: {}", self.url, e);
                Error::ProviderUnavailable {
                    provider: self.url.clone(),
                    reason: if e.is_timeout() {
                        format!("timed out after {}s", self.timeout.as_secs())
                    } else {
                        e.to_string()
                    },
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| Error::ProviderUnavailable {
            provider: self.url.clone(),
            reason: format!("failed to read body: {e}"),
        })?;

        if !status.is_success() {
            return Err(Error::ProviderRejected {
                provider: self.url.clone(),
                reason: format!("HTTP {status}: {}", truncate_detail(&text)),
            });
        }

        let parsed: LibreResponse =
            serde_json::from_str(&text).map_err(|_| Error::ProviderRejected {
                provider: self.url.clone(),
                reason: "invalid JSON body".to_string(),
            })?;

        match parsed.translated_text {
            Some(translated) if !translated.trim().is_empty() => {
                Ok(Translation::new(translated, self.url.clone()))
            }
            _ => Err(Error::ProviderEmptyResult {
                provider: self.url.clone(),
                reason: "no translatedText in response".to_string(),
            }),
        }
    }
}
