//! Client for a running text-translator-web service.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use text_translator_core::TranslationRequest;

/// Generous enough to cover the service's own deadline.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Deserialize)]
pub struct RemoteLanguage {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct LanguagesBody {
    languages: Vec<RemoteLanguage>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteTranslation {
    pub translated_text: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

pub struct Backend {
    client: Client,
    base: String,
}

impl Backend {
    pub fn new(base: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub async fn languages(&self) -> Result<Vec<RemoteLanguage>> {
        let url = format!("{}/languages", self.base);
        let body: LanguagesBody = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Could not reach the backend at {url}"))?
            .error_for_status()?
            .json()
            .await
            .context("Backend returned an invalid language list")?;

        Ok(body.languages)
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<RemoteTranslation> {
        let url = format!("{}/translate", self.base);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Could not reach the backend at {url}"))?;

        let status = response.status();
        let text = response.text().await.context("Failed to read backend response")?;

        if !status.is_success() {
            // Prefer the service's detail message, fall back to the raw body
            let detail = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.detail)
                .unwrap_or(text);
            bail!("Translation failed ({status}).\n{detail}");
        }

        let translation: RemoteTranslation =
            serde_json::from_str(&text).context("Backend returned an invalid translation")?;

        if translation.translated_text.trim().is_empty() {
            bail!("Backend returned no translated text.");
        }

        Ok(translation)
    }
}
