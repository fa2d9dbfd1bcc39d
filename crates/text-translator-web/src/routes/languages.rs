//! Read-only routes: language registry and liveness.

use axum::Json;
use serde::Serialize;
use text_translator_core::{LanguageOption, list_all};

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageOption>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Every supported language as `{code, name}`, sorted by code.
pub async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: list_all(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
