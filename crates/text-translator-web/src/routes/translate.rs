//! Translation route - runs the provider cascade for one piece of text.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use std::sync::Arc;
use text_translator_core::{Translation, TranslationRequest};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::helpers::{ResultExt, RouteResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub provider: String,
    /// Chunks the fallback provider could not translate
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<Translation> for TranslateResponse {
    fn from(translation: Translation) -> Self {
        Self {
            translated_text: translation.text,
            provider: translation.provider,
            warnings: translation.notes,
        }
    }
}

/// Translate text - returns `{translated_text}` or `{detail}`.
///
/// Malformed bodies and invalid fields are rejected with 400 before any
/// provider is contacted. If every provider fails the aggregated message is
/// returned with 502; if the request outlives the deadline, 504 with the
/// failures recorded up to that point.
pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> RouteResult<Json<TranslateResponse>> {
    let Json(request) = payload.map_err(|e| e.body_text()).or_bad_request()?;
    request.validate()?;

    let request_id = Uuid::new_v4();
    let span = info_span!(
        "translate",
        %request_id,
        source = %request.source_lang,
        target = %request.target_lang
    );

    let translation = state
        .cascade
        .translate_with_deadline(&request, state.request_deadline)
        .instrument(span)
        .await
        .inspect_err(|e| warn!("Translation {} failed: {}", request_id, e))?;

    Ok(Json(translation.into()))
}
