//! HTTP route handlers for the text translator web service.
//!
//! All routes speak JSON. Errors are returned as `{"detail": "..."}`.

mod languages;
mod translate;

pub use languages::{health, list_languages};
pub use translate::translate_text;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/languages", get(list_languages))
        .route("/translate", post(translate_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
