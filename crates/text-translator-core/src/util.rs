//! Utility functions shared across the crate.

use std::path::PathBuf;

/// Longest upstream body excerpt kept in a failure message.
pub const MAX_DETAIL_CHARS: usize = 300;

/// Get the user's config directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}

/// Shorten an upstream response body for inclusion in an error message.
///
/// Cuts on a character boundary and marks the cut with an ellipsis.
pub fn truncate_detail(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_DETAIL_CHARS) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}
