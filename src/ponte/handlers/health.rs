use axum::{
    http::HeaderMap,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::ponte::GIT_COMMIT_HASH;

/// Health probe: crate name, version and build hash, also set as `X-App`.
pub async fn health() -> impl IntoResponse {
    let body = Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "build": GIT_COMMIT_HASH,
    }));

    let short_hash = GIT_COMMIT_HASH.get(..7).unwrap_or_default();

    let mut headers = HeaderMap::new();
    let app = format!(
        "{}:{}:{short_hash}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    if let Ok(value) = app.parse() {
        headers.insert("X-App", value);
    }

    (headers, body)
}
