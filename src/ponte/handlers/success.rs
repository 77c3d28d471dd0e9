use crate::cli::config::Config;
use crate::ponte::countdown::REDIRECT_COUNTDOWN_SECS;
use crate::ponte::dispatch::email_target;
use crate::ponte::pages::{success_copy, HtmlTemplate, SuccessTemplate};
use crate::provider::TokenKind;
use axum::{
    extract::{Extension, Query},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize, Default)]
pub struct SuccessParams {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Success page with per-type copy and the auto-redirect countdown.
pub async fn success(
    Extension(config): Extension<Arc<Config>>,
    Query(params): Query<SuccessParams>,
) -> Response {
    let kind = params.kind.as_deref().and_then(TokenKind::from_param);

    let target_url = match kind {
        Some(kind) => email_target(&config.app_scheme, kind),
        None => format!("{}://login-callback?status=success", config.app_scheme),
    };

    let copy = success_copy(kind);

    HtmlTemplate(SuccessTemplate {
        app_name: config.app_name.clone(),
        title: copy.title,
        message: copy.message,
        button_text: copy.button_text,
        target_url,
        countdown_from: REDIRECT_COUNTDOWN_SECS,
        analytics_id: config.analytics_id.clone(),
        banner: config.banner(),
    })
    .into_response()
}
