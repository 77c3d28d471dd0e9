use crate::cli::config::Config;
use crate::ponte::pages::{HtmlTemplate, IndexTemplate};
use axum::{
    extract::{Extension, RawQuery},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Landing page. Provider redirects sometimes land on the root instead of
/// the callback path, so any query string is forwarded there unchanged.
pub async fn index(
    Extension(config): Extension<Arc<Config>>,
    RawQuery(query): RawQuery,
) -> Response {
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        debug!("forwarding root request to /callback");

        return Redirect::temporary(&format!("/callback?{query}")).into_response();
    }

    HtmlTemplate(IndexTemplate {
        app_name: config.app_name.clone(),
        open_app_url: config.open_app_url(),
        support_email: config.support_email.clone(),
        analytics_id: config.analytics_id.clone(),
        banner: config.banner(),
    })
    .into_response()
}
