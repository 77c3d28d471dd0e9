use crate::cli::config::Config;
use crate::ponte::countdown::REDIRECT_COUNTDOWN_SECS;
use crate::ponte::dispatch::{classify, dispatch, CallbackOutcome, CallbackRequest};
use crate::ponte::pages::{success_copy, CallbackTemplate, HtmlTemplate, SuccessTemplate};
use crate::provider::TokenVerifier;
use axum::{
    extract::{Extension, Query},
    response::{IntoResponse, Redirect, Response},
};
use std::{collections::HashMap, sync::Arc};
use tracing::{info, instrument};

/// Callback page: classify the query parameters, dispatch, then execute the
/// outcome. OAuth codes hand over to the native app immediately; verified
/// email actions get the success page whose countdown performs the redirect;
/// failures render the error state with the manual recovery actions.
#[instrument(skip_all)]
pub async fn callback(
    Extension(config): Extension<Arc<Config>>,
    Extension(verifier): Extension<Arc<dyn TokenVerifier>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request = classify(&params);

    let email_kind = match &request {
        CallbackRequest::EmailAction { kind, .. } => Some(*kind),
        _ => None,
    };

    let outcome = dispatch(request, verifier.as_ref(), &config.app_scheme).await;

    match outcome {
        CallbackOutcome::Redirect { target_url } => match email_kind {
            Some(kind) => {
                info!("email action verified: {kind}");

                let copy = success_copy(Some(kind));

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
            // OAuth authorization code: the exchange happens in the app, so
            // get the browser there without an interstitial
            None => Redirect::to(&target_url).into_response(),
        },
        CallbackOutcome::Failure { display_message } => {
            info!("callback failed: {display_message}");

            error_page(&config, display_message)
        }
        CallbackOutcome::Pending => HtmlTemplate(CallbackTemplate {
            app_name: config.app_name.clone(),
            processing: true,
            message: "Processing your request...".to_string(),
            open_app_url: config.open_app_url(),
            support_email: config.support_email.clone(),
            analytics_id: config.analytics_id.clone(),
            banner: config.banner(),
        })
        .into_response(),
    }
}

fn error_page(config: &Config, message: String) -> Response {
    HtmlTemplate(CallbackTemplate {
        app_name: config.app_name.clone(),
        processing: false,
        message,
        open_app_url: config.open_app_url(),
        support_email: config.support_email.clone(),
        analytics_id: config.analytics_id.clone(),
        banner: config.banner(),
    })
    .into_response()
}
