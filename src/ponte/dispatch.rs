//! Callback classification and dispatch.
//!
//! Pure decision logic: the handlers turn the resulting [`CallbackOutcome`]
//! into a page render or an HTTP redirect, nothing here touches the response.

use crate::provider::{TokenKind, TokenVerifier};
use std::collections::HashMap;
use tracing::{debug, instrument};

pub const INVALID_PARAMS_MESSAGE: &str =
    "Invalid or unsupported callback parameters. Please try again.";

/// Incoming callback request, classified from the URL query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackRequest {
    /// Provider-reported failure (`error`, optional `error_description`).
    ProviderError {
        error: String,
        description: Option<String>,
    },
    /// OAuth authorization code; the exchange is deferred to the native app.
    OAuthCode { code: String },
    /// Email-action token (`type` + `token`).
    EmailAction { kind: TokenKind, token: String },
    Unrecognized,
}

/// Result of dispatching one callback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Classification has not completed yet (verification call outstanding).
    Pending,
    /// Navigate the browser to `target_url` to re-open the native app.
    Redirect { target_url: String },
    /// Terminal for this page load, show the message and manual actions.
    Failure { display_message: String },
}

impl Default for CallbackOutcome {
    fn default() -> Self {
        Self::Pending
    }
}

// The original pages treat empty-string parameters as absent
fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Classify the query parameters into a [`CallbackRequest`].
///
/// First match wins: a provider error shadows everything, an OAuth code
/// shadows email actions, and an email action needs both a recognized `type`
/// and a `token`.
#[must_use]
pub fn classify(params: &HashMap<String, String>) -> CallbackRequest {
    if let Some(error) = non_empty(params, "error") {
        return CallbackRequest::ProviderError {
            error: error.to_string(),
            description: non_empty(params, "error_description").map(ToString::to_string),
        };
    }

    if let Some(code) = non_empty(params, "code") {
        return CallbackRequest::OAuthCode {
            code: code.to_string(),
        };
    }

    if let (Some(kind), Some(token)) = (
        non_empty(params, "type").and_then(TokenKind::from_param),
        non_empty(params, "token"),
    ) {
        return CallbackRequest::EmailAction {
            kind,
            token: token.to_string(),
        };
    }

    CallbackRequest::Unrecognized
}

#[must_use]
pub fn oauth_target(app_scheme: &str, code: &str) -> String {
    format!(
        "{app_scheme}://login-callback?code={}&type=oauth",
        urlencoding::encode(code)
    )
}

#[must_use]
pub fn email_target(app_scheme: &str, kind: TokenKind) -> String {
    format!("{app_scheme}://login-callback?type={kind}&status=success")
}

/// Produce exactly one outcome for the classified request.
///
/// Email actions await the provider's verification round-trip; all other
/// cases resolve without I/O. Verification failures are terminal, no retry.
#[instrument(skip(verifier, request))]
pub async fn dispatch(
    request: CallbackRequest,
    verifier: &dyn TokenVerifier,
    app_scheme: &str,
) -> CallbackOutcome {
    match request {
        CallbackRequest::ProviderError { error, description } => CallbackOutcome::Failure {
            display_message: format!(
                "Authentication failed: {}",
                description.unwrap_or(error)
            ),
        },
        CallbackRequest::OAuthCode { code } => CallbackOutcome::Redirect {
            target_url: oauth_target(app_scheme, &code),
        },
        CallbackRequest::EmailAction { kind, token } => {
            match verifier.verify_token(&token, kind).await {
                Ok(()) => {
                    debug!("verified {kind} token");

                    CallbackOutcome::Redirect {
                        target_url: email_target(app_scheme, kind),
                    }
                }
                Err(err) => CallbackOutcome::Failure {
                    display_message: format!("Verification failed: {err}"),
                },
            }
        }
        CallbackRequest::Unrecognized => CallbackOutcome::Failure {
            display_message: INVALID_PARAMS_MESSAGE.to_string(),
        },
    }
}
