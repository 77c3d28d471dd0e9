//! Askama templates for the three pages and their shared bits.

use crate::provider::TokenKind;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Landing page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub app_name: String,
    pub open_app_url: String,
    pub support_email: String,
    pub analytics_id: Option<String>,
    pub banner: Option<String>,
}

/// Callback page: a spinner while processing, or the error state with the
/// manual recovery actions.
#[derive(Template)]
#[template(path = "callback.html")]
pub struct CallbackTemplate {
    pub app_name: String,
    pub processing: bool,
    pub message: String,
    pub open_app_url: String,
    pub support_email: String,
    pub analytics_id: Option<String>,
    pub banner: Option<String>,
}

/// Success page with the auto-redirect countdown.
#[derive(Template)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    pub app_name: String,
    pub title: &'static str,
    pub message: &'static str,
    pub button_text: &'static str,
    pub target_url: String,
    pub countdown_from: u32,
    pub analytics_id: Option<String>,
    pub banner: Option<String>,
}

pub struct SuccessCopy {
    pub title: &'static str,
    pub message: &'static str,
    pub button_text: &'static str,
}

/// Per-kind copy for the success page.
#[must_use]
pub fn success_copy(kind: Option<TokenKind>) -> SuccessCopy {
    match kind {
        Some(TokenKind::Signup) => SuccessCopy {
            title: "Email Verified Successfully!",
            message: "Your email has been verified. You can now use all features of the app.",
            button_text: "Open App",
        },
        Some(TokenKind::Recovery) => SuccessCopy {
            title: "Password Reset Ready!",
            message: "You can now set a new password in the app.",
            button_text: "Open App to Reset Password",
        },
        Some(TokenKind::Magiclink) => SuccessCopy {
            title: "Login Confirmed!",
            message: "Your sign-in link has been verified. Continue in the app.",
            button_text: "Open App",
        },
        None => SuccessCopy {
            title: "Success!",
            message: "Your action was completed successfully.",
            button_text: "Open App",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_copy_per_kind() {
        assert_eq!(
            success_copy(Some(TokenKind::Signup)).title,
            "Email Verified Successfully!"
        );
        assert_eq!(
            success_copy(Some(TokenKind::Recovery)).button_text,
            "Open App to Reset Password"
        );
        assert_eq!(
            success_copy(Some(TokenKind::Magiclink)).title,
            "Login Confirmed!"
        );
        assert_eq!(success_copy(None).title, "Success!");
    }

    #[test]
    fn test_callback_template_error_state() {
        let html = CallbackTemplate {
            app_name: "FanApp".to_string(),
            processing: false,
            message: "Authentication failed: user cancelled".to_string(),
            open_app_url: "fanapp://login-callback/".to_string(),
            support_email: "support@fanapp.dev".to_string(),
            analytics_id: None,
            banner: None,
        }
        .render()
        .unwrap();

        assert!(html.contains("Authentication failed: user cancelled"));
        assert!(html.contains("Try Opening App"));
        assert!(html.contains("mailto:support@fanapp.dev"));
        assert!(!html.contains("googletagmanager"));
    }

    #[test]
    fn test_callback_template_processing_state() {
        let html = CallbackTemplate {
            app_name: "FanApp".to_string(),
            processing: true,
            message: "Processing your request...".to_string(),
            open_app_url: "fanapp://login-callback/".to_string(),
            support_email: "support@fanapp.dev".to_string(),
            analytics_id: None,
            banner: None,
        }
        .render()
        .unwrap();

        assert!(html.contains("Processing your request..."));
        assert!(!html.contains("Try Opening App"));
    }

    #[test]
    fn test_success_template_countdown_wiring() {
        let html = SuccessTemplate {
            app_name: "FanApp".to_string(),
            title: "Email Verified Successfully!",
            message: "Your email has been verified. You can now use all features of the app.",
            button_text: "Open App",
            target_url: "fanapp://login-callback?type=signup&status=success".to_string(),
            countdown_from: 5,
            analytics_id: None,
            banner: None,
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"data-from="5""#));
        // attribute values are HTML-escaped
        assert!(html.contains("fanapp://login-callback?type=signup&amp;status=success"));
        assert!(html.contains("Close Page"));
    }

    #[test]
    fn test_index_template_analytics_and_banner() {
        let html = IndexTemplate {
            app_name: "FanApp".to_string(),
            open_app_url: "fanapp://login-callback/".to_string(),
            support_email: "support@fanapp.dev".to_string(),
            analytics_id: Some("G-ABC123".to_string()),
            banner: Some("Configuration error: PONTE_PROVIDER_URL".to_string()),
        }
        .render()
        .unwrap();

        assert!(html.contains("googletagmanager.com/gtag/js?id=G-ABC123"));
        assert!(html.contains("Configuration error: PONTE_PROVIDER_URL"));
        assert!(html.contains("fanapp://login-callback/"));
    }
}
