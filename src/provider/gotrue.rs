use crate::provider::{TokenKind, TokenVerifier};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use tracing::{debug, instrument};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Client for the GoTrue `/auth/v1/verify` endpoint (Supabase auth server).
pub struct GoTrueVerifier {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl GoTrueVerifier {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(base_url: &str, api_key: SecretString) -> Result<Self> {
        // GoTrue answers a successful verify with a redirect to the
        // configured redirect_to URL, which can be a non-http deep link
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

// GoTrue reports errors as {"code": ..., "msg": ...} or
// {"error": ..., "error_description": ...} depending on the endpoint version
fn error_message(body: &Value) -> Option<String> {
    for key in ["msg", "error_description", "error"] {
        if let Some(message) = body[key].as_str() {
            if !message.is_empty() {
                return Some(message.to_string());
            }
        }
    }

    None
}

#[async_trait]
impl TokenVerifier for GoTrueVerifier {
    #[instrument(skip(self, token_hash))]
    async fn verify_token(&self, token_hash: &str, kind: TokenKind) -> Result<()> {
        let verify_url = format!("{}/auth/v1/verify", self.base_url);

        let payload = json!({
            "type": kind.as_str(),
            "token_hash": token_hash,
        });

        let response = self
            .client
            .post(&verify_url)
            .header("apikey", self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() || status.is_redirection() {
            debug!("token verified: kind={kind}");

            return Ok(());
        }

        let json_response: Value = response.json().await.unwrap_or(Value::Null);

        Err(anyhow!(
            "{}",
            error_message(&json_response).unwrap_or_else(|| status.to_string())
        ))
    }
}
