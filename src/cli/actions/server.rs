use crate::cli::actions::Action;
use crate::ponte;
use crate::provider::{GoTrueVerifier, TokenVerifier};
use anyhow::Result;
use std::sync::Arc;
use tracing::error;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, config } => {
            // Configuration problems are reported but never stop the relay,
            // the pages stay up so users get a readable message.
            for issue in config.validate() {
                error!("configuration: {issue}");
            }

            let verifier: Arc<dyn TokenVerifier> = Arc::new(GoTrueVerifier::new(
                &config.provider_url,
                config.provider_api_key.clone(),
            )?);

            ponte::new(port, config, verifier).await?;
        }
    }

    Ok(())
}
