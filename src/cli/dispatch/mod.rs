use crate::cli::{
    actions::Action,
    config::{Config, Environment},
};
use anyhow::Result;
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let required = |name: &str| -> Result<String> {
        matches
            .get_one::<String>(name)
            .map(String::to_string)
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{name}"))
    };

    let config = Config {
        provider_url: required("provider-url")?,
        provider_api_key: SecretString::from(required("provider-api-key")?),
        app_name: required("app-name")?,
        app_scheme: required("app-scheme")?,
        support_email: required("support-email")?,
        analytics_id: matches
            .get_one::<String>("analytics-id")
            .map(String::to_string),
        environment: Environment::from_arg(&required("environment")?),
    };

    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        config,
    })
}
