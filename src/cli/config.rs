use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use url::Url;

/// Deployment environment, controls whether configuration issues are
/// surfaced on the rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "development" => Self::Development,
            _ => Self::Production,
        }
    }
}

/// Runtime configuration, built once from CLI/environment at startup and
/// passed into the server and handlers.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider_url: String,
    pub provider_api_key: SecretString,
    pub app_name: String,
    pub app_scheme: String,
    pub support_email: String,
    pub analytics_id: Option<String>,
    pub environment: Environment,
}

/// A single configuration problem, keyed by the environment variable that
/// carries the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub var: &'static str,
    pub problem: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.var, self.problem)
    }
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

fn valid_scheme(scheme: &str) -> bool {
    Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").map_or(false, |re| re.is_match(scheme))
}

fn valid_analytics_id(id: &str) -> bool {
    Regex::new(r"^G-[A-Z0-9]+$").map_or(false, |re| re.is_match(id))
}

impl Config {
    /// Format-check the configuration. Issues are reported, never fatal: the
    /// service still starts so the page can tell the user something useful.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        match Url::parse(&self.provider_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => issues.push(ConfigIssue {
                var: "PONTE_PROVIDER_URL",
                problem: "must be a valid http(s) URL".to_string(),
            }),
        }

        // Provider anon keys are JWTs
        if !self.provider_api_key.expose_secret().starts_with("eyJ") {
            issues.push(ConfigIssue {
                var: "PONTE_PROVIDER_API_KEY",
                problem: "does not look like a provider API key".to_string(),
            });
        }

        if !valid_scheme(&self.app_scheme) {
            issues.push(ConfigIssue {
                var: "PONTE_APP_SCHEME",
                problem: "must be alphanumeric, starting with a letter".to_string(),
            });
        }

        if !valid_email(&self.support_email) {
            issues.push(ConfigIssue {
                var: "PONTE_SUPPORT_EMAIL",
                problem: "is not a valid email address".to_string(),
            });
        }

        if let Some(id) = &self.analytics_id {
            if !valid_analytics_id(id) {
                issues.push(ConfigIssue {
                    var: "PONTE_ANALYTICS_ID",
                    problem: "is not a valid measurement id".to_string(),
                });
            }
        }

        issues
    }

    /// Banner text for the rendered pages. Only non-production environments
    /// surface configuration problems to the browser.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        if self.environment == Environment::Production {
            return None;
        }

        let issues = self.validate();
        if issues.is_empty() {
            return None;
        }

        let list = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        Some(format!("Configuration error: {list}"))
    }

    /// Fallback deep link used by the manual "open app" actions.
    #[must_use]
    pub fn open_app_url(&self) -> String {
        format!("{}://login-callback/", self.app_scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            provider_url: "https://project.supabase.co".to_string(),
            provider_api_key: SecretString::from("eyJhbGciOiJIUzI1NiJ9.e30.sig"),
            app_name: "FanApp".to_string(),
            app_scheme: "fanapp".to_string(),
            support_email: "support@fanapp.dev".to_string(),
            analytics_id: None,
            environment: Environment::Production,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_empty());
    }

    #[test]
    fn test_invalid_provider_url() {
        let mut config = config();
        config.provider_url = "not-a-url".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].var, "PONTE_PROVIDER_URL");
    }

    #[test]
    fn test_invalid_api_key() {
        let mut config = config();
        config.provider_api_key = SecretString::from("hunter2");
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].var, "PONTE_PROVIDER_API_KEY");
    }

    #[test]
    fn test_invalid_scheme() {
        let mut config = config();
        config.app_scheme = "fan-app".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].var, "PONTE_APP_SCHEME");

        config.app_scheme = "1fanapp".to_string();
        assert_eq!(config.validate().len(), 1);
    }

    #[test]
    fn test_invalid_support_email() {
        let mut config = config();
        config.support_email = "not-an-email".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].var, "PONTE_SUPPORT_EMAIL");
    }

    #[test]
    fn test_invalid_analytics_id() {
        let mut config = config();
        config.analytics_id = Some("UA-12345".to_string());
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].var, "PONTE_ANALYTICS_ID");

        config.analytics_id = Some("G-ABC123".to_string());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_banner_production_is_silent() {
        let mut config = config();
        config.provider_url = "not-a-url".to_string();
        assert!(config.banner().is_none());
    }

    #[test]
    fn test_banner_development_reports_issues() {
        let mut config = config();
        config.environment = Environment::Development;
        assert!(config.banner().is_none());

        config.provider_url = "not-a-url".to_string();
        let banner = config.banner().unwrap();
        assert!(banner.contains("PONTE_PROVIDER_URL"));
    }

    #[test]
    fn test_open_app_url() {
        assert_eq!(config().open_app_url(), "fanapp://login-callback/");
    }

    #[test]
    fn test_environment_from_arg() {
        assert_eq!(
            Environment::from_arg("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_arg("production"), Environment::Production);
        assert_eq!(Environment::from_arg("anything"), Environment::Production);
    }
}
