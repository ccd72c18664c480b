//! API host configuration from TOML (`[api]` section)

use chat_domain::{
    ApiEndpoints, ConfigIssue, ConfigIssueCode, DEFAULT_DEV_HOST, DEFAULT_PROD_HOST, Environment,
};
use serde::{Deserialize, Serialize};

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Environment name; only `prod` selects the production host
    pub environment: String,
    /// Production host (no scheme)
    pub prod_host: String,
    /// Development host (no scheme)
    pub dev_host: String,
    /// Use `https`/`wss`; turn off for local servers
    pub tls: bool,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Prod.as_str().to_string(),
            prod_host: DEFAULT_PROD_HOST.to_string(),
            dev_host: DEFAULT_DEV_HOST.to_string(),
            tls: true,
        }
    }
}

impl FileApiConfig {
    pub fn environment(&self) -> Environment {
        Environment::from_name(self.environment.trim())
    }

    /// Endpoints for the configured environment.
    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::for_environment(self.environment(), &self.prod_host, &self.dev_host)
            .with_tls(self.tls)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let selected = self.environment();
        for (environment, field, host) in [
            (Environment::Prod, "api.prod_host", &self.prod_host),
            (Environment::Dev, "api.dev_host", &self.dev_host),
        ] {
            if !host.trim().is_empty() {
                continue;
            }
            let code = ConfigIssueCode::EmptyHost {
                field: field.to_string(),
            };
            // Every request goes to the selected host
            issues.push(if environment == selected {
                ConfigIssue::error(
                    code,
                    format!("{} is empty but the {} environment is selected", field, selected),
                )
            } else {
                ConfigIssue::warning(
                    code,
                    format!("{} is empty; requests to this environment will fail", field),
                )
            });
        }

        let name = self.environment.trim();
        if name != "prod" && name != "dev" {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownEnvironment {
                    value: self.environment.clone(),
                },
                format!(
                    "api.environment: unknown value '{}', using the dev host",
                    self.environment
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_domain::Severity;

    #[test]
    fn test_default_is_prod_over_tls() {
        let api = FileApiConfig::default();
        assert_eq!(api.environment(), Environment::Prod);
        assert_eq!(api.endpoints().config_url(), "https://api.speciate.com/v1/configs/");
    }

    #[test]
    fn test_any_other_name_selects_dev() {
        let api = FileApiConfig {
            environment: "staging".to_string(),
            ..Default::default()
        };
        assert_eq!(api.environment(), Environment::Dev);
        assert_eq!(api.endpoints().host(), DEFAULT_DEV_HOST);

        let issues = api.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::UnknownEnvironment { .. }
        ));
    }

    #[test]
    fn test_empty_selected_host_is_an_error() {
        let api = FileApiConfig {
            prod_host: String::new(),
            ..Default::default()
        };
        let issues = api.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(ConfigIssue::has_errors(&issues));

        let dev = FileApiConfig {
            environment: "dev".to_string(),
            ..api
        };
        let issues = dev.validate();
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_empty_host_warns() {
        let api = FileApiConfig {
            dev_host: " ".to_string(),
            ..Default::default()
        };
        let issues = api.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyHost {
                field: "api.dev_host".to_string()
            }
        );
    }
}
