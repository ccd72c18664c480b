//! Deployment environment and the API endpoints it selects.

use serde::{Deserialize, Serialize};

/// Default production API host
pub const DEFAULT_PROD_HOST: &str = "api.speciate.com";

/// Default development API host
pub const DEFAULT_DEV_HOST: &str = "dev.api.speciate.com";

const CONFIG_PATH: &str = "/v1/configs/";
const CHAT_PATH: &str = "/v1/chat-agents/chat-message";

/// Deployment environment (Value Object)
///
/// Only the literal name `prod` selects production; every other name
/// selects the development host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Prod,
    Dev,
}

impl Environment {
    pub fn from_name(name: &str) -> Self {
        if name == "prod" {
            Environment::Prod
        } else {
            Environment::Dev
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Prod => "prod",
            Environment::Dev => "dev",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base URLs of the config and chat endpoints for one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    host: String,
    tls: bool,
}

impl ApiEndpoints {
    /// Endpoints on `host` over TLS (`https` / `wss`).
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            tls: true,
        }
    }

    /// Resolve the host for an environment.
    pub fn for_environment(environment: Environment, prod_host: &str, dev_host: &str) -> Self {
        match environment {
            Environment::Prod => Self::new(prod_host),
            Environment::Dev => Self::new(dev_host),
        }
    }

    /// Toggle TLS; plain `http` / `ws` is for local servers.
    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `GET` target of the config provider.
    pub fn config_url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{}://{}{}", scheme, self.host, CONFIG_PATH)
    }

    /// Base of the chat WebSocket endpoint, without query parameters.
    pub fn chat_url(&self) -> String {
        let scheme = if self.tls { "wss" } else { "ws" };
        format!("{}://{}{}", scheme, self.host, CHAT_PATH)
    }
}
