//! Application-level configuration.
//!
//! Settings that control how chat turns behave, resolved once at startup
//! by the binary from the config file, the environment and CLI flags.

use chat_domain::{ApiEndpoints, ConnectionTarget, SessionIdentity};

/// Chat turn configuration.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    /// Chat endpoint base URL without query parameters.
    pub chat_url: String,
    /// Whether the server streams the response across several frames.
    pub stream_response: bool,
}

impl ChatSettings {
    pub fn new(endpoints: &ApiEndpoints, stream_response: bool) -> Self {
        Self {
            chat_url: endpoints.chat_url(),
            stream_response,
        }
    }

    /// Connection target for one session.
    pub fn target_for(&self, identity: &SessionIdentity) -> ConnectionTarget {
        ConnectionTarget::new(self.chat_url.clone(), identity.clone(), self.stream_response)
    }
}
