//! Session identity and the chat connection target built from it.

use crate::core::error::DomainError;
use url::Url;

/// The user and chat a session belongs to (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionIdentity {
    user_id: String,
    chat_id: String,
}

impl SessionIdentity {
    pub fn new(user_id: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Build an identity from optional parts.
    ///
    /// Blank values count as absent, so a session with a missing id never
    /// reaches the chat endpoint.
    pub fn from_parts(
        user_id: Option<&str>,
        chat_id: Option<&str>,
    ) -> Result<Self, DomainError> {
        let user_id = user_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DomainError::MissingIdentity("user_id"))?;
        let chat_id = chat_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DomainError::MissingIdentity("chat_id"))?;
        Ok(Self::new(user_id, chat_id))
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

impl std::fmt::Display for SessionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.user_id, self.chat_id)
    }
}

/// Where a chat turn connects to (Value Object)
///
/// The streaming flag travels in the query string with Python-style
/// capitalisation (`True` / `False`), which is what the chat service parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    base_url: String,
    identity: SessionIdentity,
    stream_response: bool,
}

impl ConnectionTarget {
    pub fn new(base_url: impl Into<String>, identity: SessionIdentity, stream_response: bool) -> Self {
        Self {
            base_url: base_url.into(),
            identity,
            stream_response,
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn stream_response(&self) -> bool {
        self.stream_response
    }

    /// Full URL including the session query parameters.
    pub fn to_url(&self) -> Result<Url, DomainError> {
        let flag = if self.stream_response { "True" } else { "False" };
        Url::parse_with_params(
            &self.base_url,
            &[
                ("user_id", self.identity.user_id()),
                ("chat_id", self.identity.chat_id()),
                ("stream_response", flag),
            ],
        )
        .map_err(|e| DomainError::InvalidEndpoint(format!("{}: {}", self.base_url, e)))
    }
}
