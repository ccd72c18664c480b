//! Chat session configuration from TOML (`[chat]` section)

use chat_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// User the chat belongs to
    pub user_id: Option<String>,
    /// Chat to continue
    pub chat_id: Option<String>,
    /// Ask the server to stream the response across several frames
    pub stream_response: bool,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            user_id: None,
            chat_id: None,
            stream_response: true,
        }
    }
}

impl FileChatConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

        let missing = match (present(&self.user_id), present(&self.chat_id)) {
            (true, false) => "chat.chat_id",
            (false, true) => "chat.user_id",
            _ => return Vec::new(),
        };

        vec![ConfigIssue::warning(
            ConfigIssueCode::PartialIdentity {
                missing: missing.to_string(),
            },
            format!("{} is not set; the chat will not start without it", missing),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_identity_warns() {
        let chat = FileChatConfig {
            user_id: Some("u1".to_string()),
            ..Default::default()
        };
        let issues = chat.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::PartialIdentity {
                missing: "chat.chat_id".to_string()
            }
        );
    }

    #[test]
    fn test_absent_identity_is_fine() {
        assert!(FileChatConfig::default().validate().is_empty());
    }
}
