//! Transcript entities

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a message.
///
/// Upstream context may carry structured payloads (tool use blocks and the
/// like). They are kept in the transcript but never rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Structured(serde_json::Value),
}

impl MessageContent {
    /// Returns the text if this content is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(s) => Some(s),
            MessageContent::Structured(_) => None,
        }
    }
}

/// A message in a conversation (Entity)
///
/// Fields are private: a message cannot change once it has been created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: MessageContent,
}

impl Message {
    pub fn new(role: Role, content: MessageContent) -> Self {
        Self { role, content }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, MessageContent::Text(content.into()))
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, MessageContent::Text(content.into()))
    }

    pub fn structured(role: Role, payload: serde_json::Value) -> Self {
        Self::new(role, MessageContent::Structured(payload))
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    /// Shorthand for `content().as_text()`.
    pub fn text(&self) -> Option<&str> {
        self.content.as_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_constructors_set_role() {
        assert_eq!(Message::user("hi").role(), Role::User);
        assert_eq!(Message::assistant("hello").role(), Role::Assistant);
        assert_eq!(Message::user("hi").text(), Some("hi"));
    }

    #[test]
    fn structured_content_has_no_text() {
        let message = Message::structured(
            Role::Assistant,
            serde_json::json!([{"type": "tool_use", "name": "search"}]),
        );
        assert_eq!(message.text(), None);
    }

    #[test]
    fn content_serializes_untagged() {
        let text = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(text, serde_json::json!({"role": "user", "content": "hi"}));

        let parsed: Message = serde_json::from_value(serde_json::json!({
            "role": "assistant",
            "content": [{"type": "tool_result"}]
        }))
        .unwrap();
        assert!(matches!(parsed.content(), MessageContent::Structured(_)));
    }

    #[test]
    fn role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
