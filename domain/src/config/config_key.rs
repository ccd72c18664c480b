//! Registry of the remote configuration keys the front-end reads.
//!
//! The config service publishes many dotted keys; only the ones listed here
//! are displayed.

/// Metadata for a single remote config key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    /// Dotted key path (e.g., `"LLM.MODEL_NAME"`).
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

pub const MODEL_NAME: &str = "LLM.MODEL_NAME";
pub const CONTEXT_LOG_COUNT: &str = "LLM.CONTEXT_LOG_COUNT";
pub const CONTEXT_CHAT_COUNT: &str = "LLM.CONTEXT_CHAT_COUNT";

/// All consumed remote keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

static KNOWN_KEYS: [ConfigKeyInfo; 3] = [
    ConfigKeyInfo {
        key: MODEL_NAME,
        description: "Model serving the chat agent",
    },
    ConfigKeyInfo {
        key: CONTEXT_LOG_COUNT,
        description: "Number of recent logs read into the agent context",
    },
    ConfigKeyInfo {
        key: CONTEXT_CHAT_COUNT,
        description: "Number of recent chats read into the agent context",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_in_display_order() {
        let keys: Vec<_> = known_keys().iter().map(|k| k.key).collect();
        assert_eq!(keys, vec![MODEL_NAME, CONTEXT_LOG_COUNT, CONTEXT_CHAT_COUNT]);
    }
}
