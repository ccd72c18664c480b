//! Display Config use case.
//!
//! Fetches the remote configuration and renders the config panel. Any
//! failure skips the panel: it is logged, never shown to the user, and
//! never blocks chat.

use crate::ports::config_provider::{ConfigFetchError, ConfigProvider};
use crate::ports::surface::ChatSurface;
use chat_domain::ConfigPanel;
use chat_domain::config::config_key::known_keys;
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for showing the config panel.
pub struct DisplayConfigUseCase {
    provider: Arc<dyn ConfigProvider>,
}

impl DisplayConfigUseCase {
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self { provider }
    }

    /// Fetch and build the panel without rendering it.
    pub async fn load(&self, has_identity: bool) -> Result<ConfigPanel, ConfigFetchError> {
        let config = self.provider.fetch().await?;
        debug!("Fetched {} remote config keys", config.len());
        for info in known_keys() {
            if config.get(info.key).is_none() {
                debug!("Remote config lacks {} ({})", info.key, info.description);
            }
        }
        Ok(ConfigPanel::from_remote(&config, has_identity)?)
    }

    /// Fetch, build and render the panel. Returns `None` when it was skipped.
    pub async fn execute(&self, has_identity: bool, surface: &dyn ChatSurface) -> Option<ConfigPanel> {
        match self.load(has_identity).await {
            Ok(panel) => {
                surface.show_config_panel(&panel);
                Some(panel)
            }
            Err(e) => {
                warn!("Skipping config panel: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::surface::ResponseObserver;
    use async_trait::async_trait;
    use chat_domain::{Message, RemoteConfig};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct StaticProvider(Mutex<Option<Result<RemoteConfig, ConfigFetchError>>>);

    impl StaticProvider {
        fn new(result: Result<RemoteConfig, ConfigFetchError>) -> Self {
            Self(Mutex::new(Some(result)))
        }
    }

    #[async_trait]
    impl ConfigProvider for StaticProvider {
        async fn fetch(&self) -> Result<RemoteConfig, ConfigFetchError> {
            self.0
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(ConfigFetchError::RequestFailed("fetched twice".to_string())))
        }
    }

    #[derive(Default)]
    struct PanelRecorder {
        panels: Mutex<Vec<ConfigPanel>>,
    }

    impl ResponseObserver for PanelRecorder {
        fn on_partial(&self, _buffer: &str) {}
    }

    impl ChatSurface for PanelRecorder {
        fn show_title(&self) {}

        fn show_config_panel(&self, panel: &ConfigPanel) {
            self.panels.lock().unwrap().push(panel.clone());
        }

        fn show_message(&self, _message: &Message) {}

        fn show_turn_failed(&self, _reason: &str, _partial: Option<&str>) {}
    }

    fn config(pairs: &[(&str, serde_json::Value)]) -> RemoteConfig {
        RemoteConfig::from_values(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[tokio::test]
    async fn test_renders_panel_with_context() {
        let provider = StaticProvider::new(Ok(config(&[
            ("LLM.MODEL_NAME", serde_json::json!("gpt")),
            ("LLM.CONTEXT_LOG_COUNT", serde_json::json!(10)),
            ("LLM.CONTEXT_CHAT_COUNT", serde_json::json!(4)),
        ])));
        let surface = PanelRecorder::default();

        let panel = DisplayConfigUseCase::new(Arc::new(provider))
            .execute(true, &surface)
            .await
            .unwrap();

        assert_eq!(panel.model_name, "gpt");
        assert_eq!(surface.panels.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_without_identity_only_model_is_required() {
        let provider = StaticProvider::new(Ok(config(&[(
            "LLM.MODEL_NAME",
            serde_json::json!("gpt"),
        )])));
        let surface = PanelRecorder::default();

        let panel = DisplayConfigUseCase::new(Arc::new(provider))
            .execute(false, &surface)
            .await
            .unwrap();

        assert_eq!(panel.context, None);
    }

    #[tokio::test]
    async fn test_http_error_skips_panel() {
        let provider = StaticProvider::new(Err(ConfigFetchError::HttpStatus { status: 503 }));
        let surface = PanelRecorder::default();

        let panel = DisplayConfigUseCase::new(Arc::new(provider))
            .execute(true, &surface)
            .await;

        assert!(panel.is_none());
        assert!(surface.panels.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_counts_skip_panel() {
        let provider = StaticProvider::new(Ok(config(&[(
            "LLM.MODEL_NAME",
            serde_json::json!("gpt"),
        )])));

        let result = DisplayConfigUseCase::new(Arc::new(provider)).load(true).await;

        assert!(matches!(result, Err(ConfigFetchError::Invalid(_))));
    }
}
