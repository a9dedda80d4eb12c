// ABOUTME: Ollama connector — local daemon, no API key, addressed by URL.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::client::ChatClient;
use crate::connectors::{require_text, LanguageModelConnector, SettingsError};
use crate::options::{ConnectorType, OllamaSettings};

pub struct OllamaConnector {
    settings: OllamaSettings,
}

impl OllamaConnector {
    pub fn new(settings: OllamaSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl LanguageModelConnector for OllamaConnector {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::Ollama
    }

    fn ensure_valid(&self) -> Result<(), SettingsError> {
        let family = ConnectorType::Ollama;
        require_text(family, "BaseUrl", self.settings.base_url.as_deref())?;
        require_text(family, "Model", self.settings.model.as_deref())?;
        Ok(())
    }

    async fn chat_client(&self) -> Result<Arc<dyn ChatClient>, SettingsError> {
        Ok(Arc::new(self.build_client()?))
    }
}

impl OllamaConnector {
    fn build_client(&self) -> Result<OllamaChatClient, SettingsError> {
        let base_url = require_text(
            ConnectorType::Ollama,
            "BaseUrl",
            self.settings.base_url.as_deref(),
        )?;
        let base_url = base_url.trim_end_matches('/').to_string();
        let model = self.settings.model.clone().unwrap_or_default();
        Ok(OllamaChatClient { base_url, model })
    }
}

/// Configured Ollama client capability.
#[derive(Debug)]
pub struct OllamaChatClient {
    base_url: String,
    model: String,
}

impl OllamaChatClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Display for OllamaChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.model, self.base_url)
    }
}

impl ChatClient for OllamaChatClient {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::Ollama
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> Option<u32> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_checked_before_model() {
        let connector = OllamaConnector::new(OllamaSettings::default());
        let err = connector.ensure_valid().unwrap_err();
        assert_eq!(err.to_string(), "missing configuration: Ollama:BaseUrl");

        let connector = OllamaConnector::new(OllamaSettings {
            base_url: Some("http://localhost:11434".to_string()),
            model: Some("  ".to_string()),
        });
        let err = connector.ensure_valid().unwrap_err();
        assert_eq!(err.to_string(), "missing configuration: Ollama:Model");
    }

    #[test]
    fn client_normalizes_trailing_slash() {
        let connector = OllamaConnector::new(OllamaSettings {
            base_url: Some("http://localhost:11434/".to_string()),
            model: Some("llama3".to_string()),
        });
        let client = connector.build_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434");
        assert_eq!(client.to_string(), "llama3 @ http://localhost:11434");
    }

    #[tokio::test]
    async fn client_carries_model_without_token_limit() {
        let connector = OllamaConnector::new(OllamaSettings {
            base_url: Some("http://localhost:11434".to_string()),
            model: Some("llama3".to_string()),
        });
        connector.ensure_valid().unwrap();
        let client = connector.chat_client().await.unwrap();
        assert_eq!(client.model(), "llama3");
        assert_eq!(client.max_tokens(), None);
        assert_eq!(client.connector_type(), ConnectorType::Ollama);
    }
}
