// ABOUTME: OpenAI connector — same validation shape as Anthropic.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::client::ChatClient;
use crate::connectors::{
    require_positive_int, require_text, LanguageModelConnector, SettingsError,
};
use crate::options::{ConnectorType, OpenAISettings};

pub struct OpenAIConnector {
    settings: OpenAISettings,
}

impl OpenAIConnector {
    pub fn new(settings: OpenAISettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl LanguageModelConnector for OpenAIConnector {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::OpenAI
    }

    fn ensure_valid(&self) -> Result<(), SettingsError> {
        let family = ConnectorType::OpenAI;
        require_text(family, "ApiKey", self.settings.api_key.as_deref())?;
        require_text(family, "Model", self.settings.model.as_deref())?;
        require_positive_int(family, "MaxTokens", self.settings.max_tokens.as_deref())?;
        Ok(())
    }

    async fn chat_client(&self) -> Result<Arc<dyn ChatClient>, SettingsError> {
        let api_key = require_text(
            ConnectorType::OpenAI,
            "ApiKey",
            self.settings.api_key.as_deref(),
        )?
        .to_string();
        let model = self.settings.model.clone().unwrap_or_default();
        let max_tokens = self
            .settings
            .max_tokens_value()
            .and_then(|n| u32::try_from(n).ok());

        Ok(Arc::new(OpenAIChatClient {
            api_key,
            model,
            max_tokens,
        }))
    }
}

/// Configured OpenAI client capability.
pub struct OpenAIChatClient {
    api_key: String,
    model: String,
    max_tokens: Option<u32>,
}

impl OpenAIChatClient {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for OpenAIChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAIChatClient")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl ChatClient for OpenAIChatClient {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::OpenAI
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }
}
