// ABOUTME: Anthropic connector — validates resolved settings and builds the
// ABOUTME: chat-client capability for the Anthropic backend family.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::client::ChatClient;
use crate::connectors::{
    require_positive_int, require_text, LanguageModelConnector, SettingsError,
};
use crate::options::{AnthropicSettings, ConnectorType};

pub struct AnthropicConnector {
    settings: AnthropicSettings,
}

impl AnthropicConnector {
    pub fn new(settings: AnthropicSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl LanguageModelConnector for AnthropicConnector {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::Anthropic
    }

    fn ensure_valid(&self) -> Result<(), SettingsError> {
        let family = ConnectorType::Anthropic;
        require_text(family, "ApiKey", self.settings.api_key.as_deref())?;
        require_text(family, "Model", self.settings.model.as_deref())?;
        require_positive_int(family, "MaxTokens", self.settings.max_tokens.as_deref())?;
        Ok(())
    }

    async fn chat_client(&self) -> Result<Arc<dyn ChatClient>, SettingsError> {
        let api_key = require_text(
            ConnectorType::Anthropic,
            "ApiKey",
            self.settings.api_key.as_deref(),
        )?
        .to_string();
        let model = self.settings.model.clone().unwrap_or_default();
        let max_tokens = self
            .settings
            .max_tokens_value()
            .and_then(|n| u32::try_from(n).ok());

        Ok(Arc::new(AnthropicChatClient {
            api_key,
            model,
            max_tokens,
        }))
    }
}

/// Configured Anthropic client capability.
pub struct AnthropicChatClient {
    api_key: String,
    model: String,
    max_tokens: Option<u32>,
}

impl AnthropicChatClient {
    /// The credential the transport layer authenticates with.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for AnthropicChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicChatClient")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl ChatClient for AnthropicChatClient {
    fn connector_type(&self) -> ConnectorType {
        ConnectorType::Anthropic
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn max_tokens(&self) -> Option<u32> {
        self.max_tokens
    }
}
