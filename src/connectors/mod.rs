// ABOUTME: Connector trait, settings validation, and the chat-client factory.
// ABOUTME: One connector per backend family, dispatched from resolved options.

mod anthropic;
mod ollama;
mod openai;

pub use anthropic::{AnthropicChatClient, AnthropicConnector};
pub use ollama::{OllamaChatClient, OllamaConnector};
pub use openai::{OpenAIChatClient, OpenAIConnector};

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::client::ChatClient;
use crate::options::{AppOptions, ConnectorSettings, ConnectorType};

/// Why a resolved settings block cannot be used.
///
/// Deterministic function of the inputs — retrying without changing them is
/// pointless, so callers report and abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The active family's settings block was never populated.
    #[error("missing configuration: {0}")]
    MissingConfiguration(ConnectorType),
    /// A required field is absent, empty, or whitespace-only.
    #[error("missing configuration: {family}:{field}")]
    MissingField {
        family: ConnectorType,
        field: &'static str,
    },
    /// A required numeric field is absent or not a positive integer.
    #[error("missing or invalid configuration: {family}:{field}: must be a positive integer")]
    InvalidPositiveInt {
        family: ConnectorType,
        field: &'static str,
    },
    /// No connector is registered for the selected type.
    #[error("connector type {0} is not supported")]
    UnsupportedConnector(ConnectorType),
}

/// A backend family: validates its settings block and builds the chat client.
#[async_trait]
pub trait LanguageModelConnector: Send + Sync {
    fn connector_type(&self) -> ConnectorType;

    /// Check the settings block against the family's rules. Fields are
    /// checked in declared order and the first violation wins, so error
    /// messages are deterministic. No side effects.
    fn ensure_valid(&self) -> Result<(), SettingsError>;

    /// Build the chat-client capability. Only called after `ensure_valid`;
    /// still re-checks its credential so a bypassed validation fails here.
    async fn chat_client(&self) -> Result<Arc<dyn ChatClient>, SettingsError>;
}

/// Select the connector for the resolved options.
///
/// An `Unknown` connector type is unsupported; a known type whose settings
/// block is absent is a missing-configuration error.
pub fn connector_for(
    options: &AppOptions,
) -> Result<Box<dyn LanguageModelConnector>, SettingsError> {
    match options.connector_type {
        ConnectorType::Unknown => Err(SettingsError::UnsupportedConnector(ConnectorType::Unknown)),
        ConnectorType::Anthropic => match &options.settings {
            ConnectorSettings::Anthropic(settings) => {
                Ok(Box::new(AnthropicConnector::new(settings.clone())))
            }
            _ => Err(SettingsError::MissingConfiguration(ConnectorType::Anthropic)),
        },
        ConnectorType::OpenAI => match &options.settings {
            ConnectorSettings::OpenAI(settings) => {
                Ok(Box::new(OpenAIConnector::new(settings.clone())))
            }
            _ => Err(SettingsError::MissingConfiguration(ConnectorType::OpenAI)),
        },
        ConnectorType::Ollama => match &options.settings {
            ConnectorSettings::Ollama(settings) => {
                Ok(Box::new(OllamaConnector::new(settings.clone())))
            }
            _ => Err(SettingsError::MissingConfiguration(ConnectorType::Ollama)),
        },
    }
}

/// Validate the resolved options for the active family: block presence first,
/// then each required field in declared order.
pub fn validate(options: &AppOptions) -> Result<(), SettingsError> {
    connector_for(options)?.ensure_valid()
}

/// Validate and build the chat client for the active family. The client
/// construction is awaited exactly once per invocation.
pub async fn create_chat_client(
    options: &AppOptions,
) -> Result<Arc<dyn ChatClient>, SettingsError> {
    let connector = connector_for(options)?;
    connector.ensure_valid()?;
    connector.chat_client().await
}

/// A required text field must be present and not blank.
fn require_text<'a>(
    family: ConnectorType,
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, SettingsError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SettingsError::MissingField { family, field }),
    }
}

/// A required numeric field must be present and parse as a positive integer.
fn require_positive_int(
    family: ConnectorType,
    field: &'static str,
    value: Option<&str>,
) -> Result<u32, SettingsError> {
    let err = SettingsError::InvalidPositiveInt { family, field };
    let raw = value.ok_or_else(|| err.clone())?;
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).map_err(|_| err),
        _ => Err(err),
    }
}
