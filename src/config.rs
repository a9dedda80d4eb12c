// ABOUTME: Configuration file loading for openchat.
// ABOUTME: Reads openchat.toml / ~/.openchat/config.toml into flat settings maps.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::options::schema;

/// Top-level configuration file.
///
/// Every field is optional: an absent key stays absent in the settings map so
/// the resolver can tell it apart from an empty value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub connector_type: Option<String>,
    pub anthropic: AnthropicSection,
    pub openai: OpenAISection,
    pub ollama: OllamaSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnthropicSection {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpenAISection {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OllamaSection {
    pub base_url: Option<String>,
    pub model: Option<String>,
}

impl Config {
    /// Load config from the first file found, falling back to defaults when
    /// no file exists.
    pub fn load() -> anyhow::Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path to the per-user config file.
    pub fn home_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".openchat")
            .join("config.toml")
    }

    /// Flatten into the dotted-key snapshot the resolver consumes. Only keys
    /// the file actually defines appear in the map.
    pub fn settings_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                map.insert(key.to_string(), value);
            }
        };

        put(schema::CONNECTOR_TYPE_KEY, self.connector_type.clone());

        put("Anthropic:ApiKey", self.anthropic.api_key.clone());
        put("Anthropic:Model", self.anthropic.model.clone());
        put(
            "Anthropic:MaxTokens",
            self.anthropic.max_tokens.map(|n| n.to_string()),
        );

        put("OpenAI:ApiKey", self.openai.api_key.clone());
        put("OpenAI:Model", self.openai.model.clone());
        put(
            "OpenAI:MaxTokens",
            self.openai.max_tokens.map(|n| n.to_string()),
        );

        put("Ollama:BaseUrl", self.ollama.base_url.clone());
        put("Ollama:Model", self.ollama.model.clone());

        map
    }
}

/// Local file first, then the per-user one.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("openchat.toml");
    if local.exists() {
        return Some(local);
    }

    let home = Config::home_config_path();
    if home.exists() {
        return Some(home);
    }

    None
}

/// Environment variable name for a dotted settings key: `Anthropic:ApiKey`
/// is looked up as `Anthropic__ApiKey`, matching the original host's
/// convention.
pub fn env_key_for(key: &str) -> String {
    key.replace(':', "__")
}

/// Snapshot the process environment for every declared settings key. The
/// core never reads the environment itself; this map is handed to it.
pub fn env_settings_map() -> HashMap<String, String> {
    let mut map = HashMap::new();
    let mut probe = |key: &'static str| {
        if let Ok(value) = std::env::var(env_key_for(key)) {
            map.insert(key.to_string(), value);
        }
    };

    probe(schema::CONNECTOR_TYPE_KEY);
    for family in schema::ALL {
        for field in family.fields {
            probe(field.key);
        }
    }

    map
}
