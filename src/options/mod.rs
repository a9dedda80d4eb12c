// ABOUTME: Resolved application options — connector type, settings, help flag.
// ABOUTME: Merges config file, environment, and CLI args by fixed precedence.

pub mod resolver;
pub mod schema;
pub mod tokenizer;

use std::collections::HashMap;
use std::fmt;

use crate::options::resolver::ResolvedFields;

/// Which language-model backend family is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectorType {
    #[default]
    Unknown,
    Anthropic,
    OpenAI,
    Ollama,
}

impl ConnectorType {
    /// Parse a connector name case-insensitively; unrecognized names map to
    /// `Unknown`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("anthropic") {
            Self::Anthropic
        } else if name.eq_ignore_ascii_case("openai") {
            Self::OpenAI
        } else if name.eq_ignore_ascii_case("ollama") {
            Self::Ollama
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::Anthropic => "Anthropic",
            Self::OpenAI => "OpenAI",
            Self::Ollama => "Ollama",
        };
        f.write_str(name)
    }
}

/// Resolved Anthropic settings. Absent fields are distinct from empty ones;
/// `max_tokens` stays a raw string until the validator parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnthropicSettings {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<String>,
}

impl AnthropicSettings {
    /// The token limit as an integer, if the raw value parses.
    pub fn max_tokens_value(&self) -> Option<i64> {
        self.max_tokens.as_deref()?.trim().parse().ok()
    }
}

/// Resolved OpenAI settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenAISettings {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<String>,
}

impl OpenAISettings {
    pub fn max_tokens_value(&self) -> Option<i64> {
        self.max_tokens.as_deref()?.trim().parse().ok()
    }
}

/// Resolved Ollama settings. No API key; the daemon is addressed by URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OllamaSettings {
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// The settings block of the active connector family.
///
/// Closed sum over families: the active variant carries its block, and
/// `Absent` means no source defined any field of the family (the original
/// host binds a null section in that case).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectorSettings {
    #[default]
    Absent,
    Anthropic(AnthropicSettings),
    OpenAI(OpenAISettings),
    Ollama(OllamaSettings),
}

/// The resolved, immutable result of one CLI invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub connector_type: ConnectorType,
    pub settings: ConnectorSettings,
    /// True iff at least one CLI token was neither a recognized flag nor a
    /// flag's value. Independent of validation outcome.
    pub help: bool,
}

impl AppOptions {
    /// Resolve options from the three precedence tiers: CLI arguments win
    /// over environment entries, which win over configuration entries.
    ///
    /// Pure and synchronous; both snapshots are supplied by the caller
    /// already materialized. Never fails — validation happens later, at the
    /// connector boundary.
    pub fn resolve(
        config: &HashMap<String, String>,
        env: &HashMap<String, String>,
        args: &[String],
    ) -> Self {
        let connector_type = env
            .get(schema::CONNECTOR_TYPE_KEY)
            .or_else(|| config.get(schema::CONNECTOR_TYPE_KEY))
            .map(|name| ConnectorType::from_name(name))
            .unwrap_or_default();

        let family = schema::for_connector(connector_type);
        let flags: Vec<&'static str> = family.map(|s| s.flags().collect()).unwrap_or_default();
        let outcome = tokenizer::scan(args, &flags);

        let settings = match family {
            Some(family) => {
                let resolved = resolver::resolve_fields(family, &outcome, env, config);
                build_settings(connector_type, &resolved)
            }
            None => ConnectorSettings::Absent,
        };

        Self {
            connector_type,
            settings,
            help: outcome.saw_unrecognized(),
        }
    }
}

fn build_settings(connector_type: ConnectorType, resolved: &ResolvedFields) -> ConnectorSettings {
    if resolved.is_empty() {
        return ConnectorSettings::Absent;
    }
    match connector_type {
        ConnectorType::Anthropic => ConnectorSettings::Anthropic(AnthropicSettings {
            api_key: resolved.to_owned_value("Anthropic:ApiKey"),
            model: resolved.to_owned_value("Anthropic:Model"),
            max_tokens: resolved.to_owned_value("Anthropic:MaxTokens"),
        }),
        ConnectorType::OpenAI => ConnectorSettings::OpenAI(OpenAISettings {
            api_key: resolved.to_owned_value("OpenAI:ApiKey"),
            model: resolved.to_owned_value("OpenAI:Model"),
            max_tokens: resolved.to_owned_value("OpenAI:MaxTokens"),
        }),
        ConnectorType::Ollama => ConnectorSettings::Ollama(OllamaSettings {
            base_url: resolved.to_owned_value("Ollama:BaseUrl"),
            model: resolved.to_owned_value("Ollama:Model"),
        }),
        ConnectorType::Unknown => ConnectorSettings::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn anthropic_config() -> HashMap<String, String> {
        map(&[
            ("ConnectorType", "Anthropic"),
            ("Anthropic:ApiKey", "config-api-key"),
            ("Anthropic:Model", "config-model"),
            ("Anthropic:MaxTokens", "1000"),
        ])
    }

    #[test]
    fn connector_type_parses_case_insensitively() {
        assert_eq!(ConnectorType::from_name("anthropic"), ConnectorType::Anthropic);
        assert_eq!(ConnectorType::from_name("OpenAI"), ConnectorType::OpenAI);
        assert_eq!(ConnectorType::from_name("OLLAMA"), ConnectorType::Ollama);
        assert_eq!(ConnectorType::from_name("bogus"), ConnectorType::Unknown);
        assert_eq!(ConnectorType::from_name(""), ConnectorType::Unknown);
    }

    #[test]
    fn env_connector_type_overrides_config() {
        let config = map(&[("ConnectorType", "Anthropic")]);
        let env = map(&[("ConnectorType", "Ollama")]);
        let options = AppOptions::resolve(&config, &env, &[]);
        assert_eq!(options.connector_type, ConnectorType::Ollama);
    }

    #[test]
    fn mixed_tiers_resolve_per_field() {
        // Config defines all three fields, env overrides the key, CLI
        // overrides the model; MaxTokens stays with config.
        let config = anthropic_config();
        let env = map(&[("Anthropic:ApiKey", "env-api-key")]);
        let cli = args(&["--anthropic-model", "cli-model"]);

        let options = AppOptions::resolve(&config, &env, &cli);

        assert_eq!(options.connector_type, ConnectorType::Anthropic);
        let ConnectorSettings::Anthropic(settings) = &options.settings else {
            panic!("expected Anthropic settings, got {:?}", options.settings);
        };
        assert_eq!(settings.api_key.as_deref(), Some("env-api-key"));
        assert_eq!(settings.model.as_deref(), Some("cli-model"));
        assert_eq!(settings.max_tokens.as_deref(), Some("1000"));
        assert!(!options.help);
    }

    #[test]
    fn no_sources_yield_absent_block() {
        let config = map(&[("ConnectorType", "Anthropic")]);
        let options = AppOptions::resolve(&config, &HashMap::new(), &[]);
        assert_eq!(options.connector_type, ConnectorType::Anthropic);
        assert_eq!(options.settings, ConnectorSettings::Absent);
    }

    #[test]
    fn unknown_connector_recognizes_no_flags() {
        let options = AppOptions::resolve(
            &HashMap::new(),
            &HashMap::new(),
            &args(&["--anthropic-model", "m"]),
        );
        assert_eq!(options.connector_type, ConnectorType::Unknown);
        assert_eq!(options.settings, ConnectorSettings::Absent);
        assert!(options.help);
    }

    #[test]
    fn help_is_independent_of_resolution_success() {
        let config = anthropic_config();
        let cli = args(&["--anthropic-api-key", "cli-api-key", "--unknown-flag"]);
        let options = AppOptions::resolve(&config, &HashMap::new(), &cli);

        assert!(options.help);
        let ConnectorSettings::Anthropic(settings) = &options.settings else {
            panic!("settings should still resolve");
        };
        assert_eq!(settings.api_key.as_deref(), Some("cli-api-key"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let config = anthropic_config();
        let env = map(&[("Anthropic:Model", "env-model")]);
        let cli = args(&["--anthropic-max-tokens", "-1"]);

        let first = AppOptions::resolve(&config, &env, &cli);
        let second = AppOptions::resolve(&config, &env, &cli);
        assert_eq!(first, second);
    }

    #[test]
    fn max_tokens_value_parses_or_declines() {
        let settings = AnthropicSettings {
            max_tokens: Some(" 2000 ".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.max_tokens_value(), Some(2000));

        let settings = AnthropicSettings {
            max_tokens: Some("not-a-number".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.max_tokens_value(), None);

        assert_eq!(AnthropicSettings::default().max_tokens_value(), None);
    }

    #[test]
    fn ollama_block_resolves_base_url_and_model() {
        let config = map(&[
            ("ConnectorType", "Ollama"),
            ("Ollama:BaseUrl", "http://localhost:11434"),
        ]);
        let cli = args(&["--ollama-model", "llama3"]);
        let options = AppOptions::resolve(&config, &HashMap::new(), &cli);

        let ConnectorSettings::Ollama(settings) = &options.settings else {
            panic!("expected Ollama settings");
        };
        assert_eq!(settings.base_url.as_deref(), Some("http://localhost:11434"));
        assert_eq!(settings.model.as_deref(), Some("llama3"));
    }
}
