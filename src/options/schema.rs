// ABOUTME: Per-connector-family settings schema.
// ABOUTME: Declares config keys, CLI flag spellings, and value kinds.

use crate::options::ConnectorType;

/// How a field's resolved value is interpreted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text (API keys, model names, URLs).
    Text,
    /// Must parse as a positive integer at validation time.
    PositiveInt,
}

/// One declared setting of a connector family.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Dotted configuration key, e.g. `Anthropic:ApiKey`.
    pub key: &'static str,
    /// CLI flag spelling, e.g. `--anthropic-api-key`.
    pub flag: &'static str,
    pub kind: FieldKind,
}

/// The declared fields of one connector family, in validation order.
#[derive(Debug, Clone, Copy)]
pub struct FamilySchema {
    pub connector: ConnectorType,
    pub fields: &'static [FieldSpec],
}

impl FamilySchema {
    /// The CLI flag spellings this family recognizes.
    pub fn flags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.flag)
    }
}

/// Top-level configuration key selecting the active connector family.
pub const CONNECTOR_TYPE_KEY: &str = "ConnectorType";

pub const ANTHROPIC: FamilySchema = FamilySchema {
    connector: ConnectorType::Anthropic,
    fields: &[
        FieldSpec {
            key: "Anthropic:ApiKey",
            flag: "--anthropic-api-key",
            kind: FieldKind::Text,
        },
        FieldSpec {
            key: "Anthropic:Model",
            flag: "--anthropic-model",
            kind: FieldKind::Text,
        },
        FieldSpec {
            key: "Anthropic:MaxTokens",
            flag: "--anthropic-max-tokens",
            kind: FieldKind::PositiveInt,
        },
    ],
};

pub const OPENAI: FamilySchema = FamilySchema {
    connector: ConnectorType::OpenAI,
    fields: &[
        FieldSpec {
            key: "OpenAI:ApiKey",
            flag: "--openai-api-key",
            kind: FieldKind::Text,
        },
        FieldSpec {
            key: "OpenAI:Model",
            flag: "--openai-model",
            kind: FieldKind::Text,
        },
        FieldSpec {
            key: "OpenAI:MaxTokens",
            flag: "--openai-max-tokens",
            kind: FieldKind::PositiveInt,
        },
    ],
};

pub const OLLAMA: FamilySchema = FamilySchema {
    connector: ConnectorType::Ollama,
    fields: &[
        FieldSpec {
            key: "Ollama:BaseUrl",
            flag: "--ollama-base-url",
            kind: FieldKind::Text,
        },
        FieldSpec {
            key: "Ollama:Model",
            flag: "--ollama-model",
            kind: FieldKind::Text,
        },
    ],
};

/// All known family schemas, used for usage text and env snapshotting.
pub const ALL: &[FamilySchema] = &[ANTHROPIC, OPENAI, OLLAMA];

/// Schema for the given connector family, if one is registered.
pub fn for_connector(connector: ConnectorType) -> Option<&'static FamilySchema> {
    ALL.iter().find(|s| s.connector == connector)
}
