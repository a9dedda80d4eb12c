// ABOUTME: Precedence resolver merging CLI, environment, and config tiers.
// ABOUTME: Per-field, CLI wins over env wins over config; no validation here.

use std::collections::HashMap;

use crate::options::schema::{FamilySchema, FieldSpec};
use crate::options::tokenizer::ScanOutcome;

/// The per-field winners for one connector family.
///
/// Holds raw strings only; numeric fields are parsed by the validator. A key
/// with no entry resolved from no tier at all, which is distinct from an
/// entry holding an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFields(HashMap<&'static str, String>);

impl ResolvedFields {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn to_owned_value(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    /// True when no field of the family resolved from any tier. The settings
    /// block is then absent rather than empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Effective value for one field: CLI over environment over configuration.
/// Empty and whitespace-only values count as present and win their tier.
fn lookup(
    field: &FieldSpec,
    cli: &ScanOutcome,
    env: &HashMap<String, String>,
    config: &HashMap<String, String>,
) -> Option<String> {
    cli.value(field.flag)
        .map(str::to_owned)
        .or_else(|| env.get(field.key).cloned())
        .or_else(|| config.get(field.key).cloned())
}

/// Resolve every declared field of `schema` independently across the three
/// tiers. Never fails; unresolvable fields are simply absent.
pub fn resolve_fields(
    schema: &FamilySchema,
    cli: &ScanOutcome,
    env: &HashMap<String, String>,
    config: &HashMap<String, String>,
) -> ResolvedFields {
    let mut resolved = ResolvedFields::default();
    for field in schema.fields {
        if let Some(value) = lookup(field, cli, env, config) {
            resolved.0.insert(field.key, value);
        }
    }
    resolved
}
