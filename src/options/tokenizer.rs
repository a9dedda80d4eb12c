// ABOUTME: CLI argument tokenizer for connector settings flags.
// ABOUTME: Pairs recognized flags with values and flags unrecognized tokens.

use std::collections::HashMap;

/// Result of scanning a raw argument list against a flag vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    values: HashMap<&'static str, String>,
    unrecognized: bool,
}

impl ScanOutcome {
    /// The value paired with a recognized flag, if one was supplied.
    pub fn value(&self, flag: &str) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }

    /// Whether any token was neither a recognized flag nor a flag's value.
    pub fn saw_unrecognized(&self) -> bool {
        self.unrecognized
    }
}

/// Scan `args` left to right against the recognized `flags`.
///
/// A token matching a recognized flag (exact, case-sensitive) consumes the
/// immediately following token as its value, even when that token begins with
/// a dash or spells another recognized flag. A recognized flag with no
/// following token is present but valueless and records nothing. Every other
/// token not consumed as a value marks the outcome unrecognized. Repeated
/// flags keep the last value. Never fails.
pub fn scan(args: &[String], flags: &[&'static str]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let mut i = 0;
    while i < args.len() {
        match flags.iter().copied().find(|f| *f == args[i]) {
            Some(flag) => {
                if let Some(value) = args.get(i + 1) {
                    outcome.values.insert(flag, value.clone());
                    i += 2;
                } else {
                    // Valueless trailing flag: falls through to lower tiers.
                    i += 1;
                }
            }
            None => {
                outcome.unrecognized = true;
                i += 1;
            }
        }
    }
    outcome
}
