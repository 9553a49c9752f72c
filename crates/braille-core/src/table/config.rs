use std::collections::BTreeMap;

use serde::Deserialize;

use crate::script::Script;
use crate::unicode::is_braille;

/// Longest key any table may carry, in codepoints. The Devanagari conjunct
/// clusters (क्ष, त्र, ज्ञ, श्र) are consonant + virama + consonant.
pub const MAX_KEY_CHARS: usize = 3;

#[derive(Deserialize)]
struct TableConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty key")]
    EmptyKey,
    #[error("key {key:?} is {got} codepoints, limit for this script is {max}")]
    KeyLength { key: String, got: usize, max: usize },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("value for key {key:?} contains non-Braille codepoint {found:?}")]
    NonBrailleValue { key: String, found: char },
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<source key, Braille cells>`.
///
/// Validation is eager and script-specific: English keys are strictly
/// single codepoints (the scan there is per-codepoint, a longer key could
/// never match), Hindi keys may run up to [`MAX_KEY_CHARS`]. Values must be
/// non-empty and stay inside the Braille Patterns block.
pub fn parse_table_toml(
    toml_str: &str,
    script: Script,
) -> Result<BTreeMap<String, String>, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TableConfigError::Empty);
    }

    let max = match script {
        Script::English => 1,
        Script::Hindi => MAX_KEY_CHARS,
    };

    for (key, value) in &config.mappings {
        let got = key.chars().count();
        if got == 0 {
            return Err(TableConfigError::EmptyKey);
        }
        if got > max {
            return Err(TableConfigError::KeyLength {
                key: key.clone(),
                got,
                max,
            });
        }
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue(key.clone()));
        }
        if let Some(found) = value.chars().find(|c| !is_braille(*c)) {
            return Err(TableConfigError::NonBrailleValue {
                key: key.clone(),
                found,
            });
        }
    }

    Ok(config.mappings)
}
