//! Source script selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported source script.
///
/// The script picks both the mapping table and the scan algorithm: English
/// is a per-codepoint substitution over lowercased input, Hindi is a greedy
/// longest-match scan. Adding a script is a new table file plus a variant
/// here, never a new scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    English,
    Hindi,
}

impl Script {
    /// Resolve an optional caller-supplied language tag.
    ///
    /// `"hindi"` in any ASCII case selects Hindi; everything else,
    /// including a missing tag, falls back to English.
    pub fn from_tag(tag: Option<&str>) -> Script {
        match tag {
            Some(t) if t.eq_ignore_ascii_case("hindi") => Script::Hindi,
            _ => Script::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Script::English => "english",
            Script::Hindi => "hindi",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown script: {0}")]
pub struct UnknownScript(pub String);

impl FromStr for Script {
    type Err = UnknownScript;

    /// Strict parse: unlike [`Script::from_tag`], an unrecognized tag is
    /// an error. Used where tags come from files rather than defaults.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("english") {
            Ok(Script::English)
        } else if s.eq_ignore_ascii_case("hindi") {
            Ok(Script::Hindi)
        } else {
            Err(UnknownScript(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_defaults_to_english() {
        assert_eq!(Script::from_tag(None), Script::English);
        assert_eq!(Script::from_tag(Some("english")), Script::English);
        assert_eq!(Script::from_tag(Some("french")), Script::English);
        assert_eq!(Script::from_tag(Some("")), Script::English);
    }

    #[test]
    fn from_tag_recognizes_hindi() {
        assert_eq!(Script::from_tag(Some("hindi")), Script::Hindi);
        assert_eq!(Script::from_tag(Some("Hindi")), Script::Hindi);
        assert_eq!(Script::from_tag(Some("HINDI")), Script::Hindi);
    }

    #[test]
    fn strict_parse() {
        assert_eq!("english".parse::<Script>().unwrap(), Script::English);
        assert_eq!("Hindi".parse::<Script>().unwrap(), Script::Hindi);
        assert!("french".parse::<Script>().is_err());
        assert!("".parse::<Script>().is_err());
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(Script::English.to_string(), "english");
        assert_eq!(Script::Hindi.to_string(), "hindi");
    }

    #[test]
    fn serde_lowercase_names() {
        #[derive(serde::Deserialize)]
        struct Row {
            language: Script,
        }
        let row: Row = toml::from_str("language = \"hindi\"").unwrap();
        assert_eq!(row.language, Script::Hindi);
    }
}
