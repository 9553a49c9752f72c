//! Caller-facing request validation ahead of the engine.
//!
//! Deliberately thin: reject empty text, resolve the language tag, hand
//! off. Everything else the engine handles itself.

use crate::convert::transliterate;
use crate::script::Script;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("no text provided")]
    EmptyText,
}

/// A validated conversion request. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    text: String,
    script: Script,
}

impl ConversionRequest {
    /// Build a request from raw caller input.
    ///
    /// The only rejection is empty text. An absent or unrecognized language
    /// tag falls back to English. Whitespace-only text is a valid request;
    /// space is a mapped key.
    pub fn new(
        text: impl Into<String>,
        language: Option<&str>,
    ) -> Result<ConversionRequest, IngestError> {
        let text = text.into();
        if text.is_empty() {
            return Err(IngestError::EmptyText);
        }
        Ok(ConversionRequest {
            text,
            script: Script::from_tag(language),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Run the engine on the held text.
    pub fn convert(&self) -> String {
        transliterate(&self.text, self.script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_text() {
        assert_eq!(
            ConversionRequest::new("", None).unwrap_err(),
            IngestError::EmptyText
        );
        assert_eq!(
            ConversionRequest::new("", Some("hindi")).unwrap_err(),
            IngestError::EmptyText
        );
    }

    #[test]
    fn whitespace_only_is_valid() {
        let req = ConversionRequest::new("  ", None).unwrap();
        assert_eq!(req.convert(), "⠀⠀");
    }

    #[test]
    fn language_defaults_to_english() {
        assert_eq!(
            ConversionRequest::new("x", None).unwrap().script(),
            Script::English
        );
        assert_eq!(
            ConversionRequest::new("x", Some("klingon")).unwrap().script(),
            Script::English
        );
    }

    #[test]
    fn hindi_tag_selects_hindi() {
        let req = ConversionRequest::new("नमस्ते", Some("hindi")).unwrap();
        assert_eq!(req.script(), Script::Hindi);
        assert_eq!(req.convert(), "⠝⠍⠎⠈⠞⠑");
    }

    #[test]
    fn converts_held_text() {
        let req = ConversionRequest::new("hello", Some("english")).unwrap();
        assert_eq!(req.text(), "hello");
        assert_eq!(req.convert(), "⠓⠑⠇⠇⠕");
    }
}
