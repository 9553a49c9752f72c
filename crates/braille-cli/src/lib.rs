//! Command-line tooling around the transliteration engine.

pub mod commands;
pub mod ocr;
pub mod trace_init;
