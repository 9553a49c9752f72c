//! Script-to-Braille transliteration engine.
//!
//! Converts English (grade-1, uncontracted) and Hindi (Bharati Braille)
//! text to six-dot Braille cells. The tables are data, embedded as TOML and
//! overridable per script before first use; the scan loop is the only
//! algorithm, and for Hindi it is greedy longest-match over codepoints.

pub mod convert;
pub mod ingest;
pub mod script;
pub mod table;
pub mod unicode;
