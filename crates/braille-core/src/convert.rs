//! The transliteration engine: source text in, Braille cells out.
//!
//! English is a per-codepoint substitution over the lowercased input. Hindi
//! is a greedy longest-match scan over codepoints so that multi-codepoint
//! keys (अं, क्ष) always consume as one unit. Both paths are total:
//! unmapped Devanagari codepoints render as the placeholder cell, anything
//! else the tables do not cover passes through verbatim.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::script::Script;
use crate::table::BrailleTable;
use crate::unicode::is_devanagari;

/// Cell emitted for a Devanagari codepoint with no table entry: all six
/// dots, U+283F. Exactly one per unmapped source codepoint, never collapsed.
pub const PLACEHOLDER_CELL: char = '⠿';

/// How a scan unit produced its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOrigin {
    /// A table key matched.
    Mapped,
    /// Unmapped codepoint inside the Devanagari block.
    Placeholder,
    /// Unmapped codepoint outside the block, copied through unchanged.
    Verbatim,
}

/// One consumed source unit and the output it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanUnit {
    /// Source codepoints consumed (already lowercased on the English path).
    pub source: String,
    /// Braille cells emitted, or the verbatim codepoint.
    pub braille: String,
    pub origin: UnitOrigin,
}

/// Convert `text` to Braille cells using the global table for `script`.
///
/// Total over all string input: never errors, never panics, and empty
/// input yields empty output without touching the tables.
pub fn transliterate(text: &str, script: Script) -> String {
    scan(text, script).into_iter().map(|u| u.braille).collect()
}

/// The same conversion, one scan unit at a time. `transliterate` is the
/// concatenation of the units' `braille` fields.
pub fn scan(text: &str, script: Script) -> Vec<ScanUnit> {
    // Before global(): empty input must not build the table, or a later
    // init_custom would succeed without ever taking effect.
    if text.is_empty() {
        return Vec::new();
    }
    scan_with(BrailleTable::global(script), script, text)
}

/// Scan against an explicit table.
///
/// The engine is a pure function of the table and the input; the global
/// entry points above only pick the table.
pub fn scan_with(table: &BrailleTable, script: Script, text: &str) -> Vec<ScanUnit> {
    if text.is_empty() {
        return Vec::new();
    }
    let span = debug_span!("scan", script = script.as_str());
    let _guard = span.enter();
    let units = match script {
        Script::English => scan_english(table, text),
        Script::Hindi => scan_hindi(table, text),
    };
    debug!(units = units.len(), "scan complete");
    units
}

fn scan_english(table: &BrailleTable, text: &str) -> Vec<ScanUnit> {
    // Whole-string lowercase first: some uppercase codepoints lower to more
    // than one codepoint (İ → i + combining dot) and the mapping applies to
    // the lowered form.
    let lowered = text.to_lowercase();
    let mut units = Vec::with_capacity(lowered.chars().count());
    for c in lowered.chars() {
        match table.lookup_char(c) {
            Some(cells) => units.push(ScanUnit {
                source: c.to_string(),
                braille: cells.to_string(),
                origin: UnitOrigin::Mapped,
            }),
            None => units.push(ScanUnit {
                source: c.to_string(),
                braille: c.to_string(),
                origin: UnitOrigin::Verbatim,
            }),
        }
    }
    units
}

fn scan_hindi(table: &BrailleTable, text: &str) -> Vec<ScanUnit> {
    let chars: Vec<char> = text.chars().collect();
    let mut units = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if let Some(m) = table.longest_match_at(&chars, i) {
            units.push(ScanUnit {
                source: chars[i..i + m.key_chars].iter().collect(),
                braille: m.cells.to_string(),
                origin: UnitOrigin::Mapped,
            });
            i += m.key_chars;
            continue;
        }
        let c = chars[i];
        if is_devanagari(c) {
            units.push(ScanUnit {
                source: c.to_string(),
                braille: PLACEHOLDER_CELL.to_string(),
                origin: UnitOrigin::Placeholder,
            });
        } else {
            units.push(ScanUnit {
                source: c.to_string(),
                braille: c.to_string(),
                origin: UnitOrigin::Verbatim,
            });
        }
        i += 1;
    }
    units
}
