//! Source-to-Braille mapping tables.
//!
//! Each script ships an embedded default TOML table, parsed once into an
//! immutable codepoint trie behind a per-script `OnceLock`. A custom table
//! can be installed per script with `BrailleTable::init_custom` before the
//! first conversion touches that script. Longest-match selection happens in
//! the lookup itself, not in the scan loop.

mod config;
mod trie;

pub use config::{parse_table_toml, TableConfigError, MAX_KEY_CHARS};
pub use trie::{default_toml, BrailleTable, CellMatch};
