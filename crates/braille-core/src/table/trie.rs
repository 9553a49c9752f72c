use std::collections::HashMap;
use std::sync::OnceLock;

use crate::script::Script;

use super::config::{parse_table_toml, TableConfigError};

const ENGLISH_DEFAULT_TOML: &str = include_str!("english.toml");
const HINDI_DEFAULT_TOML: &str = include_str!("hindi.toml");

static CUSTOM_ENGLISH_TOML: OnceLock<String> = OnceLock::new();
static CUSTOM_HINDI_TOML: OnceLock<String> = OnceLock::new();

/// The embedded default mapping TOML for a script.
pub fn default_toml(script: Script) -> &'static str {
    match script {
        Script::English => ENGLISH_DEFAULT_TOML,
        Script::Hindi => HINDI_DEFAULT_TOML,
    }
}

fn custom_slot(script: Script) -> &'static OnceLock<String> {
    match script {
        Script::English => &CUSTOM_ENGLISH_TOML,
        Script::Hindi => &CUSTOM_HINDI_TOML,
    }
}

#[derive(Debug, Default)]
struct TrieNode {
    cells: Option<String>,
    children: HashMap<char, TrieNode>,
}

/// An immutable source-to-Braille mapping with longest-match lookup.
///
/// Keys are stored in a codepoint-keyed trie. Multi-codepoint keys (अं,
/// क्ष) share prefix nodes with their single-codepoint entries, so a
/// longest-match walk structurally cannot prefer the shorter key.
#[derive(Debug)]
pub struct BrailleTable {
    root: TrieNode,
    len: usize,
    max_key_chars: usize,
}

/// An exact match found by [`BrailleTable::longest_match_at`].
#[derive(Debug, PartialEq, Eq)]
pub struct CellMatch<'a> {
    /// Codepoints the key consumes from the source.
    pub key_chars: usize,
    /// Braille cells the key maps to.
    pub cells: &'a str,
}

impl BrailleTable {
    /// Build a table from TOML text, validating per `script` rules.
    pub fn from_toml(toml_str: &str, script: Script) -> Result<BrailleTable, TableConfigError> {
        let map = parse_table_toml(toml_str, script)?;
        let len = map.len();
        let mut root = TrieNode::default();
        let mut max_key_chars = 0;
        for (key, cells) in map {
            let mut node = &mut root;
            let mut key_chars = 0;
            for c in key.chars() {
                node = node.children.entry(c).or_default();
                key_chars += 1;
            }
            node.cells = Some(cells);
            max_key_chars = max_key_chars.max(key_chars);
        }
        Ok(BrailleTable {
            root,
            len,
            max_key_chars,
        })
    }

    /// Set custom TOML for `script` before its first `global()` call.
    pub fn init_custom(script: Script, toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_table_toml(&toml_content, script)?;
        custom_slot(script)
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global per-script singleton.
    pub fn global(script: Script) -> &'static BrailleTable {
        fn build(script: Script) -> BrailleTable {
            let toml_str = custom_slot(script)
                .get()
                .map(|s| s.as_str())
                .unwrap_or(default_toml(script));
            BrailleTable::from_toml(toml_str, script).expect("mapping TOML must be valid")
        }
        match script {
            Script::English => {
                static INSTANCE: OnceLock<BrailleTable> = OnceLock::new();
                INSTANCE.get_or_init(|| build(Script::English))
            }
            Script::Hindi => {
                static INSTANCE: OnceLock<BrailleTable> = OnceLock::new();
                INSTANCE.get_or_init(|| build(Script::Hindi))
            }
        }
    }

    /// Deepest exact match in `chars` starting at position `at`.
    ///
    /// Walks the trie while codepoints keep matching and remembers the last
    /// node that ended a key, so a key always beats every prefix of itself.
    /// A position at or past the end of `chars` yields `None`.
    pub fn longest_match_at(&self, chars: &[char], at: usize) -> Option<CellMatch<'_>> {
        let rest = chars.get(at..)?;
        let mut node = &self.root;
        let mut best = None;
        for (depth, c) in rest.iter().enumerate() {
            match node.children.get(c) {
                Some(next) => {
                    node = next;
                    if let Some(cells) = node.cells.as_deref() {
                        best = Some(CellMatch {
                            key_chars: depth + 1,
                            cells,
                        });
                    }
                }
                None => break,
            }
        }
        best
    }

    /// Exact whole-key lookup.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        node.cells.as_deref()
    }

    /// Single-codepoint lookup, for the per-codepoint English path.
    pub fn lookup_char(&self, c: char) -> Option<&str> {
        self.root.children.get(&c).and_then(|n| n.cells.as_deref())
    }

    /// Number of mappings in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Longest key in the table, in codepoints.
    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars_of(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_consonant_exact() {
        let table = BrailleTable::global(Script::Hindi);
        assert_eq!(table.lookup("क"), Some("⠅"));
        assert_eq!(table.lookup_char('क'), Some("⠅"));
    }

    #[test]
    fn test_conjunct_exact() {
        let table = BrailleTable::global(Script::Hindi);
        assert_eq!(table.lookup("क्ष"), Some("⠅⠈⠱"));
        assert_eq!(table.lookup("त्र"), Some("⠞⠈⠗"));
        assert_eq!(table.lookup("ज्ञ"), Some("⠚⠈⠝"));
        assert_eq!(table.lookup("श्र"), Some("⠩⠈⠗"));
    }

    #[test]
    fn test_longest_match_prefers_conjunct() {
        let table = BrailleTable::global(Script::Hindi);
        let chars = chars_of("क्षमा");
        let m = table.longest_match_at(&chars, 0).unwrap();
        assert_eq!(m.key_chars, 3);
        assert_eq!(m.cells, "⠅⠈⠱");
    }

    #[test]
    fn test_longest_match_falls_back_to_prefix() {
        // क + virama + क is no conjunct entry; only the 1-codepoint key matches.
        let table = BrailleTable::global(Script::Hindi);
        let chars = chars_of("क्क");
        let m = table.longest_match_at(&chars, 0).unwrap();
        assert_eq!(m.key_chars, 1);
        assert_eq!(m.cells, "⠅");
    }

    #[test]
    fn test_longest_match_anusvara_pair() {
        let table = BrailleTable::global(Script::Hindi);
        let chars = chars_of("अंगूर");
        let m = table.longest_match_at(&chars, 0).unwrap();
        assert_eq!(m.key_chars, 2);
        assert_eq!(m.cells, "⠁⠰");
    }

    #[test]
    fn test_longest_match_mid_slice() {
        let table = BrailleTable::global(Script::Hindi);
        let chars = chars_of("xत्र");
        assert!(table.longest_match_at(&chars, 0).is_none());
        let m = table.longest_match_at(&chars, 1).unwrap();
        assert_eq!(m.key_chars, 3);
        assert_eq!(m.cells, "⠞⠈⠗");
    }

    #[test]
    fn test_match_truncated_at_slice_end() {
        // Only the anusvara remains at position 1.
        let table = BrailleTable::global(Script::Hindi);
        let chars = chars_of("अं");
        let m = table.longest_match_at(&chars, 1).unwrap();
        assert_eq!(m.key_chars, 1);
        assert_eq!(m.cells, "⠰");
        assert!(table.longest_match_at(&chars, 2).is_none());
    }

    #[test]
    fn test_position_past_end_is_none() {
        let table = BrailleTable::global(Script::Hindi);
        let chars = chars_of("क");
        assert!(table.longest_match_at(&chars, 2).is_none());
        assert!(table.longest_match_at(&chars, usize::MAX).is_none());
        assert!(table.longest_match_at(&[], 1).is_none());
    }

    #[test]
    fn test_none_for_unknown() {
        let table = BrailleTable::global(Script::Hindi);
        assert_eq!(table.lookup("xyz"), None);
        assert_eq!(table.lookup_char('ऋ'), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_english_single_codepoints() {
        let table = BrailleTable::global(Script::English);
        assert_eq!(table.lookup_char('a'), Some("⠁"));
        assert_eq!(table.lookup_char('z'), Some("⠵"));
        assert_eq!(table.lookup_char(' '), Some("⠀"));
        assert_eq!(table.lookup_char('5'), Some("⠑"));
        assert_eq!(table.lookup_char('A'), None);
    }

    #[test]
    fn test_key_depth() {
        assert_eq!(BrailleTable::global(Script::English).max_key_chars(), 1);
        assert_eq!(BrailleTable::global(Script::Hindi).max_key_chars(), 3);
    }

    #[test]
    fn test_all_default_mappings_reachable() {
        for script in [Script::English, Script::Hindi] {
            let map = parse_table_toml(default_toml(script), script).unwrap();
            let table = BrailleTable::global(script);
            assert_eq!(table.len(), map.len());
            for (key, cells) in &map {
                assert_eq!(
                    table.lookup(key),
                    Some(cells.as_str()),
                    "mapping mismatch for key={key}"
                );
            }
        }
    }

    #[test]
    fn test_from_toml_rejects_bad_table() {
        let err = BrailleTable::from_toml("[mappings]\n", Script::Hindi).unwrap_err();
        assert!(matches!(err, TableConfigError::Empty));
    }
}
