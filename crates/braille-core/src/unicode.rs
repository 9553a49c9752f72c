//! Character-level Unicode classification for transliteration input and output.

/// Check the full Devanagari block (U+0900..U+097F). The block contains
/// codepoints the mapping tables never cover (Vedic signs, ॐ, nukta forms);
/// an in-block codepoint without a mapping renders as the placeholder cell,
/// anything outside the block passes through verbatim.
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Check the Braille Patterns block (U+2800..U+28FF). All 256 dot
/// combinations, including the blank cell U+2800 that space maps to.
pub fn is_braille(c: char) -> bool {
    ('\u{2800}'..='\u{28FF}').contains(&c)
}
