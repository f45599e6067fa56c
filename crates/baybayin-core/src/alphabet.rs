//! Character-level classification for normalized Tagalog text.

/// Stand-in for the "ng" digraph once it has been collapsed by the normalizer.
pub const NG_PLACEHOLDER: char = 'ŋ';

/// The vowel every consonant glyph carries when no mark is attached.
pub const DEFAULT_VOWEL: char = 'a';

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Anything that is not a vowel counts as a consonant, including the
/// placeholder and letters outside the Tagalog alphabet.
pub fn is_consonant(c: char) -> bool {
    !is_vowel(c)
}

/// Letters that belong to word tokens.
pub fn is_word_char(c: char) -> bool {
    c == NG_PLACEHOLDER || c.is_alphabetic()
}

/// Orthographic marks that carry no phonetic unit.
pub fn is_silent_mark(c: char) -> bool {
    matches!(c, '-' | '\'' | '\u{2019}')
}
