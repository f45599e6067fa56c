//! Maps segmented units to Baybayin glyphs.
//!
//! Each unit is classified by [`classify`] and dispatched on its [`PairKind`].
//! A character the [`SymbolTable`] does not know is emitted unchanged; only an
//! empty unit is an error, since the segmenter never produces one.

use serde::Serialize;

use crate::alphabet::{is_consonant, is_vowel, DEFAULT_VOWEL};
use crate::table::SymbolTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairKind {
    /// One character: a lone vowel or a lone consonant.
    NoPair,
    ConsonantVowel,
    VowelConsonant,
    /// More characters than one glyph can carry.
    ExceedsPair,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscribeError {
    #[error("empty unit reached the transliterator")]
    EmptyUnit,
}

/// Options that change how text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscribeOptions {
    /// Expand standalone "ng" and "mga" before collapsing digraphs.
    pub lexical_substitutions: bool,
    /// Cancel the implicit vowel of lone consonants.
    pub virama: bool,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            lexical_substitutions: true,
            virama: false,
        }
    }
}

/// Classify a unit by its length and, for pairs, by its first character.
///
/// A pair's label names its leading character only: "kn" is `ConsonantVowel`
/// and "ai" is `VowelConsonant`. The segmenter never emits such mismatched
/// pairs; when one reaches the transliterator each character is rendered as its
/// own `NoPair` unit regardless of the label.
pub fn classify(unit: &str) -> Result<PairKind, TranscribeError> {
    let mut chars = unit.chars();
    let first = chars.next().ok_or(TranscribeError::EmptyUnit)?;
    Ok(match chars.count() {
        0 => PairKind::NoPair,
        1 if is_consonant(first) => PairKind::ConsonantVowel,
        1 => PairKind::VowelConsonant,
        _ => PairKind::ExceedsPair,
    })
}

/// Split a unit into consecutive slices of at most two characters.
pub fn pair_slices(unit: &str) -> Vec<&str> {
    let mut slices = Vec::with_capacity(unit.len() / 2 + 1);
    let mut start = 0;
    let mut count = 0;
    for (offset, _) in unit.char_indices() {
        if count == 2 {
            slices.push(&unit[start..offset]);
            start = offset;
            count = 0;
        }
        count += 1;
    }
    if start < unit.len() {
        slices.push(&unit[start..]);
    }
    slices
}

pub struct Transliterator<'t> {
    table: &'t SymbolTable,
    virama: bool,
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t SymbolTable) -> Self {
        Self {
            table,
            virama: false,
        }
    }

    pub fn with_virama(mut self, virama: bool) -> Self {
        self.virama = virama;
        self
    }

    pub fn transliterate(&self, unit: &str) -> Result<String, TranscribeError> {
        let mut out = String::with_capacity(unit.len() * 3);
        self.push_unit(unit, &mut out)?;
        Ok(out)
    }

    fn push_unit(&self, unit: &str, out: &mut String) -> Result<(), TranscribeError> {
        match classify(unit)? {
            PairKind::NoPair => {
                if let Some(c) = unit.chars().next() {
                    self.push_single(c, out);
                }
            }
            PairKind::ConsonantVowel => {
                let Some((consonant, second)) = pair(unit) else {
                    return Ok(());
                };
                if is_vowel(second) {
                    self.push_marked(consonant, second, unit, out);
                } else {
                    self.push_single(consonant, out);
                    self.push_single(second, out);
                }
            }
            PairKind::VowelConsonant => {
                let Some((vowel, second)) = pair(unit) else {
                    return Ok(());
                };
                if is_consonant(second) {
                    self.push_marked(second, vowel, unit, out);
                } else {
                    self.push_single(vowel, out);
                    self.push_single(second, out);
                }
            }
            PairKind::ExceedsPair => {
                for slice in pair_slices(unit) {
                    self.push_unit(slice, out)?;
                }
            }
        }
        Ok(())
    }

    /// A lone letter: its base glyph, or the letter itself on a miss.
    fn push_single(&self, c: char, out: &mut String) {
        match self.table.symbol(c) {
            Some(glyph) => {
                out.push_str(glyph);
                if self.virama && is_consonant(c) {
                    if let Some(mark) = self.table.virama() {
                        out.push_str(mark);
                    }
                }
            }
            None => out.push(c),
        }
    }

    /// Base glyph of `consonant` carrying `vowel`. Without a base glyph the
    /// mark has nothing to attach to, so the whole unit passes through.
    fn push_marked(&self, consonant: char, vowel: char, unit: &str, out: &mut String) {
        let Some(base) = self.table.symbol(consonant) else {
            out.push_str(unit);
            return;
        };
        out.push_str(base);
        if vowel == DEFAULT_VOWEL {
            return;
        }
        match self.table.vowel_mark(vowel) {
            Some(mark) => out.push_str(mark),
            None => out.push(vowel),
        }
    }
}

fn pair(unit: &str) -> Option<(char, char)> {
    let mut chars = unit.chars();
    Some((chars.next()?, chars.next()?))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Minimal ASCII alphabet: uppercase consonants, marks as punctuation.
    fn synthetic() -> SymbolTable {
        SymbolTable::new(
            HashMap::from([
                ('a', "A".to_string()),
                ('i', "I".to_string()),
                ('u', "U".to_string()),
                ('b', "B".to_string()),
                ('k', "K".to_string()),
                ('n', "N".to_string()),
            ]),
            HashMap::from([('i', "'".to_string()), ('u', ",".to_string())]),
        )
        .with_virama("+")
    }

    #[test]
    fn test_classify_lengths() {
        assert_eq!(classify("a"), Ok(PairKind::NoPair));
        assert_eq!(classify("k"), Ok(PairKind::NoPair));
        assert_eq!(classify("ka"), Ok(PairKind::ConsonantVowel));
        assert_eq!(classify("ak"), Ok(PairKind::VowelConsonant));
        assert_eq!(classify("kan"), Ok(PairKind::ExceedsPair));
        assert_eq!(classify("ŋa"), Ok(PairKind::ConsonantVowel));
    }

    #[test]
    fn test_classify_mismatched_pairs_by_leading_char() {
        assert_eq!(classify("kn"), Ok(PairKind::ConsonantVowel));
        assert_eq!(classify("ai"), Ok(PairKind::VowelConsonant));
    }

    #[test]
    fn test_classify_empty_is_error() {
        assert_eq!(classify(""), Err(TranscribeError::EmptyUnit));
    }

    #[test]
    fn test_classify_long_units_always_exceed() {
        for unit in ["aaa", "kkk", "bant", "abcdefg"] {
            assert_eq!(classify(unit), Ok(PairKind::ExceedsPair), "{unit}");
        }
    }

    #[test]
    fn test_pair_slices() {
        assert_eq!(pair_slices("ban"), vec!["ba", "n"]);
        assert_eq!(pair_slices("bant"), vec!["ba", "nt"]);
        assert_eq!(pair_slices("ŋaŋ"), vec!["ŋa", "ŋ"]);
        assert_eq!(pair_slices("k"), vec!["k"]);
        assert!(pair_slices("").is_empty());
    }

    #[test]
    fn test_no_pair() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate("a").unwrap(), "A");
        assert_eq!(t.transliterate("k").unwrap(), "K");
    }

    #[test]
    fn test_consonant_vowel_default_vowel_has_no_mark() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate("ka").unwrap(), "K");
    }

    #[test]
    fn test_consonant_vowel_with_mark() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate("ki").unwrap(), "K'");
        assert_eq!(t.transliterate("bu").unwrap(), "B,");
    }

    #[test]
    fn test_vowel_consonant_uses_first_char_mark() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate("ak").unwrap(), "K");
        assert_eq!(t.transliterate("in").unwrap(), "N'");
    }

    #[test]
    fn test_exceeds_pair_splits() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate("ban").unwrap(), "BN");
        assert_eq!(t.transliterate("kin").unwrap(), "K'N");
    }

    #[test]
    fn test_unknown_characters_pass_through() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate("z").unwrap(), "z");
        assert_eq!(t.transliterate("ж").unwrap(), "ж");
    }

    #[test]
    fn test_unknown_consonant_keeps_unit() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate("zi").unwrap(), "zi");
        assert_eq!(t.transliterate("iz").unwrap(), "iz");
    }

    #[test]
    fn test_missing_mark_passes_vowel_through() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate("ko").unwrap(), "Ko");
    }

    #[test]
    fn test_mismatched_pairs_resolve_per_char() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate("kn").unwrap(), "KN");
        assert_eq!(t.transliterate("ai").unwrap(), "AI");
    }

    #[test]
    fn test_virama_on_lone_consonants() {
        let table = synthetic();
        let t = Transliterator::new(&table).with_virama(true);
        assert_eq!(t.transliterate("k").unwrap(), "K+");
        assert_eq!(t.transliterate("ban").unwrap(), "BN+");
        assert_eq!(t.transliterate("a").unwrap(), "A");
        assert_eq!(t.transliterate("ka").unwrap(), "K");
    }

    #[test]
    fn test_virama_without_table_entry() {
        let table = SymbolTable::new(HashMap::from([('k', "K".to_string())]), HashMap::new());
        let t = Transliterator::new(&table).with_virama(true);
        assert_eq!(t.transliterate("k").unwrap(), "K");
    }

    #[test]
    fn test_empty_unit_is_error() {
        let table = synthetic();
        let t = Transliterator::new(&table);
        assert_eq!(t.transliterate(""), Err(TranscribeError::EmptyUnit));
    }

    #[test]
    fn test_default_table_glyphs() {
        let t = Transliterator::new(SymbolTable::global());
        assert_eq!(t.transliterate("ba").unwrap(), "\u{170A}");
        assert_eq!(t.transliterate("ki").unwrap(), "\u{1703}\u{1712}");
        assert_eq!(t.transliterate("ko").unwrap(), "\u{1703}\u{1713}");
        assert_eq!(t.transliterate("ŋa").unwrap(), "\u{1705}");
        assert_eq!(t.transliterate("s").unwrap(), "\u{1710}");
        assert_eq!(t.transliterate("e").unwrap(), "\u{1701}");
    }
}
