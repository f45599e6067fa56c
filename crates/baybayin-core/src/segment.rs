//! Splits a normalized word into the units the transliterator maps to glyphs.
//!
//! The scan runs left to right and decides each unit from the current
//! character plus up to three characters of lookahead. A consonant pairs with
//! the vowel after it; a consonant that has no vowel of its own is folded into
//! the preceding unit when it is followed by another consonant, and otherwise
//! left to stand on its own. Every character of the word lands in exactly one
//! unit.

use crate::alphabet::{is_consonant, is_vowel};

/// Shape of the unit starting at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitShape {
    /// Word-initial vowel, or a vowel with nothing it can pair with.
    LoneVowel,
    /// Consonant at the end of the word or in front of another consonant.
    LoneConsonant,
    ConsonantVowel,
    /// Consonant, vowel, and a coda consonant that precedes another consonant.
    ConsonantVowelCoda,
    /// Vowel and a consonant that has no vowel after it.
    VowelConsonant,
}

impl UnitShape {
    /// Number of characters the unit spans.
    pub fn char_len(self) -> usize {
        match self {
            UnitShape::LoneVowel | UnitShape::LoneConsonant => 1,
            UnitShape::ConsonantVowel | UnitShape::VowelConsonant => 2,
            UnitShape::ConsonantVowelCoda => 3,
        }
    }
}

fn consonant_at(chars: &[char], i: usize) -> bool {
    chars.get(i).is_some_and(|&c| is_consonant(c))
}

fn vowel_at(chars: &[char], i: usize) -> bool {
    chars.get(i).is_some_and(|&c| is_vowel(c))
}

/// Decide the shape of the unit starting at `i`. `i` must be in bounds.
pub fn next_shape(chars: &[char], i: usize) -> UnitShape {
    if is_vowel(chars[i]) {
        if i == 0 {
            return UnitShape::LoneVowel;
        }
        // The consonant stays with this vowel only if nothing after it can
        // claim it.
        if consonant_at(chars, i + 1) && !vowel_at(chars, i + 2) {
            UnitShape::VowelConsonant
        } else {
            UnitShape::LoneVowel
        }
    } else if vowel_at(chars, i + 1) {
        if consonant_at(chars, i + 2) && consonant_at(chars, i + 3) {
            UnitShape::ConsonantVowelCoda
        } else {
            UnitShape::ConsonantVowel
        }
    } else {
        UnitShape::LoneConsonant
    }
}

/// Segment one normalized word. The returned slices concatenate back to `word`.
pub fn segment(word: &str) -> Vec<&str> {
    let (offsets, chars): (Vec<usize>, Vec<char>) = word.char_indices().unzip();
    let byte_at = |i: usize| offsets.get(i).copied().unwrap_or(word.len());

    let mut units = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let len = next_shape(&chars, i).char_len();
        units.push(&word[byte_at(i)..byte_at(i + len)]);
        i += len;
    }
    units
}
