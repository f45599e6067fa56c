//! Property-based tests for the segmentation and transliteration invariants.

use proptest::prelude::*;

use super::default_transcriber;
use crate::normalize::{normalize, Token};
use crate::segment::segment;
use crate::table::SymbolTable;
use crate::transliterate::{classify, PairKind, Transliterator};

fn arb_letter() -> impl Strategy<Value = char> {
    // Vowels at higher weight for more realistic Tagalog words
    prop_oneof![
        3 => prop::sample::select(vec!['a', 'e', 'i', 'o', 'u']),
        4 => prop::sample::select(vec![
            'b', 'd', 'g', 'h', 'k', 'l', 'm', 'n', 'ŋ', 'p', 'r', 's', 't', 'w', 'y',
        ]),
        1 => prop::sample::select(vec!['c', 'f', 'j', 'q', 'v', 'x', 'z', 'ñ', 'é']),
    ]
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_letter(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

fn arb_separator() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![' ', ',', '.', '!', '?', '\n', '\t', '1', '(', ')']),
        1..4,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn segment_partitions_word(word in arb_word()) {
        let units = segment(&word);
        prop_assert_eq!(units.concat(), word.as_str());
        for unit in &units {
            let len = unit.chars().count();
            prop_assert!((1..=3).contains(&len), "unit {:?} has length {}", unit, len);
        }
    }

    #[test]
    fn classify_is_total(unit in "[a-zŋ]{1,3}") {
        let kind = classify(&unit).unwrap();
        if unit.chars().count() > 2 {
            prop_assert_eq!(kind, PairKind::ExceedsPair);
        } else {
            prop_assert_ne!(kind, PairKind::ExceedsPair);
        }
    }

    #[test]
    fn unknown_characters_pass_through(c in any::<char>()) {
        let table = SymbolTable::global();
        prop_assume!(table.symbol(c).is_none() && table.vowel_mark(c).is_none());
        let out = Transliterator::new(table).transliterate(&c.to_string()).unwrap();
        prop_assert_eq!(out, c.to_string());
    }

    #[test]
    fn separators_survive_reassembly(sep in arb_separator(), word in "[a-z]{1,8}") {
        let text = format!("{word}{sep}{word}");
        let tokens = normalize(&text);
        prop_assert!(tokens.contains(&Token::separator(sep.clone())));
        let out = default_transcriber().transcribe(&text).unwrap();
        prop_assert!(out.contains(&sep));
    }

    #[test]
    fn transcribe_never_fails(text in "\\PC{0,40}") {
        prop_assert!(default_transcriber().transcribe(&text).is_ok());
    }
}
