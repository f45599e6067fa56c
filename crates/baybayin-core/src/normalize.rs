//! Orthographic normalization of Tagalog text ahead of segmentation.
//!
//! The stages run in a fixed order: lowercase, standalone-word substitutions
//! ("ng" → "nang", "mga" → "manga"), collapse of the remaining "ng" digraphs to
//! [`NG_PLACEHOLDER`], removal of hyphens and apostrophes, and finally
//! tokenization into words and separators. The substitutions must see the text
//! before the digraph collapse, otherwise the grammatical "ng" would be read as
//! a nasal-velar consonant.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, debug_span};

use crate::alphabet::{is_silent_mark, is_word_char, NG_PLACEHOLDER};

const NG: &str = "ng";

/// Standalone-word substitutions, applied in this order.
pub const LEXICAL_SUBSTITUTIONS: [(&str, &str); 2] = [("ng", "nang"), ("mga", "manga")];

fn non_space_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S+").expect("pattern must compile"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Word,
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Word,
            text: text.into(),
        }
    }

    pub fn separator(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Separator,
            text: text.into(),
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Text after each normalization stage, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizeStages {
    pub lowercased: String,
    pub lexical: String,
    pub collapsed: String,
    pub stripped: String,
}

/// Replace every whitespace-delimited occurrence of `word` with `replacement`.
/// Text start and end count as boundaries.
pub fn expand_standalone(text: &str, word: &str, replacement: &str) -> String {
    non_space_runs()
        .replace_all(text, |caps: &regex::Captures| {
            let run = &caps[0];
            if run == word {
                replacement.to_string()
            } else {
                run.to_string()
            }
        })
        .into_owned()
}

/// Collapse every "ng" that shares a non-whitespace run with other characters.
/// A run that is exactly "ng" is left alone.
pub fn collapse_ng(text: &str) -> String {
    let placeholder = NG_PLACEHOLDER.to_string();
    non_space_runs()
        .replace_all(text, |caps: &regex::Captures| {
            let run = &caps[0];
            if run != NG && run.contains(NG) {
                run.replace(NG, &placeholder)
            } else {
                run.to_string()
            }
        })
        .into_owned()
}

pub fn strip_silent_marks(text: &str) -> String {
    text.chars().filter(|&c| !is_silent_mark(c)).collect()
}

/// Split text into maximal runs of word characters and of everything else.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for c in text.chars() {
        let kind = if is_word_char(c) {
            TokenKind::Word
        } else {
            TokenKind::Separator
        };
        match tokens.last_mut() {
            Some(last) if last.kind == kind => last.text.push(c),
            _ => tokens.push(Token {
                kind,
                text: c.to_string(),
            }),
        }
    }
    tokens
}

pub fn normalize_stages(text: &str, lexical_substitutions: bool) -> NormalizeStages {
    let lowercased = text.to_lowercase();
    let lexical = if lexical_substitutions {
        LEXICAL_SUBSTITUTIONS
            .iter()
            .fold(lowercased.clone(), |acc, (word, replacement)| {
                expand_standalone(&acc, word, replacement)
            })
    } else {
        lowercased.clone()
    };
    let collapsed = collapse_ng(&lexical);
    let stripped = strip_silent_marks(&collapsed);
    NormalizeStages {
        lowercased,
        lexical,
        collapsed,
        stripped,
    }
}

pub fn normalize_with(text: &str, lexical_substitutions: bool) -> Vec<Token> {
    let _span = debug_span!("normalize", len = text.len(), lexical_substitutions).entered();
    let stages = normalize_stages(text, lexical_substitutions);
    let tokens = tokenize(&stages.stripped);
    debug!(token_count = tokens.len());
    tokens
}

pub fn normalize(text: &str) -> Vec<Token> {
    normalize_with(text, true)
}
