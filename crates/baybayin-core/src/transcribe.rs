//! End-to-end transcription: normalize, segment each word, transliterate each
//! unit, and reassemble with the separators untouched.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::normalize::{normalize_stages, tokenize, NormalizeStages, Token, TokenKind};
use crate::segment::segment;
use crate::settings::settings;
use crate::table::SymbolTable;
use crate::transliterate::{classify, PairKind, TranscribeError, TranscribeOptions, Transliterator};

/// Source text paired with its Baybayin rendering, for side-by-side display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcription {
    pub source: String,
    pub baybayin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitExplanation {
    pub text: String,
    pub kind: PairKind,
    pub glyphs: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenExplanation {
    pub kind: TokenKind,
    pub text: String,
    /// Empty for separators.
    pub units: Vec<UnitExplanation>,
    pub output: String,
}

/// Every intermediate product of one transcription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub stages: NormalizeStages,
    pub tokens: Vec<TokenExplanation>,
    pub output: String,
}

pub struct Transcriber<'t> {
    table: &'t SymbolTable,
    options: TranscribeOptions,
}

impl<'t> Transcriber<'t> {
    pub fn new(table: &'t SymbolTable, options: TranscribeOptions) -> Self {
        Self { table, options }
    }

    /// Transcriber over the process-wide symbol table and settings.
    pub fn global() -> Transcriber<'static> {
        Transcriber::new(SymbolTable::global(), settings().options())
    }

    pub fn options(&self) -> TranscribeOptions {
        self.options
    }

    fn transliterator(&self) -> Transliterator<'t> {
        Transliterator::new(self.table).with_virama(self.options.virama)
    }

    fn tokens(&self, text: &str) -> (NormalizeStages, Vec<Token>) {
        let stages = normalize_stages(text, self.options.lexical_substitutions);
        let tokens = tokenize(&stages.stripped);
        (stages, tokens)
    }

    pub fn transcribe(&self, text: &str) -> Result<String, TranscribeError> {
        let _span = debug_span!("transcribe", len = text.len()).entered();
        let (_, tokens) = self.tokens(text);
        let transliterator = self.transliterator();

        let mut out = String::with_capacity(text.len() * 3);
        let mut unit_count = 0usize;
        for token in &tokens {
            if !token.is_word() {
                out.push_str(&token.text);
                continue;
            }
            for unit in segment(&token.text) {
                out.push_str(&transliterator.transliterate(unit)?);
                unit_count += 1;
            }
        }
        debug!(token_count = tokens.len(), unit_count);
        Ok(out)
    }

    pub fn transcription(&self, text: &str) -> Result<Transcription, TranscribeError> {
        Ok(Transcription {
            source: text.to_string(),
            baybayin: self.transcribe(text)?,
        })
    }

    pub fn explain(&self, text: &str) -> Result<Explanation, TranscribeError> {
        let _span = debug_span!("explain", len = text.len()).entered();
        let (stages, tokens) = self.tokens(text);
        let transliterator = self.transliterator();

        let mut explained = Vec::with_capacity(tokens.len());
        let mut output = String::new();
        for token in tokens {
            let mut units = Vec::new();
            let token_output = if token.is_word() {
                for unit in segment(&token.text) {
                    units.push(UnitExplanation {
                        text: unit.to_string(),
                        kind: classify(unit)?,
                        glyphs: transliterator.transliterate(unit)?,
                    });
                }
                units.iter().map(|u| u.glyphs.as_str()).collect()
            } else {
                token.text.clone()
            };
            output.push_str(&token_output);
            explained.push(TokenExplanation {
                kind: token.kind,
                text: token.text,
                units,
                output: token_output,
            });
        }

        Ok(Explanation {
            stages,
            tokens: explained,
            output,
        })
    }
}

/// Transcribe with the process-wide symbol table and settings.
pub fn transcribe(text: &str) -> Result<String, TranscribeError> {
    Transcriber::global().transcribe(text)
}
