use std::collections::{BTreeMap, HashMap};
use std::io;

use serde::Deserialize;

use crate::alphabet::{is_vowel, DEFAULT_VOWEL};

#[derive(Deserialize)]
struct SymbolConfig {
    #[serde(default)]
    virama: Option<String>,
    symbols: BTreeMap<String, String>,
    #[serde(default)]
    vowel_marks: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SymbolTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[symbols] table is empty")]
    Empty,
    #[error("key is not a single character: {0:?}")]
    NotSingleChar(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("vowel mark key must be a vowel other than 'a': {0}")]
    InvalidVowelMark(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("symbol table already initialized")]
    AlreadyInitialized,
}

/// Validated contents of a symbol TOML document.
#[derive(Debug)]
pub(crate) struct ParsedSymbols {
    pub(crate) symbols: HashMap<char, String>,
    pub(crate) vowel_marks: HashMap<char, String>,
    pub(crate) virama: Option<String>,
}

fn single_char(key: &str) -> Result<char, SymbolTableError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SymbolTableError::NotSingleChar(key.to_string())),
    }
}

/// Parse and validate a symbol TOML document.
pub(crate) fn parse_symbol_toml(toml_str: &str) -> Result<ParsedSymbols, SymbolTableError> {
    let config: SymbolConfig =
        toml::from_str(toml_str).map_err(|e| SymbolTableError::Parse(e.to_string()))?;

    if config.symbols.is_empty() {
        return Err(SymbolTableError::Empty);
    }

    let mut symbols = HashMap::with_capacity(config.symbols.len());
    for (key, value) in config.symbols {
        let c = single_char(&key)?;
        if value.is_empty() {
            return Err(SymbolTableError::EmptyValue(key));
        }
        symbols.insert(c, value);
    }

    let mut vowel_marks = HashMap::with_capacity(config.vowel_marks.len());
    for (key, value) in config.vowel_marks {
        let c = single_char(&key)?;
        if !is_vowel(c) || c == DEFAULT_VOWEL {
            return Err(SymbolTableError::InvalidVowelMark(key));
        }
        if value.is_empty() {
            return Err(SymbolTableError::EmptyValue(key));
        }
        vowel_marks.insert(c, value);
    }

    if matches!(config.virama.as_deref(), Some("")) {
        return Err(SymbolTableError::EmptyValue("virama".to_string()));
    }

    Ok(ParsedSymbols {
        symbols,
        vowel_marks,
        virama: config.virama,
    })
}
