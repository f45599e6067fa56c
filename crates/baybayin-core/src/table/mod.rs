//! Glyph lookup tables for the transliterator.
//!
//! A [`SymbolTable`] maps single letters to base glyphs and vowels to the
//! combining marks that replace the implicit "a". Tables are immutable once
//! built and are handed to the transliterator explicitly; [`SymbolTable::global`]
//! offers a process-wide default built from the embedded TOML (or a custom TOML
//! registered with [`SymbolTable::init_custom`] before first use).

mod config;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub use config::SymbolTableError;
use config::{parse_symbol_toml, ParsedSymbols};

pub const DEFAULT_TOML: &str = include_str!("default_symbols.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<SymbolTable> = OnceLock::new();

/// Returns the embedded default symbol TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<char, String>,
    vowel_marks: HashMap<char, String>,
    virama: Option<String>,
}

impl SymbolTable {
    /// Build a table from in-memory maps. Intended for synthetic alphabets in
    /// tests and for embedders that assemble their own glyph sets.
    pub fn new(symbols: HashMap<char, String>, vowel_marks: HashMap<char, String>) -> Self {
        Self {
            symbols,
            vowel_marks,
            virama: None,
        }
    }

    pub fn with_virama(mut self, virama: impl Into<String>) -> Self {
        self.virama = Some(virama.into());
        self
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, SymbolTableError> {
        let ParsedSymbols {
            symbols,
            vowel_marks,
            virama,
        } = parse_symbol_toml(toml_str)?;
        Ok(Self {
            symbols,
            vowel_marks,
            virama,
        })
    }

    pub fn open(path: &Path) -> Result<Self, SymbolTableError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Set custom TOML before first `global()` call. Fails with
    /// `AlreadyInitialized` once the global table has been built.
    pub fn init_custom(toml_content: String) -> Result<(), SymbolTableError> {
        // Validate eagerly
        parse_symbol_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(SymbolTableError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| SymbolTableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static SymbolTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            SymbolTable::from_toml(toml_str).expect("symbol TOML must be valid")
        })
    }

    /// Base glyph for a single letter.
    pub fn symbol(&self, c: char) -> Option<&str> {
        self.symbols.get(&c).map(String::as_str)
    }

    /// Combining mark that replaces the implicit vowel.
    pub fn vowel_mark(&self, vowel: char) -> Option<&str> {
        self.vowel_marks.get(&vowel).map(String::as_str)
    }

    pub fn virama(&self) -> Option<&str> {
        self.virama.as_deref()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn vowel_mark_count(&self) -> usize {
        self.vowel_marks.len()
    }
}
