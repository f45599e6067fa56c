//! Latin-script Tagalog to Baybayin transcription.
//!
//! The pipeline runs [`normalize`] → [`segment`] → [`transliterate`]; the
//! [`transcribe`] module wires the stages together behind [`Transcriber`].

pub mod alphabet;
pub mod normalize;
pub mod segment;
pub mod settings;
pub mod table;
pub mod transcribe;
pub mod transliterate;

#[cfg(test)]
mod tests;

pub use table::{SymbolTable, SymbolTableError};
pub use transcribe::{transcribe, Explanation, Transcriber, Transcription};
pub use transliterate::{PairKind, TranscribeError, TranscribeOptions};
