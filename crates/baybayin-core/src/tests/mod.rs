mod proptest_pipeline;

use crate::table::SymbolTable;
use crate::transcribe::Transcriber;
use crate::transliterate::TranscribeOptions;

pub(crate) fn default_transcriber() -> Transcriber<'static> {
    Transcriber::new(SymbolTable::global(), TranscribeOptions::default())
}
