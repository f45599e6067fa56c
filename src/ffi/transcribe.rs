use std::ffi::{c_char, CString};
use std::ptr;

use tracing::debug_span;

use super::{ffi_guard, string_into_raw};
use crate::Transcriber;

// --- Transcription FFI ---

/// Source text and its Baybayin rendering, returned to the host.
#[repr(C)]
pub struct BaybayinTranscription {
    pub source: *const c_char,
    pub baybayin: *const c_char,
    _owned: *mut (CString, CString),
}

impl BaybayinTranscription {
    fn empty() -> Self {
        Self {
            source: ptr::null(),
            baybayin: ptr::null(),
            _owned: ptr::null_mut(),
        }
    }
}

/// Transcribe with the process-wide table and settings. Both fields are null
/// on invalid input.
#[no_mangle]
pub extern "C" fn baybayin_transcribe(text: *const c_char) -> BaybayinTranscription {
    ffi_guard!(BaybayinTranscription::empty();
        str: text_str = text,
    );
    let _span = debug_span!("ffi_transcribe", len = text_str.len()).entered();
    let Ok(result) = Transcriber::global().transcription(text_str) else {
        return BaybayinTranscription::empty();
    };
    let Ok(source_c) = CString::new(result.source) else {
        return BaybayinTranscription::empty();
    };
    let Ok(baybayin_c) = CString::new(result.baybayin) else {
        return BaybayinTranscription::empty();
    };
    let source_ptr = source_c.as_ptr();
    let baybayin_ptr = baybayin_c.as_ptr();
    let owned = Box::into_raw(Box::new((source_c, baybayin_c)));
    BaybayinTranscription {
        source: source_ptr,
        baybayin: baybayin_ptr,
        _owned: owned,
    }
}

#[no_mangle]
pub extern "C" fn baybayin_transcription_free(result: BaybayinTranscription) {
    if !result._owned.is_null() {
        unsafe {
            drop(Box::from_raw(result._owned));
        }
    }
}

/// Stage-by-stage breakdown as a JSON document. Free with
/// `baybayin_string_free`. Null on invalid input.
#[no_mangle]
pub extern "C" fn baybayin_explain_json(text: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    let _span = debug_span!("ffi_explain_json", len = text_str.len()).entered();
    let Ok(explanation) = Transcriber::global().explain(text_str) else {
        return ptr::null_mut();
    };
    match serde_json::to_string(&explanation) {
        Ok(json) => string_into_raw(json),
        Err(_) => ptr::null_mut(),
    }
}
