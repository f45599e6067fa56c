//! FFI layer – each sub-module exposes one domain area of the C API.
//!
//! Helpers shared across sub-modules live here (pointer conversion, the
//! argument guard macro, string ownership).

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

pub mod config;
pub mod transcribe;


pub use config::*;
pub use transcribe::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand a Rust string to C. Returns null if it contains an interior NUL.
/// The caller releases it with [`baybayin_string_free`].
pub(crate) fn string_into_raw(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Validate one or more FFI arguments and bind them as safe Rust values,
/// returning `$on_err` from the **calling** function if any check fails.
///
/// | Syntax | What it does |
/// |--------|--------------|
/// | `str: $name = $ptr` | Null-check `$ptr: *const c_char`, convert via [`cptr_to_str`] to `&str`, bind as `$name`. |
///
/// ```ignore
/// ffi_guard!(ptr::null_mut();
///     str: text = text_ptr,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

// Make macros available to sub-modules.
pub(crate) use ffi_guard;

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn baybayin_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Free a string returned by this library. No-op on null.
#[no_mangle]
pub extern "C" fn baybayin_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}

/// Start tracing. A null `log_dir` logs to stderr.
#[no_mangle]
pub extern "C" fn baybayin_trace_init(log_dir: *const c_char) {
    match unsafe { cptr_to_str(log_dir) } {
        Some(dir) => crate::trace_init::init_tracing(Some(Path::new(dir))),
        None => crate::trace_init::init_tracing(None),
    }
}
