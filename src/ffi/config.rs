use std::ffi::c_char;

use tracing::debug;

use super::ffi_guard;
use crate::{settings, SymbolTable};

// --- Configuration FFI ---
//
// Status codes: 0 = ok, 1 = invalid argument, 2 = invalid TOML,
// 3 = already initialized.

const STATUS_OK: i32 = 0;
const STATUS_INVALID_ARGUMENT: i32 = 1;
const STATUS_INVALID_TOML: i32 = 2;
const STATUS_ALREADY_INITIALIZED: i32 = 3;

/// Register a custom symbol table TOML. Must run before the first transcription.
#[no_mangle]
pub extern "C" fn baybayin_symbols_init(toml: *const c_char) -> i32 {
    ffi_guard!(STATUS_INVALID_ARGUMENT;
        str: toml_str = toml,
    );
    match SymbolTable::init_custom(toml_str.to_string()) {
        Ok(()) => STATUS_OK,
        Err(crate::SymbolTableError::AlreadyInitialized) => {
            debug!("symbol table already in use; custom TOML ignored");
            STATUS_ALREADY_INITIALIZED
        }
        Err(e) => {
            debug!(error = %e, "invalid symbol TOML");
            STATUS_INVALID_TOML
        }
    }
}

/// Register a custom settings TOML. Must run before the first transcription.
#[no_mangle]
pub extern "C" fn baybayin_settings_init(toml: *const c_char) -> i32 {
    ffi_guard!(STATUS_INVALID_ARGUMENT;
        str: toml_str = toml,
    );
    match settings::init_custom(toml_str.to_string()) {
        Ok(()) => STATUS_OK,
        Err(settings::SettingsError::AlreadyInitialized) => {
            debug!("settings already in use; custom TOML ignored");
            STATUS_ALREADY_INITIALIZED
        }
        Err(e) => {
            debug!(error = %e, "invalid settings TOML");
            STATUS_INVALID_TOML
        }
    }
}
