//! Embeddable Baybayin transcription engine.
//!
//! Re-exports the pipeline from `baybayin_core` and adds a C ABI for hosts
//! that cannot link Rust directly.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
pub mod trace_init;

pub use baybayin_core::*;
