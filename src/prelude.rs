//! Prelude module for calendar_math crate.
//!
//! Re-exports the derive macros from derive_more used across modules.

#[allow(unused_imports)]
pub use derive_more::Display;
