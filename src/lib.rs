//! Deduplicate delimiter-separated text records.
//!
//! Input is split into items on an item separator and deduplicated under one
//! of three [`Mode`]s:
//!
//! - [`Mode::Item`]: whole items, first occurrence wins, empties dropped
//! - [`Mode::Key`]: first item per key, keyless items always kept
//! - [`Mode::KeyValue`]: value sets collapsed within each `key=v1,v2` group,
//!   repeated groups with the same canonical value dropped
//!
//! ```
//! use dedupe::{process, DedupeOptions, Mode};
//!
//! let out = process("a=1\na=2\nb=3\nc", &DedupeOptions::with_mode(Mode::Key)).unwrap();
//! assert_eq!(out, "a=1\nb=3\nc\n");
//! ```

mod core;
mod engine;
mod errors;

pub use crate::core::config::{DedupeConfig, Defaults};
pub use crate::core::mode::Mode;
pub use crate::core::options::DedupeOptions;
pub use engine::{
    dedupe, dedupe_by_key, dedupe_by_key_value, dedupe_items, process, serialize, tokenize,
};
pub use errors::DedupeError;

/// Output emitted instead of deduplicated content when the mode is not recognized.
pub const UNKNOWN_MODE_MESSAGE: &str = "Something's not right - check your arguments";

#[cfg(test)]
mod tests;
