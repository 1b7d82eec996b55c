#![doc = include_str!("../README.md")]

pub mod document;
pub mod error;
pub mod transform;

pub use crate::document::{load, save};
pub use crate::error::{CoercionReason, Error, Result};
pub use crate::transform::{WEIGHT_KEY, normalize_weights};

use std::path::Path;

/// Load the document at `path`, coerce every `"weight"` value to a float,
/// and write the result back over the same file. Returns the number of
/// values coerced. Nothing is written if the transform fails.
pub fn normalize_file(path: &Path) -> Result<usize> {
    let mut doc = load(path)?;
    let converted = normalize_weights(&mut doc)?;
    save(path, &doc)?;
    Ok(converted)
}
