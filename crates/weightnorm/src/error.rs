use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot convert value at {location} to a number: {reason}")]
    Coercion {
        location: String,
        reason: CoercionReason,
    },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Why a "weight" value could not be coerced to a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionReason {
    Bool,
    Null,
    Array,
    Object,
    NonNumericString,
    NonFinite,
}

impl core::fmt::Display for CoercionReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoercionReason::Bool => f.write_str("value is a boolean"),
            CoercionReason::Null => f.write_str("value is null"),
            CoercionReason::Array => f.write_str("value is an array"),
            CoercionReason::Object => f.write_str("value is an object"),
            CoercionReason::NonNumericString => f.write_str("string is not numeric"),
            CoercionReason::NonFinite => f.write_str("value is not a finite number"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
