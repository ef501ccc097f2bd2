// crates/shared-kernel/src/error.rs
use std::{num::ParseIntError, path::PathBuf};

use thiserror::Error;

use crate::value_objects::ParamSlot;

/// Root error type shared across the workspace.
///
/// Every variant maps onto one of the failure classes an agent reports for
/// `vfs.dir.count`; the message texts are part of that contract.
#[derive(Debug, Error)]
pub enum DirCountError {
    #[error("Too few parameters.")]
    TooFewParameters,

    #[error("Too many parameters.")]
    TooManyParameters,

    /// A positional parameter failed validation.
    #[error("Invalid {slot} parameter: {source}")]
    InvalidParameters {
        slot: ParamSlot,
        #[source]
        source: ParamError,
    },

    /// The walk hit a filesystem error that is not a pruning decision.
    #[error("Cannot parse result: {}: {source}", .path.display())]
    TraversalFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported metric: {0}")]
    UnsupportedMetric(String),
}

pub type Result<T> = std::result::Result<T, DirCountError>;

impl DirCountError {
    pub fn invalid(slot: ParamSlot, source: ParamError) -> Self {
        Self::InvalidParameters { slot, source }
    }

    /// Slot that failed validation, if this is a parameter error.
    pub fn slot(&self) -> Option<ParamSlot> {
        match self {
            Self::InvalidParameters { slot, .. } => Some(*slot),
            _ => None,
        }
    }
}

/// Underlying cause of an invalid parameter.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("invalid number '{input}': {source}")]
    Integer {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown memory suffix {0}")]
    UnknownSizeSuffix(char),

    #[error("unknown time suffix {0}")]
    UnknownTimeSuffix(char),

    #[error("value '{0}' is out of range")]
    Overflow(String),

    #[error("depth must be -1 or greater: {0}")]
    DepthOutOfRange(i64),

    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    #[error("invalid type: {0}")]
    InvalidType(String),
}

pub type ParamResult<T> = std::result::Result<T, ParamError>;
