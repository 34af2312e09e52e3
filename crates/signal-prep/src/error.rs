//! Preprocessing Error Types

use thiserror::Error;

/// Errors during sequence preprocessing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrepError {
    /// Input sequence has no elements
    #[error("cannot preprocess an empty sequence")]
    EmptySequence,

    /// Input sequence is shorter than the transform requires
    #[error("sequence of length {len} is too short, need at least {min}")]
    TooShort { len: usize, min: usize },

    /// Zero-variance input cannot be standardized
    #[error("sequence has zero variance, standardization would divide by zero")]
    ConstantSequence,
}
