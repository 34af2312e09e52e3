//! Feature Extraction Error Types

use signal_prep::PrepError;
use thiserror::Error;

/// Invalid extraction parameters, rejected before any computation begins
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Window length of zero
    #[error("window must be at least 1")]
    ZeroWindow,

    /// Lag of zero
    #[error("lag must be at least 1")]
    ZeroLag,

    /// Window longer than the sequence
    #[error("window {window} exceeds sequence length {len}")]
    WindowExceedsLength { window: usize, len: usize },

    /// Window/lag pair does not tile the sequence
    #[error(
        "window {window} and lag {lag} do not tile a sequence of length {len}: \
         len - window must be a multiple of lag"
    )]
    LagMisaligned { len: usize, window: usize, lag: usize },

    /// Fewer moment columns than the mandatory mean and standard deviation
    #[error("n_moms must be at least 2, got {0}")]
    TooFewMoments(usize),

    /// Concatenation of matrices with different row counts
    #[error("cannot concatenate matrices with {left} and {right} rows")]
    RowCountMismatch { left: usize, right: usize },
}

/// Errors from the windowed feature engines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Invalid extraction parameters
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Preprocessing failed before any window was computed
    #[error(transparent)]
    Prep(#[from] PrepError),

    /// Window whose lag-0 autocorrelation is zero cannot be normalized
    #[error("window {index} has zero lag-0 autocorrelation, cannot normalize")]
    DegenerateWindow { index: usize },

    /// Zero-variance column cannot be re-standardized
    #[error("column {index} has zero variance, cannot standardize")]
    DegenerateColumn { index: usize },
}
