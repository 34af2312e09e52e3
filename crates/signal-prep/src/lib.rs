//! Signal Preprocessing
//!
//! Whole-sequence transforms applied to a current trace before feature
//! extraction: standardization and discrete differentiation.

mod differentiate;
mod error;
mod standardize;

pub use differentiate::differentiate;
pub use error::PrepError;
pub use standardize::standardize;
