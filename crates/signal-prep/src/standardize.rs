//! Sequence Standardization

use crate::error::PrepError;
use tracing::trace;

/// Standardize a sequence to zero mean and unit standard deviation.
///
/// Uses population statistics (divisor = length). A constant sequence has
/// zero variance and is rejected instead of producing non-finite values.
pub fn standardize(seq: &[f64]) -> Result<Vec<f64>, PrepError> {
    if seq.is_empty() {
        return Err(PrepError::EmptySequence);
    }

    let n = seq.len() as f64;
    let mean = seq.iter().sum::<f64>() / n;
    let variance = seq.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 || !std_dev.is_finite() {
        return Err(PrepError::ConstantSequence);
    }

    trace!(mean, std_dev, "standardizing sequence");

    Ok(seq.iter().map(|&v| (v - mean) / std_dev).collect())
}
