//! Discrete Differentiation

use crate::error::PrepError;

/// First discrete difference of a sequence, with the final difference
/// duplicated so the output has the same length as the input.
///
/// The duplication means the last two output elements are always equal; it
/// keeps windowed features of a trace and of its derivative row-aligned.
pub fn differentiate(seq: &[f64]) -> Result<Vec<f64>, PrepError> {
    if seq.len() < 2 {
        return Err(PrepError::TooShort {
            len: seq.len(),
            min: 2,
        });
    }

    let mut out: Vec<f64> = seq.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let last = out[out.len() - 1];
    out.push(last);
    Ok(out)
}
