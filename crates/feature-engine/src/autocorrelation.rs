//! Windowed Autocorrelation

use crate::error::FeatureError;
use crate::matrix::FeatureMatrix;
use crate::window::WindowSpec;

/// Per-window non-negative-lag autocorrelation, normalized so the lag-0
/// element is exactly 1.0.
///
/// Each lag product-sum is first divided by the window length (bias
/// normalization by length, not by the number of overlapping terms), then
/// the whole row is divided by its lag-0 value. Only lags `0..window / 2`
/// are kept, the non-negative half of the symmetric correlation. An
/// all-zero window has no lag-0 value to normalize by and is rejected
/// instead of emitting NaN.
pub fn compute_autocorrelation(
    seq: &[f64],
    spec: &WindowSpec,
) -> Result<FeatureMatrix, FeatureError> {
    let count = spec.count(seq.len())?;
    let half = spec.window / 2;
    let mut matrix = FeatureMatrix::zeros(count, half);
    if half == 0 {
        return Ok(matrix);
    }

    let window = spec.window as f64;
    for (i, win) in spec.windows(seq)?.enumerate() {
        let row = matrix.row_mut(i);
        for (k, slot) in row.iter_mut().enumerate() {
            let raw: f64 = win[..spec.window - k]
                .iter()
                .zip(&win[k..])
                .map(|(&a, &b)| a * b)
                .sum();
            *slot = raw / window;
        }

        let zero_lag = row[0];
        if zero_lag == 0.0 {
            return Err(FeatureError::DegenerateWindow { index: i });
        }
        for slot in row.iter_mut() {
            *slot /= zero_lag;
        }
    }
    Ok(matrix)
}
