//! Windowed Moment Statistics

use crate::error::{ConfigError, FeatureError};
use crate::matrix::FeatureMatrix;
use crate::window::WindowSpec;

/// Population standard deviation of a slice around a precomputed mean
pub fn std_with_mean(seq: &[f64], mean: f64) -> f64 {
    let sum_sq: f64 = seq.iter().map(|&v| (v - mean) * (v - mean)).sum();
    (sum_sq / seq.len() as f64).sqrt()
}

/// Central moment stored at column `order`: the average of
/// `(x - mean)^(order + 1)` over the slice.
///
/// The off-by-one exponent matches the moment matrix layout, where column
/// `k` holds the `(k + 1)`-th central moment. Kept for compatibility with
/// previously extracted feature vectors.
pub fn central_moment(seq: &[f64], mean: f64, order: usize) -> f64 {
    let sum: f64 = seq
        .iter()
        .map(|&v| (v - mean).powi(order as i32 + 1))
        .sum();
    sum / seq.len() as f64
}

/// Mean of every window, the first computed directly and the rest by the
/// incremental update over the `lag` samples leaving and entering the
/// window.
///
/// The update is a fold over the window index: each mean depends on the
/// previous one, which is what makes the whole chain O(M * lag + window)
/// instead of O(M * window).
pub fn rolling_means(seq: &[f64], spec: &WindowSpec) -> Result<Vec<f64>, ConfigError> {
    let count = spec.count(seq.len())?;
    let window = spec.window as f64;
    let first = seq[..spec.window].iter().sum::<f64>() / window;

    let rest = (1..count).scan(first, |mean, i| {
        let out = spec.lag * (i - 1);
        let leaving: f64 = seq[out..out + spec.lag].iter().sum();
        let entering: f64 = seq[spec.window + out..spec.window + out + spec.lag]
            .iter()
            .sum();
        *mean = *mean - leaving / window + entering / window;
        Some(*mean)
    });

    Ok(std::iter::once(first).chain(rest).collect())
}

/// Per-window mean, population standard deviation and higher central
/// moments.
///
/// Column 0 is the window mean, column 1 the population standard deviation
/// and column `k` for `k >= 2` the average of `(x - mean)^(k + 1)` over the
/// window. Requires `n_moms >= 2`.
pub fn compute_moments(
    seq: &[f64],
    spec: &WindowSpec,
    n_moms: usize,
) -> Result<FeatureMatrix, FeatureError> {
    if n_moms < 2 {
        return Err(ConfigError::TooFewMoments(n_moms).into());
    }
    let count = spec.count(seq.len())?;
    let means = rolling_means(seq, spec)?;

    let mut matrix = FeatureMatrix::zeros(count, n_moms);
    for i in 0..count {
        let win = spec.slice(seq, i);
        let row = matrix.row_mut(i);
        row[0] = means[i];
        row[1] = std_with_mean(win, means[i]);
        for order in 2..n_moms {
            row[order] = central_moment(win, means[i], order);
        }
    }
    Ok(matrix)
}
