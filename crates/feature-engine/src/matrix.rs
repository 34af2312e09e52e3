//! Row-Major Feature Matrix

use crate::error::{ConfigError, FeatureError};
use serde::{Deserialize, Serialize};

/// Row-major matrix of per-window feature values
///
/// Every engine emits one of these with one row per window, so matrices
/// computed with the same window and lag can be concatenated column-wise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl FeatureMatrix {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of rows (windows)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (features per window)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// View of row `i`
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Mutable view of row `i`
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let start = i * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Element at (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Flat row-major view of the whole matrix
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Concatenate matrices column-wise.
    ///
    /// All parts must share the same row count; feature blocks computed
    /// with different window/lag pairs do not align and are rejected.
    pub fn hstack(parts: &[FeatureMatrix]) -> Result<FeatureMatrix, ConfigError> {
        let rows = parts.first().map(|m| m.rows).unwrap_or(0);
        for part in parts {
            if part.rows != rows {
                return Err(ConfigError::RowCountMismatch {
                    left: rows,
                    right: part.rows,
                });
            }
        }

        let cols = parts.iter().map(|m| m.cols).sum();
        let mut out = FeatureMatrix::zeros(rows, cols);
        for r in 0..rows {
            let dst = out.row_mut(r);
            let mut offset = 0;
            for part in parts {
                dst[offset..offset + part.cols].copy_from_slice(part.row(r));
                offset += part.cols;
            }
        }
        Ok(out)
    }

    /// Re-standardize every column to zero mean and unit population
    /// standard deviation.
    ///
    /// All columns are checked before any value is rewritten, so a
    /// degenerate (zero-variance) column leaves the matrix untouched.
    pub fn standardize_columns(&mut self) -> Result<(), FeatureError> {
        let n = self.rows as f64;
        let mut stats = Vec::with_capacity(self.cols);
        for c in 0..self.cols {
            let mean = (0..self.rows).map(|r| self.get(r, c)).sum::<f64>() / n;
            let variance = (0..self.rows)
                .map(|r| {
                    let d = self.get(r, c) - mean;
                    d * d
                })
                .sum::<f64>()
                / n;
            let std_dev = variance.sqrt();
            if std_dev == 0.0 || !std_dev.is_finite() {
                return Err(FeatureError::DegenerateColumn { index: c });
            }
            stats.push((mean, std_dev));
        }

        for r in 0..self.rows {
            for (c, &(mean, std_dev)) in stats.iter().enumerate() {
                self.data[r * self.cols + c] = (self.data[r * self.cols + c] - mean) / std_dev;
            }
        }
        Ok(())
    }
}
