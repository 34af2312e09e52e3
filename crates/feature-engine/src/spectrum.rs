//! Windowed Power Spectral Density

use crate::error::FeatureError;
use crate::matrix::FeatureMatrix;
use crate::window::WindowSpec;
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// FFT-backed power estimator for fixed-length windows
///
/// Plans the forward transform once and reuses it for every window of the
/// same length.
pub struct SpectrumAnalyzer {
    window: usize,
    fft: Arc<dyn Fft<f64>>,
    buffer: Vec<Complex<f64>>,
}

impl SpectrumAnalyzer {
    /// Create an analyzer with a cached forward plan for `window` samples
    pub fn new(window: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(window);
        Self {
            window,
            fft,
            buffer: vec![Complex::new(0.0, 0.0); window],
        }
    }

    /// Power at the non-negative frequencies of one window.
    ///
    /// Returns `|X[k]|^2 / window` for `k < window / 2`. No tapering is
    /// applied; the estimate uses the implicit rectangular window.
    pub fn power(&mut self, win: &[f64]) -> Vec<f64> {
        for (slot, &v) in self.buffer.iter_mut().zip(win) {
            *slot = Complex::new(v, 0.0);
        }
        self.fft.process(&mut self.buffer);

        self.buffer
            .iter()
            .take(self.window / 2)
            .map(|c| c.norm_sqr() / self.window as f64)
            .collect()
    }
}

/// Per-window one-sided power spectral density matrix
pub fn compute_psd(seq: &[f64], spec: &WindowSpec) -> Result<FeatureMatrix, FeatureError> {
    let count = spec.count(seq.len())?;
    let mut analyzer = SpectrumAnalyzer::new(spec.window);

    let mut matrix = FeatureMatrix::zeros(count, spec.window / 2);
    for (i, win) in spec.windows(seq)?.enumerate() {
        matrix.row_mut(i).copy_from_slice(&analyzer.power(win));
    }
    Ok(matrix)
}
