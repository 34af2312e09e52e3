//! Feature Matrix Assembly

use crate::autocorrelation::compute_autocorrelation;
use crate::error::FeatureError;
use crate::matrix::FeatureMatrix;
use crate::spectrum::compute_psd;
use crate::statistics::compute_moments;
use crate::window::WindowSpec;
use serde::{Deserialize, Serialize};
use signal_prep::{differentiate, standardize};
use tracing::debug;

/// Extraction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Samples per window
    pub window: usize,
    /// Shift between consecutive windows
    pub lag: usize,
    /// Moment columns per window (mean, std, then higher central moments)
    pub n_moms: usize,
    /// Also extract features from the differentiated trace
    pub include_differentiated: bool,
    /// Re-standardize the columns of the combined matrix
    ///
    /// The lag-0 autocorrelation column is constant 1.0, so enabling this
    /// on a feature set that includes autocorrelation fails with a
    /// degenerate-column error.
    pub standardize_columns: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            window: 100,
            lag: 20,
            n_moms: 10,
            include_differentiated: true,
            standardize_columns: false,
        }
    }
}

/// Runs the windowed engines over a current trace and assembles one
/// feature matrix
pub struct FeatureExtractor {
    config: ExtractorConfig,
}

impl FeatureExtractor {
    /// Create an extractor with the given parameters
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the combined feature matrix from a raw current trace.
    ///
    /// The trace is standardized first; when configured, its discrete
    /// derivative contributes a second block of columns computed with the
    /// same window and lag, so every block shares the same row count.
    pub fn extract(&self, raw: &[f64]) -> Result<FeatureMatrix, FeatureError> {
        let spec = WindowSpec::new(self.config.window, self.config.lag);
        let standardized = standardize(raw)?;

        let mut blocks = self.engine_blocks(&standardized, &spec)?;
        if self.config.include_differentiated {
            let differentiated = differentiate(&standardized)?;
            blocks.extend(self.engine_blocks(&differentiated, &spec)?);
        }

        let mut combined = FeatureMatrix::hstack(&blocks)?;
        debug!(
            rows = combined.rows(),
            cols = combined.cols(),
            "assembled feature matrix"
        );

        if self.config.standardize_columns {
            combined.standardize_columns()?;
        }
        Ok(combined)
    }

    fn engine_blocks(
        &self,
        seq: &[f64],
        spec: &WindowSpec,
    ) -> Result<Vec<FeatureMatrix>, FeatureError> {
        let moments = compute_moments(seq, spec, self.config.n_moms)?;
        let autocorr = compute_autocorrelation(seq, spec)?;
        let psd = compute_psd(seq, spec)?;
        debug!(
            windows = moments.rows(),
            window = spec.window,
            lag = spec.lag,
            "computed engine blocks"
        );
        Ok(vec![moments, autocorr, psd])
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use signal_prep::PrepError;

    fn config(window: usize, lag: usize, n_moms: usize) -> ExtractorConfig {
        ExtractorConfig {
            window,
            lag,
            n_moms,
            include_differentiated: true,
            standardize_columns: false,
        }
    }

    #[test]
    fn test_extract_ramp_trace() {
        // 20 samples, window 8, lag 4 -> 4 windows; per block
        // n_moms + window/2 + window/2 columns, doubled by the derivative
        let raw: Vec<f64> = (0..20).map(|v| v as f64).collect();
        let extractor = FeatureExtractor::new(config(8, 4, 3));
        let features = extractor.extract(&raw).unwrap();
        assert_eq!(features.rows(), 4);
        assert_eq!(features.cols(), 2 * (3 + 4 + 4));
    }

    #[test]
    fn test_extract_without_derivative() {
        let raw: Vec<f64> = (0..20).map(|v| (v as f64).sin()).collect();
        let extractor = FeatureExtractor::new(ExtractorConfig {
            include_differentiated: false,
            ..config(8, 4, 2)
        });
        let features = extractor.extract(&raw).unwrap();
        assert_eq!(features.rows(), 4);
        assert_eq!(features.cols(), 2 + 4 + 4);
    }

    #[test]
    fn test_extract_constant_trace_rejected() {
        let extractor = FeatureExtractor::new(config(8, 4, 2));
        let err = extractor.extract(&[5.0; 20]).unwrap_err();
        assert_eq!(err, FeatureError::Prep(PrepError::ConstantSequence));
    }

    #[test]
    fn test_extract_misaligned_trace_rejected() {
        let raw: Vec<f64> = (0..21).map(|v| v as f64).collect();
        let extractor = FeatureExtractor::new(config(8, 4, 2));
        let err = extractor.extract(&raw).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::Config(ConfigError::LagMisaligned { .. })
        ));
    }

    #[test]
    fn test_standardize_columns_degenerate_on_autocorr() {
        // lag-0 autocorrelation column is constant 1.0
        let raw: Vec<f64> = (0..20).map(|v| (v as f64).sin()).collect();
        let extractor = FeatureExtractor::new(ExtractorConfig {
            standardize_columns: true,
            ..config(8, 4, 2)
        });
        let err = extractor.extract(&raw).unwrap_err();
        assert!(matches!(err, FeatureError::DegenerateColumn { .. }));
    }

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.window, 100);
        assert_eq!(config.lag, 20);
        assert_eq!(config.n_moms, 10);
        assert!(config.include_differentiated);
        assert!(!config.standardize_columns);
    }
}
