//! Current Trace Feature Engine
//!
//! Sliding-window statistical and spectral feature extraction from a
//! fixed-rate current trace, for downstream jump detection. Three engines
//! share one window/lag partitioner: incremental moment statistics,
//! normalized autocorrelation and one-sided power spectral density.

mod autocorrelation;
mod error;
mod features;
mod matrix;
mod spectrum;
mod statistics;
mod window;

pub use autocorrelation::compute_autocorrelation;
pub use error::{ConfigError, FeatureError};
pub use features::{ExtractorConfig, FeatureExtractor};
pub use matrix::FeatureMatrix;
pub use spectrum::{compute_psd, SpectrumAnalyzer};
pub use statistics::{central_moment, compute_moments, rolling_means, std_with_mean};
pub use window::WindowSpec;
