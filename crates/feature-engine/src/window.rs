//! Shared Window Partitioning

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Fixed-size, fixed-lag partitioning of a sequence into windows
///
/// Consecutive windows start `lag` samples apart and overlap whenever
/// `lag < window`. All three feature engines share this one partitioner so
/// their validation can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Number of samples per window
    pub window: usize,
    /// Shift in samples between consecutive window starts
    pub lag: usize,
}

impl WindowSpec {
    /// Create a new window specification
    pub fn new(window: usize, lag: usize) -> Self {
        Self { window, lag }
    }

    /// Number of windows that tile a sequence of length `len`.
    ///
    /// Requires `window >= 1`, `lag >= 1`, `window <= len` and
    /// `(len - window) % lag == 0`. Anything else is a configuration error,
    /// never a silent truncation.
    pub fn count(&self, len: usize) -> Result<usize, ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if self.lag == 0 {
            return Err(ConfigError::ZeroLag);
        }
        if self.window > len {
            return Err(ConfigError::WindowExceedsLength {
                window: self.window,
                len,
            });
        }
        if (len - self.window) % self.lag != 0 {
            return Err(ConfigError::LagMisaligned {
                len,
                window: self.window,
                lag: self.lag,
            });
        }
        Ok((len - self.window) / self.lag + 1)
    }

    /// The `i`-th window of `seq`: `seq[lag * i .. window + lag * i]`
    pub fn slice<'a>(&self, seq: &'a [f64], i: usize) -> &'a [f64] {
        &seq[self.lag * i..self.window + self.lag * i]
    }

    /// Iterator over every window of `seq`, in temporal order
    pub fn windows<'a>(
        &self,
        seq: &'a [f64],
    ) -> Result<impl Iterator<Item = &'a [f64]> + 'a, ConfigError> {
        let count = self.count(seq.len())?;
        let spec = *self;
        Ok((0..count).map(move |i| spec.slice(seq, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_overlapping() {
        // 100 samples, window 100, lag 20 over 180 samples -> 5 windows
        let spec = WindowSpec::new(100, 20);
        assert_eq!(spec.count(180), Ok(5));
    }

    #[test]
    fn test_count_single_window() {
        let spec = WindowSpec::new(4, 1);
        assert_eq!(spec.count(4), Ok(1));
    }

    #[test]
    fn test_count_disjoint_windows() {
        let spec = WindowSpec::new(3, 3);
        assert_eq!(spec.count(6), Ok(2));
    }

    #[test]
    fn test_misaligned_lag_rejected() {
        let spec = WindowSpec::new(4, 3);
        assert_eq!(
            spec.count(12),
            Err(ConfigError::LagMisaligned {
                len: 12,
                window: 4,
                lag: 3
            })
        );
    }

    #[test]
    fn test_oversized_window_rejected() {
        let spec = WindowSpec::new(10, 2);
        assert_eq!(
            spec.count(6),
            Err(ConfigError::WindowExceedsLength { window: 10, len: 6 })
        );
    }

    #[test]
    fn test_zero_parameters_rejected() {
        assert_eq!(WindowSpec::new(0, 2).count(8), Err(ConfigError::ZeroWindow));
        assert_eq!(WindowSpec::new(4, 0).count(8), Err(ConfigError::ZeroLag));
    }

    #[test]
    fn test_slice_offsets() {
        let seq: Vec<f64> = (0..8).map(|v| v as f64).collect();
        let spec = WindowSpec::new(4, 2);
        assert_eq!(spec.slice(&seq, 0), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(spec.slice(&seq, 1), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!(spec.slice(&seq, 2), &[4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_windows_iterator_matches_count() {
        let seq = vec![0.0; 20];
        let spec = WindowSpec::new(8, 4);
        let count = spec.count(seq.len()).unwrap();
        assert_eq!(spec.windows(&seq).unwrap().count(), count);
    }

    proptest! {
        #[test]
        fn prop_count_matches_tiling(
            window in 1usize..16,
            lag in 1usize..8,
            extra in 0usize..8,
        ) {
            let len = window + lag * extra;
            let spec = WindowSpec::new(window, lag);
            prop_assert_eq!(spec.count(len), Ok(extra + 1));
        }
    }
}
