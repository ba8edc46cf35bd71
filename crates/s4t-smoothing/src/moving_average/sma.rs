//! Simple Moving Average (SMA).
//!
//! The SMA is the unweighted mean of the previous n data points.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use s4t_core::{error::Result, num::StatFloat, traits::Smoother};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{checked_output_len, output_len_after_ma};

/// Configuration for the SMA smoother.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmaConfig {
    /// The window size for the moving average.
    pub window: usize,
    /// Output length the caller expects, checked on every call.
    pub expected_len: Option<usize>,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            window: 14,
            expected_len: None,
        }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            expected_len: None,
        }
    }

    /// Set the expected output length. Zero disables the check.
    pub fn with_expected_len(mut self, expected_len: usize) -> Self {
        self.expected_len = Some(expected_len);
        self
    }
}

/// Compute the Simple Moving Average.
///
/// `out[i]` is the mean of `data[i..i + window]`, so the output has
/// `data.len() - window + 1` points.
///
/// # Errors
///
/// - [`StatError::InvalidWindow`](s4t_core::StatError::InvalidWindow) if `window == 0`
/// - [`StatError::InsufficientData`](s4t_core::StatError::InsufficientData) if `window > data.len()`
/// - [`StatError::LengthMismatch`](s4t_core::StatError::LengthMismatch) if `expected` is
///   a non-zero length that differs from the output length
///
/// # Example
///
/// ```rust
/// use s4t_smoothing::moving_average::sma;
///
/// let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let result = sma(&data, 3, Some(3)).unwrap();
/// assert_eq!(result, vec![2.0, 3.0, 4.0]);
/// ```
pub fn sma<T: StatFloat>(data: &[T], window: usize, expected: Option<usize>) -> Result<Vec<T>> {
    let output_len = checked_output_len(data.len(), window, expected)?;
    let divisor = <T as StatFloat>::from_usize(window);

    // Summed per window: a non-finite value only reaches the windows holding it.
    let result: Vec<T> = data
        .windows(window)
        .map(|w| w.iter().fold(T::ZERO, |acc, &x| acc + x) / divisor)
        .collect();
    debug_assert_eq!(result.len(), output_len);

    Ok(result)
}

/// Simple Moving Average smoother.
///
/// # Formula
///
/// SMA_i = (P_i + P_{i+1} + ... + P_{i+n-1}) / n
#[derive(Debug, Clone, Default)]
pub struct Sma {
    config: SmaConfig,
}

impl Sma {
    /// Window width.
    pub fn window(&self) -> usize {
        self.config.window
    }
}

impl<T: StatFloat> Smoother<T> for Sma {
    type Config = SmaConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn name(&self) -> &'static str {
        "sma"
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        self.config.window
    }

    fn output_len(&self, input_len: usize) -> usize {
        output_len_after_ma(input_len, self.config.window)
    }

    fn smooth(&self, data: &[T]) -> Result<Vec<T>> {
        sma(data, self.config.window, self.config.expected_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use s4t_core::error::StatError;

    #[test]
    fn test_sma_default_config() {
        let config = SmaConfig::default();
        assert_eq!(config.window, 14);
        assert_eq!(config.expected_len, None);
    }

    #[test]
    fn test_sma_basic() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3, None).unwrap();

        assert_eq!(result.len(), 3);
        assert_relative_eq!(result[0], 2.0); // (1+2+3)/3
        assert_relative_eq!(result[1], 3.0); // (2+3+4)/3
        assert_relative_eq!(result[2], 4.0); // (3+4+5)/3
    }

    #[test]
    fn test_sma_window_equals_length() {
        let data = [1.0, 2.0, 3.0];
        let result = sma(&data, 3, Some(1)).unwrap();
        assert_eq!(result, vec![2.0]);
    }

    #[test]
    fn test_sma_window_one_is_identity() {
        let data = [4.0, -1.0, 2.5];
        assert_eq!(sma(&data, 1, None).unwrap(), data.to_vec());
    }

    #[test]
    fn test_sma_window_larger_than_length() {
        let data = [1.0, 2.0];
        assert_eq!(
            sma(&data, 5, None),
            Err(StatError::InsufficientData {
                window: 5,
                actual: 2
            })
        );
    }

    #[test]
    fn test_sma_empty_input() {
        let data: [f64; 0] = [];
        assert!(matches!(
            sma(&data, 1, None),
            Err(StatError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_sma_zero_window() {
        assert_eq!(sma(&[1.0, 2.0], 0, None), Err(StatError::InvalidWindow(0)));
    }

    #[test]
    fn test_sma_expected_length_mismatch() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            sma(&data, 2, Some(4)),
            Err(StatError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_sma_zero_expected_length_is_unchecked() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(sma(&data, 2, Some(0)).unwrap(), sma(&data, 2, None).unwrap());

        let smoother = <Sma as Smoother<f64>>::new(SmaConfig::new(2).with_expected_len(0));
        assert_eq!(Smoother::<f64>::smooth(&smoother, &data).unwrap(), vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_sma_does_not_touch_input() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let copy = data.clone();
        let _ = sma(&data, 2, None).unwrap();
        assert_eq!(data, copy);
    }

    #[test]
    fn test_sma_smoother() {
        let smoother = <Sma as Smoother<f64>>::new(SmaConfig::new(2).with_expected_len(3));
        assert_eq!(Smoother::<f64>::output_len(&smoother, 4), 3);
        assert_eq!(Smoother::<f64>::min_periods(&smoother), 2);

        let result = Smoother::<f64>::smooth(&smoother, &[1.0, 3.0, 5.0, 7.0]).unwrap();
        assert_eq!(result, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_sma_non_finite_value_stays_local() {
        let result = sma(&[f64::NAN, 1.0, 2.0, 3.0, 4.0], 2, None).unwrap();
        assert!(result[0].is_nan());
        assert_eq!(&result[1..], &[1.5, 2.5, 3.5]);

        let result = sma(&[f64::INFINITY, 1.0, 2.0, 3.0, 4.0], 2, None).unwrap();
        assert!(result[0].is_infinite());
        assert_eq!(&result[1..], &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_sma_large_value_does_not_leak() {
        let result = sma(&[1e16, 1.0, 1.0, 1.0, 1.0], 2, None).unwrap();
        assert_relative_eq!(result[0], 5e15);
        assert_eq!(&result[1..], &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_sma_f32() {
        let data = [1.0f32, 2.0, 3.0, 4.0];
        let result = sma(&data, 2, None).unwrap();
        assert_relative_eq!(result[2], 3.5f32);
    }
}
