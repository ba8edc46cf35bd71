//! Weighted Moving Average (WMA).
//!
//! WMA assigns more weight to recent prices using linear weights.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use s4t_core::{error::Result, num::StatFloat, traits::Smoother};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{checked_output_len, output_len_after_ma};

/// Configuration for WMA.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WmaConfig {
    /// Window size (default: 14).
    pub window: usize,
    /// Output length the caller expects.
    pub expected_len: Option<usize>,
}

impl Default for WmaConfig {
    fn default() -> Self {
        Self {
            window: 14,
            expected_len: None,
        }
    }
}

impl WmaConfig {
    /// Create a new configuration.
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

/// Sum of the linear weights `1 + 2 + ... + window`.
#[must_use]
pub(crate) const fn weight_sum(window: usize) -> usize {
    window * (window + 1) / 2
}

/// Compute the Weighted Moving Average.
///
/// Within each window the oldest point gets weight 1 and the newest gets
/// weight `window`.
///
/// # Errors
///
/// Same conditions as [`sma`](super::sma).
///
/// # Example
///
/// ```rust
/// use s4t_smoothing::moving_average::wma;
///
/// let result = wma(&[1.0_f64, 2.0, 3.0, 4.0], 2, None).unwrap();
/// // (1*1 + 2*2) / 3, (1*2 + 2*3) / 3, (1*3 + 2*4) / 3
/// assert_eq!(result.len(), 3);
/// assert!((result[0] - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn wma<T: StatFloat>(data: &[T], window: usize, expected: Option<usize>) -> Result<Vec<T>> {
    let output_len = checked_output_len(data.len(), window, expected)?;
    let weight_sum = <T as StatFloat>::from_usize(weight_sum(window));

    let mut result = Vec::with_capacity(output_len);

    for start in 0..output_len {
        let weighted_sum = data[start..start + window]
            .iter()
            .enumerate()
            .fold(T::ZERO, |acc, (j, &x)| {
                acc + <T as StatFloat>::from_usize(j + 1) * x
            });
        result.push(weighted_sum / weight_sum);
    }

    Ok(result)
}

/// Weighted Moving Average smoother.
///
/// # Formula
///
/// WMA = (n*P_n + (n-1)*P_{n-1} + ... + 1*P_1) / (n + (n-1) + ... + 1)
///     = Sum(i * P_i) / (n * (n+1) / 2)
#[derive(Debug, Clone, Default)]
pub struct Wma {
    config: WmaConfig,
}

impl Wma {
    /// Window width.
    pub fn window(&self) -> usize {
        self.config.window
    }
}

impl<T: StatFloat> Smoother<T> for Wma {
    type Config = WmaConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn name(&self) -> &'static str {
        "wma"
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
        wma(data, self.config.window, self.config.expected_len)
    }
}
