//! Exponential Moving Average (EMA).
//!
//! The recurrence is seeded with the first input value rather than an SMA,
//! and the first `window - 1` values are dropped so the output lines up with
//! SMA and WMA of the same window.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use s4t_core::{error::Result, num::StatFloat, traits::Smoother};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{checked_output_len, output_len_after_ma};

/// Configuration for the EMA smoother.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmaConfig {
    /// The window size used to derive alpha.
    pub window: usize,
    /// Output length the caller expects.
    pub expected_len: Option<usize>,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self {
            window: 14,
            expected_len: None,
        }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration with the given window.
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

/// Smoothing factor `2 / (window + 1)`.
#[must_use]
pub fn alpha<T: StatFloat>(window: usize) -> T {
    T::TWO / <T as StatFloat>::from_usize(window + 1)
}

/// Compute the Exponential Moving Average.
///
/// `ema[0] = data[0]`, `ema[t] = alpha * data[t] + (1 - alpha) * ema[t-1]`,
/// and the first `window - 1` values of the recurrence are discarded.
///
/// # Errors
///
/// Same conditions as [`sma`](super::sma).
///
/// # Panics
///
/// Panics if the trimmed recurrence does not have `data.len() - window + 1`
/// points. That would be a defect in this function, not a bad input.
///
/// # Example
///
/// ```rust
/// use s4t_smoothing::moving_average::ema;
///
/// // alpha = 0.5 for window 3
/// let result = ema(&[2.0_f64, 4.0, 8.0, 8.0], 3, Some(2)).unwrap();
/// assert_eq!(result, vec![5.5, 6.75]);
/// ```
pub fn ema<T: StatFloat>(data: &[T], window: usize, expected: Option<usize>) -> Result<Vec<T>> {
    let output_len = checked_output_len(data.len(), window, expected)?;
    let alpha = alpha::<T>(window);
    let one_minus_alpha = T::ONE - alpha;

    let mut result = Vec::with_capacity(output_len);

    let mut ema_value = data[0];
    if window == 1 {
        result.push(ema_value);
    }

    for (t, &value) in data.iter().enumerate().skip(1) {
        ema_value = alpha * value + one_minus_alpha * ema_value;
        if t + 1 >= window {
            result.push(ema_value);
        }
    }

    assert_tail_len(result.len(), output_len);
    Ok(result)
}

fn assert_tail_len(actual: usize, expected: usize) {
    assert_eq!(
        actual, expected,
        "EMA tail has {actual} points after dropping warm-up, expected {expected}"
    );
}

/// Exponential Moving Average smoother.
///
/// # Formula
///
/// alpha = 2 / (window + 1)
/// EMA_t = alpha * Price_t + (1 - alpha) * EMA_{t-1}
#[derive(Debug, Clone, Default)]
pub struct Ema {
    config: EmaConfig,
}

impl Ema {
    /// Window width.
    pub fn window(&self) -> usize {
        self.config.window
    }

    /// Returns the smoothing factor (alpha).
    pub fn alpha<T: StatFloat>(&self) -> T {
        alpha(self.config.window)
    }
}

impl<T: StatFloat> Smoother<T> for Ema {
    type Config = EmaConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn name(&self) -> &'static str {
        "ema"
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
        ema(data, self.config.window, self.config.expected_len)
    }
}
