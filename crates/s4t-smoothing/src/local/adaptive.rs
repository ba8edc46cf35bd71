//! Adaptive local smoothing.
//!
//! Picks the widest kernel the input supports and never fails.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use s4t_core::{error::Result, num::StatFloat, traits::Smoother};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{smooth_five_point, smooth_three_point, FIVE_POINT_MIN_LEN, THREE_POINT_MIN_LEN};

/// Configuration for adaptive smoothing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AdaptiveConfig {
    /// Number of sequential passes (default: 1).
    pub passes: usize,
    /// Keep the last point at its original value instead of re-estimating it.
    pub keep_last_value_original: bool,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            passes: 1,
            keep_last_value_original: false,
        }
    }
}

impl AdaptiveConfig {
    /// Create a configuration running `passes` passes.
    pub fn new(passes: usize) -> Self {
        Self {
            passes,
            ..Self::default()
        }
    }

    /// Set whether the last point keeps its original value.
    pub fn with_keep_last_value_original(mut self, keep: bool) -> Self {
        self.keep_last_value_original = keep;
        self
    }
}

/// Smooth with the 5-point filter when there are at least 5 points, the
/// 3-point filter when there are at least 3, and otherwise return the input
/// unchanged.
///
/// # Example
///
/// ```rust
/// use s4t_smoothing::local::smooth_adaptive;
///
/// let short = [1.0_f64, 9.0];
/// assert_eq!(smooth_adaptive(&short, 4, false), short.to_vec());
/// ```
#[must_use]
pub fn smooth_adaptive<T: StatFloat>(
    data: &[T],
    passes: usize,
    keep_last_value_original: bool,
) -> Vec<T> {
    let attempt = if data.len() >= FIVE_POINT_MIN_LEN {
        smooth_five_point(data, passes, keep_last_value_original)
    } else if data.len() >= THREE_POINT_MIN_LEN {
        smooth_three_point(data, passes, keep_last_value_original)
    } else {
        tracing::debug!(len = data.len(), "too few points to smooth, returning input");
        return data.to_vec();
    };

    // Both filters only fail on short input, which the length checks above exclude.
    attempt.unwrap_or_else(|_| data.to_vec())
}

/// Adaptive smoother.
#[derive(Debug, Clone, Default)]
pub struct Adaptive {
    config: AdaptiveConfig,
}

impl<T: StatFloat> Smoother<T> for Adaptive {
    type Config = AdaptiveConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn name(&self) -> &'static str {
        "adaptive"
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        0
    }

    fn output_len(&self, input_len: usize) -> usize {
        input_len
    }

    fn smooth(&self, data: &[T]) -> Result<Vec<T>> {
        Ok(smooth_adaptive(
            data,
            self.config.passes,
            self.config.keep_last_value_original,
        ))
    }
}
