//! Three-point linear smoothing.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use s4t_core::{error::Result, num::StatFloat, traits::Smoother};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constant, run_passes};

/// Fewest points the 3-point filter accepts.
pub const THREE_POINT_MIN_LEN: usize = 3;

/// Configuration for the 3-point filter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThreePointConfig {
    /// Number of sequential passes (default: 1).
    pub passes: usize,
    /// Keep the last point at its original value instead of re-estimating it.
    pub keep_last_value_original: bool,
}

impl Default for ThreePointConfig {
    fn default() -> Self {
        Self {
            passes: 1,
            keep_last_value_original: false,
        }
    }
}

impl ThreePointConfig {
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

/// Smooth with the 3-point filter, `passes` times.
///
/// Interior points become `(x[i-1] + x[i] + x[i+1]) / 3`. The first point is
/// `(5x0 + 2x1 - x2) / 6`; the last is `(-x[n-3] + 2x[n-2] + 5x[n-1]) / 6`
/// unless `keep_last_value_original` is set, in which case it is never
/// touched. Zero passes return the input unchanged.
///
/// # Errors
///
/// Returns [`StatError::InsufficientPoints`](s4t_core::StatError::InsufficientPoints)
/// if `passes > 0` and the input has fewer than 3 points.
///
/// # Example
///
/// ```rust
/// use s4t_smoothing::local::smooth_three_point;
///
/// let result = smooth_three_point(&[0.0_f64, 3.0, 0.0, 3.0], 1, true).unwrap();
/// assert_eq!(result[1], 1.0);
/// assert_eq!(result[3], 3.0);
/// ```
pub fn smooth_three_point<T: StatFloat>(
    data: &[T],
    passes: usize,
    keep_last_value_original: bool,
) -> Result<Vec<T>> {
    run_passes(data, passes, THREE_POINT_MIN_LEN, |x| {
        three_point_pass(x, keep_last_value_original)
    })
}

fn three_point_pass<T: StatFloat>(x: &[T], keep_last: bool) -> Vec<T> {
    let n = x.len();
    let two = constant::<T>(2);
    let three = constant::<T>(3);
    let five = constant::<T>(5);
    let six = constant::<T>(6);

    let mut out = Vec::with_capacity(n);
    out.push((five * x[0] + two * x[1] - x[2]) / six);

    for i in 1..n - 1 {
        out.push((x[i - 1] + x[i] + x[i + 1]) / three);
    }

    if keep_last {
        out.push(x[n - 1]);
    } else {
        out.push((-x[n - 3] + two * x[n - 2] + five * x[n - 1]) / six);
    }

    out
}

/// 3-point smoother.
#[derive(Debug, Clone, Default)]
pub struct ThreePoint {
    config: ThreePointConfig,
}

impl<T: StatFloat> Smoother<T> for ThreePoint {
    type Config = ThreePointConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn name(&self) -> &'static str {
        "three_point"
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        if self.config.passes == 0 {
            0
        } else {
            THREE_POINT_MIN_LEN
        }
    }

    fn output_len(&self, input_len: usize) -> usize {
        if input_len < Smoother::<T>::min_periods(self) {
            0
        } else {
            input_len
        }
    }

    fn smooth(&self, data: &[T]) -> Result<Vec<T>> {
        smooth_three_point(
            data,
            self.config.passes,
            self.config.keep_last_value_original,
        )
    }
}
