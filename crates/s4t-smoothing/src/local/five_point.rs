//! Five-point linear smoothing.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use s4t_core::{error::Result, num::StatFloat, traits::Smoother};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constant, run_passes};

/// Fewest points the 5-point filter accepts.
pub const FIVE_POINT_MIN_LEN: usize = 5;

/// Configuration for the 5-point filter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FivePointConfig {
    /// Number of sequential passes (default: 1).
    pub passes: usize,
    /// Keep the last point at its original value instead of re-estimating it.
    pub keep_last_value_original: bool,
}

impl Default for FivePointConfig {
    fn default() -> Self {
        Self {
            passes: 1,
            keep_last_value_original: false,
        }
    }
}

impl FivePointConfig {
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

/// Smooth with the 5-point filter, `passes` times.
///
/// # Formula
///
/// ```text
/// y[0]   = (3x0 + 2x1 + x2 - x4) / 5
/// y[1]   = (4x0 + 3x1 + 2x2 + x3) / 10
/// y[i]   = (x[i-2] + x[i-1] + x[i] + x[i+1] + x[i+2]) / 5
/// y[n-2] = (x[n-4] + 2x[n-3] + 3x[n-2] + 4x[n-1]) / 10
/// y[n-1] = (-x[n-5] + x[n-3] + 2x[n-2] + 3x[n-1]) / 5
/// ```
///
/// With `keep_last_value_original` the last point is left as it was.
/// Zero passes return the input unchanged.
///
/// # Errors
///
/// Returns [`StatError::InsufficientPoints`](s4t_core::StatError::InsufficientPoints)
/// if `passes > 0` and the input has fewer than 5 points.
pub fn smooth_five_point<T: StatFloat>(
    data: &[T],
    passes: usize,
    keep_last_value_original: bool,
) -> Result<Vec<T>> {
    run_passes(data, passes, FIVE_POINT_MIN_LEN, |x| {
        five_point_pass(x, keep_last_value_original)
    })
}

fn five_point_pass<T: StatFloat>(x: &[T], keep_last: bool) -> Vec<T> {
    let n = x.len();
    let two = constant::<T>(2);
    let three = constant::<T>(3);
    let four = constant::<T>(4);
    let five = constant::<T>(5);
    let ten = constant::<T>(10);

    let mut out = Vec::with_capacity(n);
    out.push((three * x[0] + two * x[1] + x[2] - x[4]) / five);
    out.push((four * x[0] + three * x[1] + two * x[2] + x[3]) / ten);

    for i in 2..n - 2 {
        out.push((x[i - 2] + x[i - 1] + x[i] + x[i + 1] + x[i + 2]) / five);
    }

    out.push((x[n - 4] + two * x[n - 3] + three * x[n - 2] + four * x[n - 1]) / ten);

    if keep_last {
        out.push(x[n - 1]);
    } else {
        out.push((-x[n - 5] + x[n - 3] + two * x[n - 2] + three * x[n - 1]) / five);
    }

    out
}

/// 5-point smoother.
#[derive(Debug, Clone, Default)]
pub struct FivePoint {
    config: FivePointConfig,
}

impl<T: StatFloat> Smoother<T> for FivePoint {
    type Config = FivePointConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn name(&self) -> &'static str {
        "five_point"
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        if self.config.passes == 0 {
            0
        } else {
            FIVE_POINT_MIN_LEN
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
        smooth_five_point(
            data,
            self.config.passes,
            self.config.keep_last_value_original,
        )
    }
}
