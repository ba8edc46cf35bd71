//! Local smoothing filters.
//!
//! Unlike the moving averages these keep the input length: every point is
//! replaced by a local mean, and the points too close to an edge for a
//! centred kernel use least-squares linear end formulas instead.
//!
//! - 3-point filter (kernel `i-1..=i+1`)
//! - 5-point filter (kernel `i-2..=i+2`)
//! - Adaptive filter picking the widest kernel the input allows

mod adaptive;
mod five_point;
mod three_point;

pub use adaptive::{smooth_adaptive, Adaptive, AdaptiveConfig};
pub use five_point::{smooth_five_point, FivePoint, FivePointConfig, FIVE_POINT_MIN_LEN};
pub use three_point::{smooth_three_point, ThreePoint, ThreePointConfig, THREE_POINT_MIN_LEN};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use s4t_core::{
    error::{Result, StatError},
    num::StatFloat,
};

/// Run `passes` applications of `pass`, each consuming the previous output.
///
/// Zero passes return a copy of the input without checking its length.
pub(crate) fn run_passes<T, F>(
    data: &[T],
    passes: usize,
    min_len: usize,
    pass: F,
) -> Result<Vec<T>>
where
    T: StatFloat,
    F: Fn(&[T]) -> Vec<T>,
{
    if passes == 0 {
        tracing::debug!(len = data.len(), "zero smoothing passes requested, returning input");
        return Ok(data.to_vec());
    }

    if data.len() < min_len {
        return Err(StatError::InsufficientPoints {
            required: min_len,
            actual: data.len(),
        });
    }

    let mut current = pass(data);
    for _ in 1..passes {
        current = pass(&current);
    }

    Ok(current)
}

#[inline]
pub(crate) fn constant<T: StatFloat>(value: usize) -> T {
    <T as StatFloat>::from_usize(value)
}
