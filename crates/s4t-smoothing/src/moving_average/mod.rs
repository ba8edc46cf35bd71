//! Moving averages.
//!
//! This module contains the window-based smoothers:
//! - SMA (Simple Moving Average)
//! - WMA (Weighted Moving Average)
//! - EMA (Exponential Moving Average)
//!
//! All three share one output shape: an input of `n` points smoothed with a
//! window of `w` yields exactly `n - w + 1` points, the first aligned with
//! input index `w - 1`. None of them pads with NaN.
//!
//! Each function takes an optional `expected` length. When given and
//! non-zero, it is compared with the computed output length and a mismatch
//! fails the call with [`StatError::LengthMismatch`]. `None` and `Some(0)`
//! both skip the check; no valid call produces an empty output. Callers chaining several smoothers use
//! [`output_len_after_ma`] to work the shapes out up front and pass them in.

mod ema;
mod sma;
mod wma;

pub use ema::{ema, Ema, EmaConfig};
pub use sma::{sma, Sma, SmaConfig};
pub use wma::{wma, Wma, WmaConfig};

use s4t_core::error::{Result, StatError};

/// Output length of any moving average: `len - window + 1`, or 0 when the
/// window does not fit.
///
/// # Example
///
/// ```rust
/// use s4t_smoothing::moving_average::output_len_after_ma;
///
/// assert_eq!(output_len_after_ma(10, 3), 8);
/// assert_eq!(output_len_after_ma(2, 3), 0);
/// ```
#[must_use]
pub const fn output_len_after_ma(len: usize, window: usize) -> usize {
    (len + 1).saturating_sub(window)
}

/// Validate a moving-average call and return its output length.
pub(crate) fn checked_output_len(
    len: usize,
    window: usize,
    expected: Option<usize>,
) -> Result<usize> {
    if window == 0 {
        return Err(StatError::InvalidWindow(0));
    }

    let output_len = output_len_after_ma(len, window);
    if output_len == 0 {
        return Err(StatError::InsufficientData {
            window,
            actual: len,
        });
    }

    match expected {
        Some(expected) if expected != 0 && expected != output_len => Err(StatError::LengthMismatch {
            expected,
            actual: output_len,
        }),
        _ => Ok(output_len),
    }
}
