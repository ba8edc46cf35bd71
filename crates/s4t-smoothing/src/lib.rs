//! # s4t-smoothing
//!
//! Sequence smoothers for the stat4trading library.
//!
//! This crate provides two families of smoothers:
//!
//! - **Moving averages**: SMA, WMA, EMA. Output is `n - w + 1` points long.
//! - **Local filters**: 3-point, 5-point and adaptive. Output keeps the
//!   input length.
//!
//! Every smoother exists both as a free function and as a struct
//! implementing [`s4t_core::Smoother`], so it can be configured once and
//! chained in a pipeline.
//!
//! # Example
//!
//! ```
//! use s4t_smoothing::prelude::*;
//! use s4t_core::prelude::*;
//!
//! let closes = [100.0_f64, 101.5, 99.8, 102.3, 101.0, 103.2];
//!
//! // Work out the shape first, then have the smoother verify it.
//! let expected = output_len_after_ma(closes.len(), 3);
//! let smoothed = sma(&closes, 3, Some(expected)).unwrap();
//! assert_eq!(smoothed.len(), 4);
//!
//! let filtered = smooth_adaptive(&smoothed, 2, true);
//! assert_eq!(filtered.len(), 4);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod local;
pub mod moving_average;

pub mod prelude;

pub use prelude::*;
