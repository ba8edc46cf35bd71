//! # stat4trading
//!
//! Smoothing, crossing detection and segment geometry for trading-signal
//! pre-processing.
//!
//! This crate re-exports the workspace members:
//!
//! - [`s4t_core`]: errors, numeric traits, geometry and sequence utilities
//! - [`s4t_smoothing`]: moving averages and local filters
//! - [`s4t_pipeline`]: smoother chaining and crossing signals
//!
//! # Example
//!
//! ```
//! use stat4trading::prelude::*;
//!
//! let closes = [10.0_f64, 10.5, 11.0, 10.8, 11.6, 12.1, 11.9, 12.4];
//!
//! let fast = sma(&closes, 2, Some(output_len_after_ma(closes.len(), 2))).unwrap();
//! let slow = sma(&closes, 4, Some(output_len_after_ma(closes.len(), 4))).unwrap();
//!
//! let signals = cross_signals(&slow, &fast).unwrap();
//! assert_eq!(signals.len(), slow.len());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub use s4t_core;
pub use s4t_pipeline;
pub use s4t_smoothing;

/// Everything commonly needed, from every member crate.
pub mod prelude {
    pub use s4t_core::prelude::*;
    pub use s4t_pipeline::prelude::*;
    pub use s4t_smoothing::prelude::*;
}
