//! # s4t-pipeline
//!
//! Smoother composition for the stat4trading library.
//!
//! This crate provides:
//!
//! - `SmoothingPipeline`: chain smoothers, with each stage's output length
//!   predicted up front and checked as it runs
//! - `PipelineConfig` / `StageSpec`: a declarative, optionally serializable
//!   pipeline description
//! - `signal`: tail alignment, spreads and crossing detection between
//!   smoothed series
//!
//! # Example
//!
//! ```
//! use s4t_core::{CrossDirection, Smoother};
//! use s4t_pipeline::prelude::*;
//! use s4t_smoothing::prelude::*;
//!
//! let closes = [2.0_f64, 2.0, 2.0, 1.0, 4.0, 4.0, 0.0, 0.0, 0.0];
//!
//! let slow = SmoothingPipeline::<f64>::new().add(<Sma as Smoother<f64>>::new(SmaConfig::new(4)));
//! let fast = SmoothingPipeline::<f64>::new().add(<Sma as Smoother<f64>>::new(SmaConfig::new(2)));
//!
//! let signals = pipeline_crossings(&closes, &slow, &fast).unwrap();
//! assert_eq!(signals[1], CrossDirection::BottomToTop);
//! assert_eq!(signals[3], CrossDirection::TopToBottom);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod pipeline;
pub mod signal;

pub mod prelude;

pub use pipeline::{ErasedSmoother, PipelineConfig, SmoothingPipeline, StageSpec};
pub use signal::{align_tails, cross_events, cross_signals, pipeline_crossings, spread, CrossEvent};
