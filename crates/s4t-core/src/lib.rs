//! # s4t-core
//!
//! Core types, traits and stateless routines for the stat4trading library.
//!
//! This crate provides the foundational pieces used throughout the workspace:
//!
//! - [`StatFloat`] - Trait for floating-point types (f32/f64)
//! - [`OrderedNum`] - Trait for any ordered numeric kind (integers and floats)
//! - [`StatError`] and [`PipelineError`] - Recoverable error types
//! - [`Smoother`] - Common interface of every sequence smoother
//! - [`geometry`] - Points, segments and line intersection
//! - [`utils`] - Min/max search, subtraction and crossing detection
//!
//! ## Feature Flags
//!
//! - `std` (default) - Enable standard library support
//! - `serde` - Enable serialization/deserialization of configs and geometry
//!
//! ## Example
//!
//! ```rust
//! use s4t_core::prelude::*;
//!
//! let prices = [3.0_f64, 1.0, 4.0, 1.0, 5.0];
//! let top = find_max(&prices).unwrap();
//! assert_eq!(top.value, 5.0);
//! assert_eq!(top.index, 4);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod geometry;
pub mod num;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export core types at crate root
pub use error::{PipelineError, PipelineResult, Result, StatError};
pub use geometry::{LineParams, Point, Segment};
pub use num::{OrderedNum, StatFloat};
pub use traits::{Smoother, SmootherConfig};
pub use utils::{CrossDirection, Extremum};
