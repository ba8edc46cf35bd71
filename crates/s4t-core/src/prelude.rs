//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions from s4t-core.
//!
//! # Example
//!
//! ```rust
//! use s4t_core::prelude::*;
//!
//! let diff = subtract(&[3.0_f64, 2.0], &[1.0, 1.0]).unwrap();
//! assert_eq!(diff, vec![2.0, 1.0]);
//! ```

// Core types
pub use crate::geometry::{LineParams, Point, Segment};
pub use crate::num::{OrderedNum, StatFloat};
pub use crate::utils::{CrossDirection, Extremum};

// Error types
pub use crate::error::{PipelineError, PipelineResult, Result, StatError};

// Traits
pub use crate::traits::{Smoother, SmootherConfig};

// Functions
pub use crate::geometry::{line_from_points, segment_intersection};
pub use crate::utils::{crossing_directions, find_max, find_min, subtract};
