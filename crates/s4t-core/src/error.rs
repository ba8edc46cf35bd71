//! Error types for stat4trading operations.
//!
//! This module provides structured error types for smoothing, geometry and
//! pipeline operations, with error chaining support via `thiserror`.
//!
//! Only recoverable conditions caused by caller input live here. Internal
//! self-consistency faults (a trimmed EMA tail of the wrong length, two line
//! equations disagreeing at their intersection) are implementation defects
//! and panic instead.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String};

use thiserror::Error;

/// Result type alias for computations that may fail.
pub type Result<T> = core::result::Result<T, StatError>;

/// Result type alias for pipeline operations that may fail.
pub type PipelineResult<T> = core::result::Result<T, PipelineError>;

/// Errors that can occur during a single computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    /// Not enough data to fit the requested moving-average window.
    #[error("Insufficient data: window {window} needs at least {window} points, got {actual}")]
    InsufficientData {
        /// Requested window width.
        window: usize,
        /// Actual number of data points provided.
        actual: usize,
    },

    /// Not enough points for a local smoothing kernel.
    #[error("Insufficient points: need {required} points, got {actual}")]
    InsufficientPoints {
        /// Required number of points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// Invalid window size parameter.
    #[error("Invalid window size: {0} (must be > 0)")]
    InvalidWindow(usize),

    /// Two lengths that must agree do not.
    ///
    /// Raised both for paired sequences of different length and for a
    /// caller-supplied expected output length that does not match.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Reduction over zero elements.
    #[error("Empty input: at least one value is required")]
    EmptyInput,

    /// A segment's X-span is zero, negative or too small for slope-intercept form.
    #[error("Degenerate segment: x-span {dx} must be greater than {tolerance}")]
    DegenerateSegment {
        /// Observed `b.x - a.x`.
        dx: f64,
        /// Minimum accepted span.
        tolerance: f64,
    },

    /// Two points with the same X cannot determine a unique line.
    #[error("Ambiguous line: both points lie at x = {x}")]
    AmbiguousLine {
        /// Shared X coordinate.
        x: f64,
    },
}

/// Errors that can occur while running a smoothing pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// The pipeline has no stages.
    #[error("Pipeline has no stages")]
    EmptyPipeline,

    /// A stage failed; `stage` is its position and `name` its label.
    #[error("Stage {stage} ('{name}') failed: {source}")]
    StageFailed {
        /// Zero-based stage index.
        stage: usize,
        /// Stage label.
        name: String,
        /// Underlying failure.
        source: Box<StatError>,
    },

    /// Computation outside any stage failed.
    #[error("Computation failed")]
    Compute(#[from] StatError),
}

impl PipelineError {
    /// Wrap a stage failure with its position and label.
    #[must_use]
    pub fn stage(stage: usize, name: impl Into<String>, source: StatError) -> Self {
        Self::StageFailed {
            stage,
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// The underlying computation error, if any.
    #[must_use]
    pub fn stat_error(&self) -> Option<&StatError> {
        match self {
            Self::EmptyPipeline => None,
            Self::StageFailed { source, .. } => Some(source),
            Self::Compute(err) => Some(err),
        }
    }
}
