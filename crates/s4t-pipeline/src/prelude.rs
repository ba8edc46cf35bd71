//! Prelude module for convenient imports.
//!
//! This module re-exports the pipeline types and signal helpers.

pub use crate::pipeline::{ErasedSmoother, PipelineConfig, SmoothingPipeline, StageSpec};
pub use crate::signal::{
    align_tails, cross_events, cross_signals, pipeline_crossings, spread, CrossEvent,
};
