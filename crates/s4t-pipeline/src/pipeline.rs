//! Smoothing Pipeline.
//!
//! Chains smoothers so that each consumes the previous one's output, and
//! checks every stage against the shape worked out before the run.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};

use s4t_core::{
    error::{PipelineError, PipelineResult, Result, StatError},
    num::StatFloat,
    traits::Smoother,
};
use s4t_smoothing::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declarative description of one pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StageSpec {
    /// Simple moving average.
    Sma(SmaConfig),
    /// Weighted moving average.
    Wma(WmaConfig),
    /// Exponential moving average.
    Ema(EmaConfig),
    /// 3-point local filter.
    ThreePoint(ThreePointConfig),
    /// 5-point local filter.
    FivePoint(FivePointConfig),
    /// Adaptive local filter.
    Adaptive(AdaptiveConfig),
}

/// Configuration for SmoothingPipeline.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineConfig {
    /// Stages in application order.
    pub stages: Vec<StageSpec>,
    /// Cross-check every stage's output length against the precomputed one.
    pub verify_stage_lengths: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stages: Vec::new(),
            verify_stage_lengths: true,
        }
    }
}

impl PipelineConfig {
    /// Create a new pipeline configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    pub fn with_stage(mut self, stage: StageSpec) -> Self {
        self.stages.push(stage);
        self
    }

    /// Set whether stage lengths are cross-checked.
    pub fn with_verify_stage_lengths(mut self, verify: bool) -> Self {
        self.verify_stage_lengths = verify;
        self
    }
}

/// Type-erased smoother for use in pipelines.
///
/// This trait allows storing smoothers with different Config types
/// in the same collection by erasing the Config associated type.
pub trait ErasedSmoother<T: StatFloat>: Send + Sync {
    /// Short stable label.
    fn name(&self) -> &'static str;

    /// Length of the output produced from `input_len` points.
    fn output_len(&self, input_len: usize) -> usize;

    /// Smooth the input sequence.
    fn smooth(&self, data: &[T]) -> Result<Vec<T>>;
}

/// Blanket implementation of ErasedSmoother for any Smoother.
impl<T: StatFloat, S: Smoother<T>> ErasedSmoother<T> for S {
    fn name(&self) -> &'static str {
        <S as Smoother<T>>::name(self)
    }

    fn output_len(&self, input_len: usize) -> usize {
        <S as Smoother<T>>::output_len(self, input_len)
    }

    fn smooth(&self, data: &[T]) -> Result<Vec<T>> {
        <S as Smoother<T>>::smooth(self, data)
    }
}

impl StageSpec {
    fn build<T: StatFloat>(&self) -> Box<dyn ErasedSmoother<T>> {
        match self {
            Self::Sma(config) => Box::new(<Sma as Smoother<T>>::new(config.clone())),
            Self::Wma(config) => Box::new(<Wma as Smoother<T>>::new(config.clone())),
            Self::Ema(config) => Box::new(<Ema as Smoother<T>>::new(config.clone())),
            Self::ThreePoint(config) => Box::new(<ThreePoint as Smoother<T>>::new(config.clone())),
            Self::FivePoint(config) => Box::new(<FivePoint as Smoother<T>>::new(config.clone())),
            Self::Adaptive(config) => Box::new(<Adaptive as Smoother<T>>::new(config.clone())),
        }
    }
}

/// Smoothing Pipeline.
///
/// Chains multiple smoothers together. Before running, the pipeline folds
/// every stage's `output_len` over the input length; during the run each
/// stage's actual output must match that prediction.
///
/// # Example
///
/// ```
/// use s4t_core::Smoother;
/// use s4t_pipeline::SmoothingPipeline;
/// use s4t_smoothing::prelude::*;
///
/// let pipeline = SmoothingPipeline::<f64>::new()
///     .add(<Sma as Smoother<f64>>::new(SmaConfig::new(3)))
///     .add(<Adaptive as Smoother<f64>>::new(AdaptiveConfig::new(2)));
///
/// let data = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
/// assert_eq!(pipeline.expected_output_len(data.len()), 5);
///
/// let smoothed = pipeline.run(&data).unwrap();
/// assert_eq!(smoothed.len(), 5);
/// ```
pub struct SmoothingPipeline<T: StatFloat> {
    stages: Vec<Box<dyn ErasedSmoother<T>>>,
    names: Vec<String>,
    verify_stage_lengths: bool,
}

impl<T: StatFloat> core::fmt::Debug for SmoothingPipeline<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SmoothingPipeline")
            .field("num_stages", &self.stages.len())
            .field("names", &self.names)
            .field("verify_stage_lengths", &self.verify_stage_lengths)
            .finish()
    }
}

impl<T: StatFloat> Default for SmoothingPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StatFloat> SmoothingPipeline<T> {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            names: Vec::new(),
            verify_stage_lengths: true,
        }
    }

    /// Build a pipeline from a declarative configuration.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut pipeline = Self::new();
        pipeline.verify_stage_lengths = config.verify_stage_lengths;
        for spec in &config.stages {
            let stage = spec.build::<T>();
            pipeline.names.push(String::from(stage.name()));
            pipeline.stages.push(stage);
        }
        pipeline
    }

    /// Add a smoother, labelled with its own name.
    pub fn add<S>(self, smoother: S) -> Self
    where
        S: Smoother<T> + 'static,
    {
        let name = String::from(<S as Smoother<T>>::name(&smoother));
        self.add_named(name, smoother)
    }

    /// Add a smoother with a custom label.
    pub fn add_named<S>(mut self, name: impl Into<String>, smoother: S) -> Self
    where
        S: Smoother<T> + 'static,
    {
        self.names.push(name.into());
        self.stages.push(Box::new(smoother));
        self
    }

    /// Turn per-stage length verification on or off.
    pub fn with_verify_stage_lengths(mut self, verify: bool) -> Self {
        self.verify_stage_lengths = verify;
        self
    }

    /// Get the number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Get stage names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Length of the final output for an input of `input_len` points.
    ///
    /// Returns 0 if some stage cannot produce output at that length.
    pub fn expected_output_len(&self, input_len: usize) -> usize {
        self.stages
            .iter()
            .fold(input_len, |len, stage| stage.output_len(len))
    }

    /// Run every stage in order.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::EmptyPipeline`] if there are no stages
    /// - [`PipelineError::StageFailed`] if a stage fails, or (with
    ///   verification on) returns a length other than predicted
    pub fn run(&self, data: &[T]) -> PipelineResult<Vec<T>> {
        if self.stages.is_empty() {
            return Err(PipelineError::EmptyPipeline);
        }

        let mut current = data.to_vec();
        let mut predicted = data.len();

        for (index, (stage, name)) in self.stages.iter().zip(&self.names).enumerate() {
            predicted = stage.output_len(predicted);

            let output = stage
                .smooth(&current)
                .map_err(|err| PipelineError::stage(index, name.as_str(), err))?;

            if self.verify_stage_lengths && output.len() != predicted {
                return Err(PipelineError::stage(
                    index,
                    name.as_str(),
                    StatError::LengthMismatch {
                        expected: predicted,
                        actual: output.len(),
                    },
                ));
            }

            tracing::debug!(
                stage = index,
                name = name.as_str(),
                input_len = current.len(),
                output_len = output.len(),
                "pipeline stage complete"
            );
            current = output;
        }

        Ok(current)
    }

    /// Run the pipeline and check the final length against the caller's own
    /// precomputed value.
    ///
    /// # Errors
    ///
    /// Everything [`SmoothingPipeline::run`] returns, plus
    /// [`PipelineError::Compute`] wrapping [`StatError::LengthMismatch`] when
    /// the final length differs from `expected`.
    pub fn run_expecting(&self, data: &[T], expected: usize) -> PipelineResult<Vec<T>> {
        let output = self.run(data)?;
        if output.len() != expected {
            return Err(StatError::LengthMismatch {
                expected,
                actual: output.len(),
            }
            .into());
        }
        Ok(output)
    }
}
