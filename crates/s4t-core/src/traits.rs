//! Core trait definitions for sequence smoothers.
//!
//! Every smoother in the workspace (moving averages and local filters)
//! implements [`Smoother`], which is what lets pipelines chain them and
//! pre-compute the shape of their output.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::num::StatFloat;

/// Configuration trait bounds for smoother configurations.
#[cfg(feature = "serde")]
pub trait SmootherConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

/// Configuration trait bounds for smoother configurations.
#[cfg(not(feature = "serde"))]
pub trait SmootherConfig: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> SmootherConfig for T where T: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

#[cfg(not(feature = "serde"))]
impl<T> SmootherConfig for T where T: Clone + Default + Send + Sync {}

/// Core trait for sequence smoothers.
///
/// A smoother is a pure function of its configuration and its input: it
/// never mutates the input and always returns a freshly allocated sequence.
///
/// # Output Shape
///
/// [`Smoother::output_len`] must agree with the length of every successful
/// [`Smoother::smooth`] result for the same input length. Pipelines rely on
/// this to cross-check each stage.
///
/// # Example Implementation
///
/// ```rust
/// use s4t_core::{Result, Smoother, StatFloat};
///
/// #[derive(Debug, Clone, Default)]
/// struct Negate;
///
/// impl<T: StatFloat> Smoother<T> for Negate {
///     type Config = ();
///
///     fn new(_config: ()) -> Self { Negate }
///     fn name(&self) -> &'static str { "negate" }
///     fn config(&self) -> &() { &() }
///     fn min_periods(&self) -> usize { 0 }
///     fn output_len(&self, input_len: usize) -> usize { input_len }
///     fn smooth(&self, data: &[T]) -> Result<Vec<T>> {
///         Ok(data.iter().map(|&x| -x).collect())
///     }
/// }
///
/// let out = Smoother::<f64>::smooth(&Negate, &[1.0, -2.0]).unwrap();
/// assert_eq!(out, vec![-1.0, 2.0]);
/// ```
pub trait Smoother<T: StatFloat>: Send + Sync {
    /// Configuration type for this smoother.
    type Config: SmootherConfig;

    /// Create a new smoother with the given configuration.
    fn new(config: Self::Config) -> Self
    where
        Self: Sized;

    /// Short stable label, used in logs and pipeline stage names.
    fn name(&self) -> &'static str;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;

    /// Minimum input length for which [`Smoother::smooth`] can succeed.
    fn min_periods(&self) -> usize;

    /// Length of the output produced from an input of `input_len` points.
    ///
    /// Returns 0 when the input is too short to produce anything.
    fn output_len(&self, input_len: usize) -> usize;

    /// Smooth the input sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is too short or a parameter is invalid.
    fn smooth(&self, data: &[T]) -> Result<Vec<T>>;
}
