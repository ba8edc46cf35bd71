//! Crossing signals between smoothed series.
//!
//! Moving averages of different windows come out with different lengths,
//! all of them ending at the last input point. The helpers here line such
//! series up by their tails before comparing them.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use s4t_core::{
    error::{PipelineResult, Result},
    num::StatFloat,
    utils::{crossing_directions, subtract, CrossDirection},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pipeline::SmoothingPipeline;

/// A single crossing found in a pair of series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrossEvent {
    /// Index into the aligned series.
    pub index: usize,
    /// Direction of the investigated series relative to the reference.
    pub direction: CrossDirection,
}

/// Trim the longer of two series from the front so both end together.
///
/// # Example
///
/// ```
/// use s4t_pipeline::signal::align_tails;
///
/// let (a, b) = align_tails(&[1, 2, 3, 4], &[7, 8]);
/// assert_eq!(a, &[3, 4]);
/// assert_eq!(b, &[7, 8]);
/// ```
pub fn align_tails<'a, T>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    let len = a.len().min(b.len());
    (&a[a.len() - len..], &b[b.len() - len..])
}

/// Element-wise `a - b` over the common tail of both series.
///
/// # Errors
///
/// Never fails for tail-aligned input; the result type follows
/// [`subtract`].
pub fn spread<T: StatFloat>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    let (a, b) = align_tails(a, b);
    subtract(a, b)
}

/// Crossing directions over the common tail of both series.
///
/// Index 0 of the result corresponds to the first aligned point and is
/// always [`CrossDirection::None`].
pub fn cross_signals<T: StatFloat>(reference: &[T], investigated: &[T]) -> Result<Vec<CrossDirection>> {
    let (reference, investigated) = align_tails(reference, investigated);
    crossing_directions(reference, investigated)
}

/// Only the actual crossings, with their aligned indices.
pub fn cross_events<T: StatFloat>(reference: &[T], investigated: &[T]) -> Result<Vec<CrossEvent>> {
    let events = cross_signals(reference, investigated)?
        .into_iter()
        .enumerate()
        .filter(|(_, direction)| direction.is_cross())
        .map(|(index, direction)| CrossEvent { index, direction })
        .collect();
    Ok(events)
}

/// Run two pipelines over the same data and report where the second
/// crosses the first.
///
/// # Errors
///
/// Propagates any failure of either pipeline.
pub fn pipeline_crossings<T: StatFloat>(
    data: &[T],
    reference: &SmoothingPipeline<T>,
    investigated: &SmoothingPipeline<T>,
) -> PipelineResult<Vec<CrossDirection>> {
    let reference = reference.run(data)?;
    let investigated = investigated.run(data)?;

    let signals = cross_signals(&reference, &investigated)?;
    tracing::debug!(
        aligned_len = signals.len(),
        crossings = signals.iter().filter(|d| d.is_cross()).count(),
        "crossing scan complete"
    );
    Ok(signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use s4t_core::{error::PipelineError, Smoother};
    use s4t_smoothing::prelude::*;

    #[test]
    fn test_align_tails_keeps_the_end() {
        let long = [1.0, 2.0, 3.0, 4.0, 5.0];
        let short = [10.0, 20.0];

        let (a, b) = align_tails(&long, &short);
        assert_eq!(a, &[4.0, 5.0]);
        assert_eq!(b, &short);

        let (b, a) = align_tails(&short, &long);
        assert_eq!(a, &[4.0, 5.0]);
        assert_eq!(b, &short);
    }

    #[test]
    fn test_align_tails_empty() {
        let (a, b) = align_tails::<f64>(&[], &[1.0, 2.0]);
        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn test_spread() {
        let fast = [5.0, 6.0, 7.0, 8.0];
        let slow = [6.5, 6.5];
        assert_eq!(spread(&fast, &slow).unwrap(), vec![0.5, 1.5]);
    }

    #[test]
    fn test_cross_signals_aligned() {
        let reference = [2.0, 2.0, 2.0];
        let investigated = [0.0, 0.0, 1.0, 3.0, 1.0];

        let signals = cross_signals(&reference, &investigated).unwrap();
        assert_eq!(
            signals,
            vec![
                CrossDirection::None,
                CrossDirection::BottomToTop,
                CrossDirection::TopToBottom
            ]
        );

        let events = cross_events(&reference, &investigated).unwrap();
        assert_eq!(
            events,
            vec![
                CrossEvent {
                    index: 1,
                    direction: CrossDirection::BottomToTop
                },
                CrossEvent {
                    index: 2,
                    direction: CrossDirection::TopToBottom
                },
            ]
        );
    }

    #[test]
    fn test_pipeline_crossings() {
        let data = [2.0, 2.0, 2.0, 1.0, 4.0, 4.0, 0.0, 0.0, 0.0];
        let slow = SmoothingPipeline::<f64>::new().add(<Sma as Smoother<f64>>::new(SmaConfig::new(4)));
        let fast = SmoothingPipeline::<f64>::new().add(<Sma as Smoother<f64>>::new(SmaConfig::new(2)));

        // slow: 1.75, 2.25, 2.75, 2.25, 2, 1   (aligned from input index 3)
        // fast: 1.5,  2.5,  4,    2,    0, 0
        let signals = pipeline_crossings(&data, &slow, &fast).unwrap();
        assert_eq!(
            signals,
            vec![
                CrossDirection::None,
                CrossDirection::BottomToTop,
                CrossDirection::None,
                CrossDirection::TopToBottom,
                CrossDirection::None,
                CrossDirection::None,
            ]
        );
    }

    #[test]
    fn test_pipeline_crossings_propagates_failure() {
        let slow = SmoothingPipeline::<f64>::new().add(<Sma as Smoother<f64>>::new(SmaConfig::new(20)));
        let fast = SmoothingPipeline::<f64>::new().add(<Sma as Smoother<f64>>::new(SmaConfig::new(2)));

        let err = pipeline_crossings(&[1.0, 2.0, 3.0], &slow, &fast).unwrap_err();
        assert!(matches!(err, PipelineError::StageFailed { stage: 0, .. }));
    }
}
