//! Utility reductions and pairwise operations over sequences.
//!
//! These functions are the small building blocks signal code reaches for:
//! extreme-value search, element-wise subtraction and detection of the points
//! where one series crosses another.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatError};
use crate::num::{OrderedNum, StatFloat};

/// An extreme value together with the index of its first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extremum<T> {
    /// The extreme value.
    pub value: T,
    /// Index of its first occurrence.
    pub index: usize,
}

/// Find the largest value and the index of its first occurrence.
///
/// Works for any ordered numeric kind. Ties keep the earliest index. A NaN
/// never replaces the current best, so NaNs after the first element are
/// skipped; a leading NaN is returned as-is.
///
/// # Errors
///
/// Returns [`StatError::EmptyInput`] on an empty slice.
///
/// # Example
///
/// ```rust
/// use s4t_core::utils::find_max;
///
/// let top = find_max(&[3, 1, 4, 1, 5]).unwrap();
/// assert_eq!((top.value, top.index), (5, 4));
/// ```
pub fn find_max<T: OrderedNum>(data: &[T]) -> Result<Extremum<T>> {
    find_by(data, |candidate, best| candidate > best)
}

/// Find the smallest value and the index of its first occurrence.
///
/// Same tie and NaN rules as [`find_max`].
///
/// # Errors
///
/// Returns [`StatError::EmptyInput`] on an empty slice.
pub fn find_min<T: OrderedNum>(data: &[T]) -> Result<Extremum<T>> {
    find_by(data, |candidate, best| candidate < best)
}

fn find_by<T, F>(data: &[T], better: F) -> Result<Extremum<T>>
where
    T: OrderedNum,
    F: Fn(T, T) -> bool,
{
    let (&first, rest) = data.split_first().ok_or(StatError::EmptyInput)?;

    let mut best = Extremum {
        value: first,
        index: 0,
    };
    for (offset, &value) in rest.iter().enumerate() {
        if better(value, best.value) {
            best = Extremum {
                value,
                index: offset + 1,
            };
        }
    }

    Ok(best)
}

/// Element-wise difference `a[i] - b[i]`.
///
/// # Errors
///
/// Returns [`StatError::LengthMismatch`] when the slices differ in length.
pub fn subtract<T: StatFloat>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    if a.len() != b.len() {
        return Err(StatError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter().zip(b).map(|(&x, &y)| x - y).collect())
}

/// Direction in which the investigated series crossed the reference series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CrossDirection {
    /// No crossing at this index.
    #[default]
    None,
    /// Investigated moved from below the reference to above it.
    BottomToTop,
    /// Investigated moved from above the reference to below it.
    TopToBottom,
}

impl CrossDirection {
    /// Label used in signal tables; empty for [`CrossDirection::None`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::BottomToTop => "BOTTOM_TO_TOP",
            Self::TopToBottom => "TOP_TO_BOTTOM",
        }
    }

    /// `true` for either crossing direction.
    #[must_use]
    pub fn is_cross(self) -> bool {
        self != Self::None
    }
}

impl fmt::Display for CrossDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annotate every index with the direction the investigated series crossed
/// the reference series, comparing the pair at `i - 1` with the pair at `i`.
///
/// Index 0 is always [`CrossDirection::None`]. A pair where the two series are
/// equal (or either is NaN) has no side of its own and keeps the last strict
/// one, so a touch followed by a return to the same side is not a crossing,
/// and a touch followed by a break is reported at the break. Until the
/// series have been strictly apart once there is no side to cross from.
///
/// # Errors
///
/// Returns [`StatError::LengthMismatch`] when the slices differ in length.
///
/// # Example
///
/// ```rust
/// use s4t_core::utils::{crossing_directions, CrossDirection};
///
/// let crosses = crossing_directions(&[1.0_f64, 3.0, 1.0], &[2.0, 2.0, 2.0]).unwrap();
/// assert_eq!(
///     crosses,
///     vec![CrossDirection::None, CrossDirection::TopToBottom, CrossDirection::BottomToTop]
/// );
/// ```
pub fn crossing_directions<T: StatFloat>(
    reference: &[T],
    investigated: &[T],
) -> Result<Vec<CrossDirection>> {
    if reference.len() != investigated.len() {
        return Err(StatError::LengthMismatch {
            expected: reference.len(),
            actual: investigated.len(),
        });
    }

    let len = reference.len();
    let mut result = Vec::with_capacity(len);

    if len == 0 {
        return Ok(result);
    }

    let mut side = strict_side(reference[0], investigated[0]);
    result.push(CrossDirection::None); // No prior sample to compare

    for i in 1..len {
        let current = strict_side(reference[i], investigated[i]);

        let direction = match (side, current) {
            (Some(Ordering::Less), Some(Ordering::Greater)) => CrossDirection::BottomToTop,
            (Some(Ordering::Greater), Some(Ordering::Less)) => CrossDirection::TopToBottom,
            _ => CrossDirection::None,
        };
        result.push(direction);

        if current.is_some() {
            side = current;
        }
    }

    Ok(result)
}

/// Side of the reference the investigated value is on; `None` when touching.
fn strict_side<T: StatFloat>(reference: T, investigated: T) -> Option<Ordering> {
    match investigated.partial_cmp(&reference) {
        Some(Ordering::Equal) | None => None,
        side => side,
    }
}
