//! Plane geometry for trend-line work.
//!
//! Lines are handled in slope-intercept form, so vertical lines are out of
//! reach by construction: a [`Segment`] must run strictly left to right.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatError};
use crate::num::StatFloat;
use crate::utils::{find_max, find_min};

/// Tolerance shared by every degeneracy and agreement check in this module.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    /// Horizontal coordinate (usually a time step).
    pub x: T,
    /// Vertical coordinate (usually a price).
    pub y: T,
}

impl<T> Point<T> {
    /// Create a point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// A line segment given by its two endpoints.
///
/// `a.x < b.x` is required; [`segment_intersection`] rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment<T> {
    /// Left endpoint.
    pub a: Point<T>,
    /// Right endpoint.
    pub b: Point<T>,
}

impl<T: StatFloat> Segment<T> {
    /// Create a segment from its endpoints.
    pub const fn new(a: Point<T>, b: Point<T>) -> Self {
        Self { a, b }
    }

    /// Create a segment from raw coordinates.
    pub fn from_coords(ax: T, ay: T, bx: T, by: T) -> Self {
        Self::new(Point::new(ax, ay), Point::new(bx, by))
    }

    /// Horizontal span `b.x - a.x`.
    #[must_use]
    pub fn dx(&self) -> T {
        self.b.x - self.a.x
    }

    /// Slope and intercept of the line carrying this segment.
    ///
    /// # Errors
    ///
    /// Returns [`StatError::DegenerateSegment`] when `dx() <= 1e-9`.
    pub fn line(&self) -> Result<LineParams<T>> {
        let dx = self.dx();
        if dx <= T::from_f64_lossy(GEOMETRY_EPSILON) {
            return Err(StatError::DegenerateSegment {
                dx: dx.to_f64_lossy(),
                tolerance: GEOMETRY_EPSILON,
            });
        }

        let slope = (self.b.y - self.a.y) / dx;
        Ok(LineParams {
            slope,
            intercept: self.a.y - slope * self.a.x,
        })
    }
}

/// A line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineParams<T> {
    /// Rise over run.
    pub slope: T,
    /// Value at `x = 0`.
    pub intercept: T,
}

impl<T: StatFloat> LineParams<T> {
    /// Evaluate the line at `x`.
    #[must_use]
    pub fn y_at(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

/// Solve for the line through two points with Cramer's rule.
///
/// The system is `slope * x1 + intercept = y1`, `slope * x2 + intercept = y2`,
/// whose determinant is `x1 - x2`.
///
/// # Errors
///
/// Returns [`StatError::AmbiguousLine`] when `|x1 - x2| < 1e-9`.
///
/// # Example
///
/// ```rust
/// use s4t_core::geometry::{line_from_points, Point};
///
/// let line = line_from_points(Point::new(1.0_f64, 3.0), Point::new(3.0, 7.0)).unwrap();
/// assert_eq!(line.slope, 2.0);
/// assert_eq!(line.intercept, 1.0);
/// ```
pub fn line_from_points<T: StatFloat>(p1: Point<T>, p2: Point<T>) -> Result<LineParams<T>> {
    let det = p1.x - p2.x;
    if det.abs() < T::from_f64_lossy(GEOMETRY_EPSILON) {
        return Err(StatError::AmbiguousLine {
            x: p1.x.to_f64_lossy(),
        });
    }

    let det_slope = p1.y - p2.y;
    let det_intercept = p1.x * p2.y - p2.x * p1.y;

    Ok(LineParams {
        slope: det_slope / det,
        intercept: det_intercept / det,
    })
}

/// Intersect two segments.
///
/// Returns `Ok(None)` for parallel lines (slopes within 1e-9) and when the
/// lines meet outside the overlap of the two segments' X-projections,
/// `[max(a.x), min(b.x)]`. Otherwise returns the intersection point.
///
/// # Errors
///
/// Returns [`StatError::DegenerateSegment`] if either segment spans 1e-9 or
/// less along X, or runs right to left.
///
/// # Panics
///
/// Panics if the two line equations disagree on `y` at the computed `x`,
/// which can only mean the algebra above is wrong.
///
/// # Example
///
/// ```rust
/// use s4t_core::geometry::{segment_intersection, Point, Segment};
///
/// let rising = Segment::from_coords(0.0_f64, 0.0, 2.0, 2.0);
/// let falling = Segment::from_coords(0.0, 2.0, 2.0, 0.0);
/// let hit = segment_intersection(&rising, &falling).unwrap();
/// assert_eq!(hit, Some(Point::new(1.0, 1.0)));
/// ```
pub fn segment_intersection<T: StatFloat>(
    first: &Segment<T>,
    second: &Segment<T>,
) -> Result<Option<Point<T>>> {
    let l1 = first.line()?;
    let l2 = second.line()?;

    let tolerance = T::from_f64_lossy(GEOMETRY_EPSILON);
    if l1.slope.approx_eq(l2.slope, tolerance) {
        tracing::trace!("segments are parallel, no intersection");
        return Ok(None);
    }

    let x = (l2.intercept - l1.intercept) / (l1.slope - l2.slope);
    if !x.is_finite() {
        tracing::trace!("lines meet beyond the representable range");
        return Ok(None);
    }
    let y1 = assert_lines_agree(&l1, &l2, x);

    let overlap_start = find_max(&[first.a.x, second.a.x])?.value;
    let overlap_end = find_min(&[first.b.x, second.b.x])?.value;

    if x < overlap_start || x > overlap_end {
        return Ok(None);
    }

    Ok(Some(Point::new(x, y1)))
}

/// Both line equations must give the same `y` at their intersection.
///
/// Rounding in `slope * x + intercept` grows with the larger of its terms,
/// not with `y`, and with the precision of `T`. The tolerance is therefore
/// `max(1e-9, 64 * T::epsilon())` times the largest of 1, `|slope * x|` and
/// `|intercept|` over both lines. For `f64` this keeps the 1e-9 floor.
///
/// Returns the first line's `y`.
fn assert_lines_agree<T: StatFloat>(l1: &LineParams<T>, l2: &LineParams<T>, x: T) -> T {
    let y1 = l1.y_at(x);
    let y2 = l2.y_at(x);

    let scale = [
        (l1.slope * x).abs(),
        l1.intercept.abs(),
        (l2.slope * x).abs(),
        l2.intercept.abs(),
    ]
    .into_iter()
    .fold(T::ONE, T::max);
    let relative = T::from_f64_lossy(GEOMETRY_EPSILON).max(<T as StatFloat>::from_usize(64) * T::epsilon());
    let tolerance = relative * scale;

    assert!(
        (y1 - y2).abs() <= tolerance,
        "line equations disagree at intersection: {y1:?} vs {y2:?}"
    );
    y1
}
