//! Numeric type abstractions.
//!
//! [`StatFloat`] abstracts over `f32` and `f64` for the smoothing and geometry
//! routines. [`OrderedNum`] is the looser bound used by min/max search, which
//! also accepts every signed and unsigned integer kind.

use num_traits::{Float, FromPrimitive, Num, ToPrimitive};

/// Trait for floating-point types used in smoothing and geometry calculations.
///
/// # Example
///
/// ```rust
/// use s4t_core::StatFloat;
///
/// fn midpoint<T: StatFloat>(a: T, b: T) -> T {
///     (a + b) / T::TWO
/// }
///
/// assert_eq!(midpoint(1.0_f64, 2.0), 1.5);
/// ```
pub trait StatFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + core::fmt::Debug + 'static
{
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Not-a-number value.
    const NAN: Self;

    /// Convert from `f64`.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// `true` when `|self - other| < tolerance`.
    #[must_use]
    fn approx_eq(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() < tolerance
    }
}

impl StatFloat for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const NAN: Self = f32::NAN;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl StatFloat for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const NAN: Self = f64::NAN;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}

/// Any ordered numeric kind: `i8`..`i128`, `u8`..`u128`, `isize`, `usize`, `f32`, `f64`.
///
/// Blanket-implemented; there is nothing to implement by hand.
pub trait OrderedNum: Num + PartialOrd + Copy {}

impl<T> OrderedNum for T where T: Num + PartialOrd + Copy {}
