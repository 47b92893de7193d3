//! Numeric type abstractions for bar-series computations.
//!
//! This module defines the [`PineFloat`] trait which abstracts over `f32` and
//! `f64` for generic indicator implementations. The not-available (NA) sentinel
//! of the engine is the type's IEEE NaN: arithmetic with NA yields NA, and
//! comparisons against NA evaluate to `false`.

use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Trait for floating-point types used in indicator calculations.
///
/// Provides a common interface for `f32` and `f64`, enabling generic
/// implementations of series operations and indicators.
///
/// # Associated Constants
///
/// - `NAN` - The NA sentinel ("value undefined at this bar")
/// - `INFINITY` / `NEG_INFINITY` - Infinities
/// - `ZERO`, `ONE`, `TWO` - Small integers used throughout the recurrences
/// - `HUNDRED` - Hundred value (percentage scaling for RSI, ROC)
///
/// # Example
///
/// ```rust
/// use pine_core::PineFloat;
///
/// fn rescale<T: PineFloat>(ratio: T) -> T {
///     T::HUNDRED - T::HUNDRED / (T::ONE + ratio)
/// }
///
/// assert_eq!(rescale(1.0_f64), 50.0);
/// ```
#[cfg(feature = "serde")]
pub trait PineFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + Serialize + DeserializeOwned + 'static
{
    /// The NA sentinel (IEEE NaN).
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Hundred value (percentage calculations like RSI and ROC).
    const HUNDRED: Self;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check whether the value is the NA sentinel.
    #[must_use]
    fn is_na(self) -> bool {
        self.is_nan()
    }
}

#[cfg(not(feature = "serde"))]
pub trait PineFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + 'static
{
    /// The NA sentinel (IEEE NaN).
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Hundred value (percentage calculations like RSI and ROC).
    const HUNDRED: Self;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check whether the value is the NA sentinel.
    #[must_use]
    fn is_na(self) -> bool {
        self.is_nan()
    }
}

impl PineFloat for f32 {
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl PineFloat for f64 {
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_f64() {
        assert!(<f64 as PineFloat>::NAN.is_nan());
        assert!(<f64 as PineFloat>::INFINITY.is_infinite());
        assert!(<f64 as PineFloat>::NEG_INFINITY.is_infinite());
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(f64::ONE, 1.0);
        assert_eq!(f64::TWO, 2.0);
        assert_eq!(f64::HUNDRED, 100.0);
    }

    #[test]
    fn test_constants_f32() {
        assert!(<f32 as PineFloat>::NAN.is_nan());
        assert_eq!(f32::ZERO, 0.0);
        assert_eq!(f32::ONE, 1.0);
        assert_eq!(f32::TWO, 2.0);
        assert_eq!(f32::HUNDRED, 100.0);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(<f64 as PineFloat>::from_usize(42), 42.0);
        assert_eq!(<f32 as PineFloat>::from_usize(42), 42.0f32);
    }

    #[test]
    fn test_is_na() {
        assert!(<f64 as PineFloat>::NAN.is_na());
        assert!(!1.0f64.is_na());
        // Infinities are valid values, not NA
        assert!(!<f64 as PineFloat>::INFINITY.is_na());
    }

    #[test]
    fn test_na_comparisons_are_false() {
        let na = <f64 as PineFloat>::NAN;
        assert!(!(na > 0.0));
        assert!(!(na < 0.0));
        assert!(!(na >= na));
        assert!(!(na <= 0.0));
    }
}
