//! Bar-aligned series container and coercion rules.
//!
//! The [`Series`] type is the common currency of the engine: an ordered,
//! bar-indexed sequence of floating-point samples where position 0 is the
//! earliest bar. Each sample is either a finite value or the NA sentinel
//! (IEEE NaN). A series is immutable from the consumer's perspective; every
//! operation returns a new series.
//!
//! Binary operations accept anything convertible to [`SeriesInput`]: another
//! series, a raw slice, or a scalar. Scalars broadcast to the partner series'
//! length; two series operands must have identical lengths.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaError};
use crate::num::PineFloat;

/// A bar-aligned series of floating-point samples.
///
/// Carries an optional name used for diagnostics only; the name never affects
/// computation. Unary operations preserve the name, binary operations drop it.
///
/// # Example
///
/// ```rust
/// use pine_core::Series;
///
/// let close: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8]);
/// let prev = close.shift(1);
///
/// assert!(prev[0].is_nan());
/// assert_eq!(prev[1], 100.0);
/// assert_eq!(close.len(), prev.len());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: PineFloat"))]
pub struct Series<T: PineFloat> {
    data: Vec<T>,
    name: Option<String>,
}

impl<T: PineFloat> Series<T> {
    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data, name: None }
    }

    /// Create a series filled with a value.
    #[must_use]
    pub fn filled(value: T, len: usize) -> Self {
        Self {
            data: vec![value; len],
            name: None,
        }
    }

    /// Create a series filled with NA.
    #[must_use]
    pub fn nan(len: usize) -> Self {
        Self::filled(T::NAN, len)
    }

    /// Returns the number of bars in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series contains no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the raw value at a bar position, or `None` when out of range.
    ///
    /// This is positional access, not lookback; use [`Series::shift`] for
    /// causal bar offsets.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Returns the underlying samples as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the series and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns an iterator over the samples.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// The diagnostic name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Return the same series under a new diagnostic name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Count the NA samples.
    #[must_use]
    pub fn na_count(&self) -> usize {
        self.data.iter().filter(|x| x.is_na()).count()
    }

    /// Check if the series contains any NA sample.
    #[must_use]
    pub fn has_na(&self) -> bool {
        self.data.iter().any(|x| x.is_na())
    }

    /// Causal lookback: offset the series by `n` bars into the past.
    ///
    /// The first `n` positions become NA; position `i >= n` holds the value
    /// from position `i - n`. `shift(0)` is the identity. A shift into the
    /// future is unrepresentable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pine_core::Series;
    ///
    /// let s: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    /// let prev = s.shift(2);
    ///
    /// assert!(prev[0].is_nan());
    /// assert!(prev[1].is_nan());
    /// assert_eq!(prev[2], 1.0);
    /// assert_eq!(prev[3], 2.0);
    /// ```
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        let len = self.data.len();
        let mut data = vec![T::NAN; len];
        if n < len {
            data[n..].copy_from_slice(&self.data[..len - n]);
        }
        Self {
            data,
            name: self.name.clone(),
        }
    }

    /// First differences over `n` bars: `y[i] = x[i] - x[i-n]`.
    ///
    /// The first `n` positions are NA.
    #[must_use]
    pub fn change(&self, n: usize) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for i in 0..self.data.len() {
            if i < n {
                data.push(T::NAN);
            } else {
                data.push(self.data[i] - self.data[i - n]);
            }
        }
        Self {
            data,
            name: self.name.clone(),
        }
    }

    /// Return a new series with NA samples replaced by `value`.
    #[must_use]
    pub fn fill_na(&self, value: T) -> Self {
        self.map(|x| if x.is_na() { value } else { x })
    }

    /// Apply a function to each sample.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            name: self.name.clone(),
        }
    }

    /// Elementwise negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.map(|x| -x)
    }

    /// Elementwise absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.map(|x| x.abs())
    }

    /// Combine with another operand elementwise via `f`.
    ///
    /// The operand is coerced by the broadcast rule: a scalar expands to this
    /// series' length; a series or slice must match it exactly.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] when a series/slice operand has
    /// a different length.
    pub fn zip_with<'a, F>(&self, other: impl Into<SeriesInput<'a, T>>, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
        T: 'a,
    {
        let data = match other.into() {
            SeriesInput::Scalar(c) => self.data.iter().map(|&x| f(x, c)).collect(),
            SeriesInput::Slice(s) => {
                self.check_aligned(s.len())?;
                self.data.iter().zip(s).map(|(&x, &y)| f(x, y)).collect()
            }
            SeriesInput::Series(s) => {
                self.check_aligned(s.len())?;
                self.data
                    .iter()
                    .zip(&s.data)
                    .map(|(&x, &y)| f(x, y))
                    .collect()
            }
        };
        Ok(Self { data, name: None })
    }

    /// Elementwise addition. NA in either operand yields NA.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn add<'a>(&self, other: impl Into<SeriesInput<'a, T>>) -> Result<Self>
    where
        T: 'a,
    {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise subtraction. NA in either operand yields NA.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn sub<'a>(&self, other: impl Into<SeriesInput<'a, T>>) -> Result<Self>
    where
        T: 'a,
    {
        self.zip_with(other, |a, b| a - b)
    }

    /// Elementwise multiplication. NA in either operand yields NA.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn mul<'a>(&self, other: impl Into<SeriesInput<'a, T>>) -> Result<Self>
    where
        T: 'a,
    {
        self.zip_with(other, |a, b| a * b)
    }

    /// Elementwise division.
    ///
    /// Division by zero yields infinity (or NA for 0/0) per IEEE semantics;
    /// it is never an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn div<'a>(&self, other: impl Into<SeriesInput<'a, T>>) -> Result<Self>
    where
        T: 'a,
    {
        self.zip_with(other, |a, b| a / b)
    }

    /// Elementwise power. NA in either operand yields NA.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn pow<'a>(&self, other: impl Into<SeriesInput<'a, T>>) -> Result<Self>
    where
        T: 'a,
    {
        self.zip_with(other, |a, b| a.powf(b))
    }

    /// Elementwise comparison via `f`, yielding a boolean mask.
    ///
    /// Comparisons against NA evaluate to `false` (a plain boolean, never a
    /// tri-state). This is a deliberate domain rule.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn mask_with<'a, F>(&self, other: impl Into<SeriesInput<'a, T>>, f: F) -> Result<Vec<bool>>
    where
        F: Fn(T, T) -> bool,
        T: 'a,
    {
        let mask = match other.into() {
            SeriesInput::Scalar(c) => self.data.iter().map(|&x| f(x, c)).collect(),
            SeriesInput::Slice(s) => {
                self.check_aligned(s.len())?;
                self.data.iter().zip(s).map(|(&x, &y)| f(x, y)).collect()
            }
            SeriesInput::Series(s) => {
                self.check_aligned(s.len())?;
                self.data
                    .iter()
                    .zip(&s.data)
                    .map(|(&x, &y)| f(x, y))
                    .collect()
            }
        };
        Ok(mask)
    }

    /// Elementwise "greater than" mask; NA compares false.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn gt<'a>(&self, other: impl Into<SeriesInput<'a, T>>) -> Result<Vec<bool>>
    where
        T: 'a,
    {
        self.mask_with(other, |a, b| a > b)
    }

    /// Elementwise "greater or equal" mask; NA compares false.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn ge<'a>(&self, other: impl Into<SeriesInput<'a, T>>) -> Result<Vec<bool>>
    where
        T: 'a,
    {
        self.mask_with(other, |a, b| a >= b)
    }

    /// Elementwise "less than" mask; NA compares false.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn lt<'a>(&self, other: impl Into<SeriesInput<'a, T>>) -> Result<Vec<bool>>
    where
        T: 'a,
    {
        self.mask_with(other, |a, b| a < b)
    }

    /// Elementwise "less or equal" mask; NA compares false.
    ///
    /// # Errors
    ///
    /// Returns [`TaError::BroadcastMismatch`] on misaligned series operands.
    pub fn le<'a>(&self, other: impl Into<SeriesInput<'a, T>>) -> Result<Vec<bool>>
    where
        T: 'a,
    {
        self.mask_with(other, |a, b| a <= b)
    }

    fn check_aligned(&self, other_len: usize) -> Result<()> {
        if self.data.len() != other_len {
            return Err(TaError::BroadcastMismatch {
                expected: self.data.len(),
                actual: other_len,
            });
        }
        Ok(())
    }
}

impl<T: PineFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: PineFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: PineFloat> From<&[T]> for Series<T> {
    fn from(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl<T: PineFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// An operand accepted by series operations and indicator functions.
///
/// The three variants enumerate every supported input shape; coercion is
/// exhaustive over them, so an unrecognized input type cannot occur.
#[derive(Clone, Copy, Debug)]
pub enum SeriesInput<'a, T: PineFloat> {
    /// An existing series, used as-is.
    Series(&'a Series<T>),
    /// A raw ordered sequence of samples.
    Slice(&'a [T]),
    /// A scalar, broadcast to the partner series' length.
    Scalar(T),
}

impl<'a, T: PineFloat> From<&'a Series<T>> for SeriesInput<'a, T> {
    fn from(s: &'a Series<T>) -> Self {
        SeriesInput::Series(s)
    }
}

impl<'a, T: PineFloat> From<&'a [T]> for SeriesInput<'a, T> {
    fn from(s: &'a [T]) -> Self {
        SeriesInput::Slice(s)
    }
}

impl<'a, T: PineFloat> From<&'a Vec<T>> for SeriesInput<'a, T> {
    fn from(s: &'a Vec<T>) -> Self {
        SeriesInput::Slice(s)
    }
}

impl<'a, T: PineFloat, const N: usize> From<&'a [T; N]> for SeriesInput<'a, T> {
    fn from(s: &'a [T; N]) -> Self {
        SeriesInput::Slice(s)
    }
}

impl<'a, T: PineFloat> From<T> for SeriesInput<'a, T> {
    fn from(value: T) -> Self {
        SeriesInput::Scalar(value)
    }
}

/// Coerce an input to a [`Series`].
///
/// A series input is cloned as-is, a slice becomes a new series, and a scalar
/// broadcasts to the length of `like` when provided (otherwise it becomes a
/// single-element series).
///
/// # Example
///
/// ```rust
/// use pine_core::{to_series, Series};
///
/// let close: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0]);
/// let level = to_series(2.0, Some(&close));
///
/// assert_eq!(level.as_slice(), &[2.0, 2.0, 2.0]);
/// ```
pub fn to_series<'a, T: PineFloat>(
    input: impl Into<SeriesInput<'a, T>>,
    like: Option<&Series<T>>,
) -> Series<T> {
    match input.into() {
        SeriesInput::Series(s) => s.clone(),
        SeriesInput::Slice(s) => Series::from(s),
        SeriesInput::Scalar(c) => match like {
            Some(l) => Series::filled(c, l.len()),
            None => Series::from_vec(vec![c]),
        },
    }
}
