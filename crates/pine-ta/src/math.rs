//! Elementwise math helpers and cumulative aggregations.
//!
//! These mirror the arithmetic surface of the series engine: NA propagates
//! through every elementwise operation here, while the NA-handling entry
//! points (`nz`, `isna`) are the one sanctioned way to observe or replace
//! the sentinel.

use pine_core::{rolling, to_series, PineFloat, Result, Series, SeriesInput};

/// Replace NA samples with `replacement`.
///
/// # Example
///
/// ```rust
/// use pine_ta::nz;
///
/// let result = nz(&[1.0, f64::NAN, 3.0], 0.0);
/// assert_eq!(result.as_slice(), &[1.0, 0.0, 3.0]);
/// ```
#[must_use]
pub fn nz<'a, T, S>(source: S, replacement: T) -> Series<T>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    to_series(source, None).fill_na(replacement)
}

/// Boolean mask of the NA samples.
#[must_use]
pub fn isna<'a, T, S>(source: S) -> Vec<bool>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    to_series(source, None).iter().map(|x| x.is_na()).collect()
}

/// Elementwise maximum of two operands. NA in either operand yields NA.
///
/// # Errors
///
/// Returns an error when the operands cannot be broadcast to one length.
pub fn max<'a, 'b, T, A, B>(a: A, b: B) -> Result<Series<T>>
where
    T: PineFloat,
    A: Into<SeriesInput<'a, T>>,
    B: Into<SeriesInput<'b, T>>,
{
    let a = to_series(a, None);
    a.zip_with(b, |x, y| {
        if x.is_na() || y.is_na() {
            T::NAN
        } else if x > y {
            x
        } else {
            y
        }
    })
}

/// Elementwise minimum of two operands. NA in either operand yields NA.
///
/// # Errors
///
/// Returns an error when the operands cannot be broadcast to one length.
pub fn min<'a, 'b, T, A, B>(a: A, b: B) -> Result<Series<T>>
where
    T: PineFloat,
    A: Into<SeriesInput<'a, T>>,
    B: Into<SeriesInput<'b, T>>,
{
    let a = to_series(a, None);
    a.zip_with(b, |x, y| {
        if x.is_na() || y.is_na() {
            T::NAN
        } else if x < y {
            x
        } else {
            y
        }
    })
}

/// Elementwise mean of two operands.
///
/// # Errors
///
/// Returns an error when the operands cannot be broadcast to one length.
pub fn avg<'a, 'b, T, A, B>(a: A, b: B) -> Result<Series<T>>
where
    T: PineFloat,
    A: Into<SeriesInput<'a, T>>,
    B: Into<SeriesInput<'b, T>>,
{
    let a = to_series(a, None);
    a.add(b)?.div(T::TWO)
}

/// Elementwise absolute value.
#[must_use]
pub fn abs<'a, T, S>(source: S) -> Series<T>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    to_series(source, None).abs()
}

/// Elementwise square root; negative inputs yield NA.
#[must_use]
pub fn sqrt<'a, T, S>(source: S) -> Series<T>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    to_series(source, None).map(|x| x.sqrt())
}

/// Elementwise power.
///
/// # Errors
///
/// Returns an error when the operands cannot be broadcast to one length.
pub fn pow<'a, 'b, T, S, P>(source: S, power: P) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
    P: Into<SeriesInput<'b, T>>,
{
    to_series(source, None).pow(power)
}

/// Elementwise floor.
#[must_use]
pub fn floor<'a, T, S>(source: S) -> Series<T>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    to_series(source, None).map(|x| x.floor())
}

/// Elementwise ceiling.
#[must_use]
pub fn ceil<'a, T, S>(source: S) -> Series<T>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    to_series(source, None).map(|x| x.ceil())
}

/// Elementwise rounding to `precision` decimal places.
///
/// A negative precision rounds to tens, hundreds, and so on.
#[must_use]
pub fn round<'a, T, S>(source: S, precision: i32) -> Series<T>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let factor = <T as PineFloat>::from_usize(10).powi(precision);
    to_series(source, None).map(|x| (x * factor).round() / factor)
}

/// Sliding sum of the last `length` samples.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn sum<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    rolling::rolling_sum(source.as_slice(), length)
}

/// Cumulative sum from the first bar.
///
/// An NA sample emits NA without resetting the running total; accumulation
/// continues at the next valid sample.
#[must_use]
pub fn cum<'a, T, S>(source: S) -> Series<T>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    let mut out = Vec::with_capacity(source.len());
    let mut running = T::ZERO;

    for &x in source.iter() {
        if x.is_na() {
            out.push(T::NAN);
        } else {
            running = running + x;
            out.push(running);
        }
    }
    Series::from_vec(out)
}
