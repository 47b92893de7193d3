//! Moving averages.
//!
//! All four averages share the windowed/recursive engines from pine-core and
//! accept any broadcastable input; the first `length - 1` outputs are NA.

use pine_core::{rolling, smooth, to_series, PineFloat, Result, Series, SeriesInput};

/// Simple moving average: arithmetic mean of the last `length` samples.
///
/// # Errors
///
/// Returns an error when `length` is zero.
///
/// # Example
///
/// ```rust
/// use pine_ta::sma;
///
/// let result = sma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 2.0);
/// assert_eq!(result[4], 4.0);
/// ```
pub fn sma<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    rolling::rolling_mean(source.as_slice(), length)
}

/// Exponential moving average with smoothing factor `2 / (length + 1)`.
///
/// Seeded with the mean of the first `length` valid samples; see
/// [`pine_core::smooth`] for the NA policy.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn ema<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    smooth::ema(source.as_slice(), length)
}

/// Wilder's moving average with smoothing factor `1 / length`.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn rma<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    smooth::rma(source.as_slice(), length)
}

/// Linearly-weighted moving average.
///
/// Weights `1..=length` favor the most recent samples; the divisor is
/// `length * (length + 1) / 2`.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn wma<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    rolling::rolling_wma(source.as_slice(), length)
}
