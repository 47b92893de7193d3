//! Price aggregates: elementwise means of broadcast-aligned input series.

use pine_core::{to_series, PineFloat, Result, Series, SeriesInput};

/// Median price: `(high + low) / 2`.
///
/// # Errors
///
/// Returns an error when the inputs cannot be broadcast to one length.
pub fn hl2<'a, 'b, T, H, L>(high: H, low: L) -> Result<Series<T>>
where
    T: PineFloat,
    H: Into<SeriesInput<'a, T>>,
    L: Into<SeriesInput<'b, T>>,
{
    let high = to_series(high, None);
    let low = to_series(low, Some(&high));
    high.add(&low)?.div(T::TWO)
}

/// Typical price: `(high + low + close) / 3`.
///
/// # Errors
///
/// Returns an error when the inputs cannot be broadcast to one length.
pub fn hlc3<'a, 'b, 'c, T, H, L, C>(high: H, low: L, close: C) -> Result<Series<T>>
where
    T: PineFloat,
    H: Into<SeriesInput<'a, T>>,
    L: Into<SeriesInput<'b, T>>,
    C: Into<SeriesInput<'c, T>>,
{
    let high = to_series(high, None);
    let low = to_series(low, Some(&high));
    let close = to_series(close, Some(&high));
    high.add(&low)?.add(&close)?.div(<T as PineFloat>::from_usize(3))
}

/// Average price of the full bar: `(open + high + low + close) / 4`.
///
/// # Errors
///
/// Returns an error when the inputs cannot be broadcast to one length.
pub fn ohlc4<'a, 'b, 'c, 'd, T, O, H, L, C>(open: O, high: H, low: L, close: C) -> Result<Series<T>>
where
    T: PineFloat,
    O: Into<SeriesInput<'a, T>>,
    H: Into<SeriesInput<'b, T>>,
    L: Into<SeriesInput<'c, T>>,
    C: Into<SeriesInput<'d, T>>,
{
    let open = to_series(open, None);
    let high = to_series(high, Some(&open));
    let low = to_series(low, Some(&open));
    let close = to_series(close, Some(&open));
    open.add(&high)?
        .add(&low)?
        .add(&close)?
        .div(<T as PineFloat>::from_usize(4))
}
