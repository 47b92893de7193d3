//! Volume-weighted indicators.

use pine_core::{rolling, to_series, PineFloat, Result, Series, SeriesInput};

/// Volume-weighted moving average.
///
/// For each window, `sum(price * volume) / sum(volume)`. A zero-volume window
/// divides by zero and yields NA or infinity per floating semantics.
///
/// # Errors
///
/// Returns an error when `length` is zero or the price and volume series
/// cannot be broadcast to one length.
pub fn vwma<'a, 'b, T, S, V>(source: S, volume: V, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
    V: Into<SeriesInput<'b, T>>,
{
    let source = to_series(source, None);
    let volume = to_series(volume, Some(&source));

    let weighted = source.mul(&volume)?;
    let num = rolling::rolling_sum(weighted.as_slice(), length)?;
    let den = rolling::rolling_sum(volume.as_slice(), length)?;
    num.div(&den)
}
