//! Volatility and range indicators.

use pine_core::{rolling, smooth, to_series, PineFloat, Result, Series, SeriesInput, TaError};

fn aligned<T: PineFloat>(base: &Series<T>, other: &Series<T>) -> Result<()> {
    if base.len() != other.len() {
        return Err(TaError::BroadcastMismatch {
            expected: base.len(),
            actual: other.len(),
        });
    }
    Ok(())
}

/// True range: `max(high - low, |high - prevClose|, |low - prevClose|)`.
///
/// The three candidates are reduced with an NA-skipping max, so bar 0 (where
/// the previous close does not exist) falls back to `high - low`, and the
/// result is NA only when every candidate is NA.
///
/// # Errors
///
/// Returns an error when the inputs cannot be broadcast to one length.
pub fn true_range<'a, 'b, 'c, T, H, L, C>(high: H, low: L, close: C) -> Result<Series<T>>
where
    T: PineFloat,
    H: Into<SeriesInput<'a, T>>,
    L: Into<SeriesInput<'b, T>>,
    C: Into<SeriesInput<'c, T>>,
{
    let high = to_series(high, None);
    let low = to_series(low, Some(&high));
    let close = to_series(close, Some(&high));
    aligned(&high, &low)?;
    aligned(&high, &close)?;

    let (h, l, c) = (high.as_slice(), low.as_slice(), close.as_slice());
    let mut out = Vec::with_capacity(h.len());

    for i in 0..h.len() {
        let hl = h[i] - l[i];
        let (hc, lc) = if i == 0 {
            (T::NAN, T::NAN)
        } else {
            let prev_close = c[i - 1];
            ((h[i] - prev_close).abs(), (l[i] - prev_close).abs())
        };

        let mut tr = T::NAN;
        for v in [hl, hc, lc] {
            if v.is_na() {
                continue;
            }
            if tr.is_na() || v > tr {
                tr = v;
            }
        }
        out.push(tr);
    }
    Ok(Series::from_vec(out))
}

/// Average true range: Wilder's smoothing of the true range.
///
/// # Errors
///
/// Returns an error when `length` is zero or the inputs cannot be broadcast.
pub fn atr<'a, 'b, 'c, T, H, L, C>(high: H, low: L, close: C, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    H: Into<SeriesInput<'a, T>>,
    L: Into<SeriesInput<'b, T>>,
    C: Into<SeriesInput<'c, T>>,
{
    let tr = true_range(high, low, close)?;
    smooth::rma(tr.as_slice(), length)
}

/// Windowed population standard deviation (ddof = 0).
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn stdev<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    rolling::rolling_std(source.as_slice(), length)
}

/// Windowed population variance (ddof = 0).
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn variance<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    rolling::rolling_var(source.as_slice(), length)
}

/// Highest value over the last `length` bars.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn highest<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    rolling::rolling_max(source.as_slice(), length)
}

/// Lowest value over the last `length` bars.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn lowest<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    rolling::rolling_min(source.as_slice(), length)
}

/// Distance in bars (0 = current bar) back to the highest value in the
/// window. Ties resolve to the earliest occurrence, i.e. the largest
/// distance.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn highestbars<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    rolling::rolling_max_offset(source.as_slice(), length)
}

/// Distance in bars (0 = current bar) back to the lowest value in the window.
/// Same tie-break as [`highestbars`].
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn lowestbars<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    rolling::rolling_min_offset(source.as_slice(), length)
}
