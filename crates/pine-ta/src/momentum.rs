//! Momentum indicators.

use pine_core::{smooth, to_series, PineFloat, Result, Series, SeriesInput, TaError};

/// Relative Strength Index.
///
/// Gains and losses are split from the one-bar difference, smoothed with
/// Wilder's average, and scaled: `RSI = 100 - 100 / (1 + RS)` where
/// `RS = avgGain / avgLoss`.
///
/// A zero average loss with positive gain saturates to 100 via division by
/// zero; a fully flat window is 0/0 and yields NA. Neither is an error.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn rsi<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = to_series(source, None);
    let delta = source.change(1);

    // The NA first difference compares false on both sides, so bar 0
    // contributes a zero gain and a zero loss.
    let gain = delta.map(|d| if d > T::ZERO { d } else { T::ZERO });
    let loss = delta.map(|d| if d < T::ZERO { -d } else { T::ZERO });

    let avg_gain = smooth::rma(gain.as_slice(), length)?;
    let avg_loss = smooth::rma(loss.as_slice(), length)?;

    let rs = avg_gain.div(&avg_loss)?;
    Ok(rs.map(|r| T::HUNDRED - T::HUNDRED / (T::ONE + r)))
}

/// Rate of change: `100 * (x - x[length back]) / x[length back]`.
///
/// Division by zero yields infinity or NA per floating semantics, never an
/// error. The first `length` outputs are NA.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn roc<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    if length == 0 {
        return Err(TaError::InvalidWindow(0));
    }
    let source = to_series(source, None);
    let prev = source.shift(length);
    source.sub(&prev)?.div(&prev)?.mul(T::HUNDRED)
}

/// Difference from the value `length` bars ago: `x[i] - x[i - length]`.
///
/// The first `length` outputs are NA.
///
/// # Errors
///
/// Returns an error when `length` is zero.
pub fn change<'a, T, S>(source: S, length: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    if length == 0 {
        return Err(TaError::InvalidWindow(0));
    }
    Ok(to_series(source, None).change(length))
}
