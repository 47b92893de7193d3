//! Cross-series event detection and condition scans.

use pine_core::{scan, to_series, PineFloat, Result, Series, SeriesInput, TaError};

fn aligned_pair<'a, 'b, T, A, B>(a: A, b: B) -> Result<(Series<T>, Series<T>)>
where
    T: PineFloat,
    A: Into<SeriesInput<'a, T>>,
    B: Into<SeriesInput<'b, T>>,
{
    let a = to_series(a, None);
    let b = to_series(b, Some(&a));
    if a.len() != b.len() {
        return Err(TaError::BroadcastMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok((a, b))
}

/// True where `a` crosses above `b`: `a[i] > b[i]` after `a[i-1] <= b[i-1]`.
///
/// Bar 0 is always false (the comparison against the missing prior bar
/// evaluates false), and an NA at either bar suppresses the event.
///
/// # Errors
///
/// Returns an error when the operands cannot be broadcast to one length.
///
/// # Example
///
/// ```rust
/// use pine_ta::crossover;
///
/// let fast = [1.0, 3.0, 2.0];
/// let hits = crossover(&fast, 2.0).unwrap();
/// assert_eq!(hits, vec![false, true, false]);
/// ```
pub fn crossover<'a, 'b, T, A, B>(a: A, b: B) -> Result<Vec<bool>>
where
    T: PineFloat,
    A: Into<SeriesInput<'a, T>>,
    B: Into<SeriesInput<'b, T>>,
{
    let (a, b) = aligned_pair(a, b)?;
    let (x, y) = (a.as_slice(), b.as_slice());

    let mut out = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        out.push(i > 0 && x[i] > y[i] && x[i - 1] <= y[i - 1]);
    }
    Ok(out)
}

/// True where `a` crosses below `b`: `a[i] < b[i]` after `a[i-1] >= b[i-1]`.
///
/// Bar 0 is always false; NA suppresses the event.
///
/// # Errors
///
/// Returns an error when the operands cannot be broadcast to one length.
pub fn crossunder<'a, 'b, T, A, B>(a: A, b: B) -> Result<Vec<bool>>
where
    T: PineFloat,
    A: Into<SeriesInput<'a, T>>,
    B: Into<SeriesInput<'b, T>>,
{
    let (a, b) = aligned_pair(a, b)?;
    let (x, y) = (a.as_slice(), b.as_slice());

    let mut out = Vec::with_capacity(x.len());
    for i in 0..x.len() {
        out.push(i > 0 && x[i] < y[i] && x[i - 1] >= y[i - 1]);
    }
    Ok(out)
}

/// True where `a` crosses `b` in either direction.
///
/// # Errors
///
/// Returns an error when the operands cannot be broadcast to one length.
pub fn cross<'a, 'b, T, A, B>(a: A, b: B) -> Result<Vec<bool>>
where
    T: PineFloat,
    A: Into<SeriesInput<'a, T>>,
    B: Into<SeriesInput<'b, T>>,
{
    let a = a.into();
    let b = b.into();
    let over = crossover(a, b)?;
    let under = crossunder(a, b)?;
    Ok(over.iter().zip(&under).map(|(&o, &u)| o || u).collect())
}

/// Number of bars since the condition was last true; NA until the first true
/// bar.
#[must_use]
pub fn barssince<T: PineFloat>(condition: &[bool]) -> Series<T> {
    scan::bars_since(condition)
}

/// Value of `source` at the `occurrence`-th most recent bar where the
/// condition was true (0 = most recent); NA until enough captures exist.
///
/// # Errors
///
/// Returns an error when the condition and source lengths differ.
pub fn valuewhen<'a, T, S>(condition: &[bool], source: S, occurrence: usize) -> Result<Series<T>>
where
    T: PineFloat,
    S: Into<SeriesInput<'a, T>>,
{
    let source = match source.into() {
        SeriesInput::Scalar(c) => Series::filled(c, condition.len()),
        other => to_series(other, None),
    };
    scan::value_when(condition, source.as_slice(), occurrence)
}
