//! Sequential scan engine.
//!
//! Causal, state-carrying scans over a condition mask: the one place in the
//! engine where per-bar state genuinely accumulates. Each scan is an explicit
//! left-to-right fold whose carried state is a single value (a counter, or a
//! capture history) rather than anything implicit.

use crate::error::{Result, TaError};
use crate::num::PineFloat;
use crate::series::Series;

/// Number of bars since the condition was last true.
///
/// The carried state is one optional counter: reset to 0 on a true bar,
/// incremented on a false bar, and absent (NA output) until the first true
/// bar has been observed.
///
/// # Example
///
/// ```rust
/// use pine_core::scan::bars_since;
///
/// let out = bars_since::<f64>(&[false, true, false, false, true]);
/// assert!(out[0].is_nan());
/// assert_eq!(out.as_slice()[1..], [0.0, 1.0, 2.0, 0.0]);
/// ```
#[must_use]
pub fn bars_since<T: PineFloat>(condition: &[bool]) -> Series<T> {
    let mut out = Vec::with_capacity(condition.len());
    let mut count: Option<usize> = None;

    for &hit in condition {
        count = if hit { Some(0) } else { count.map(|c| c + 1) };
        out.push(match count {
            Some(c) => <T as PineFloat>::from_usize(c),
            None => T::NAN,
        });
    }
    Series::from_vec(out)
}

/// Value of `source` at the n-th most recent bar where the condition was true.
///
/// The carried state is an append-only history of captured values.
/// `occurrence = 0` selects the most recent capture at or before the current
/// bar; until `occurrence + 1` captures exist the output is NA.
///
/// # Errors
///
/// Returns [`TaError::BroadcastMismatch`] when the condition and source
/// lengths differ.
pub fn value_when<T: PineFloat>(
    condition: &[bool],
    source: &[T],
    occurrence: usize,
) -> Result<Series<T>> {
    if condition.len() != source.len() {
        return Err(TaError::BroadcastMismatch {
            expected: condition.len(),
            actual: source.len(),
        });
    }

    let mut out = Vec::with_capacity(condition.len());
    let mut captures: Vec<T> = Vec::new();

    for (i, &hit) in condition.iter().enumerate() {
        if hit {
            captures.push(source[i]);
        }
        if captures.len() > occurrence {
            out.push(captures[captures.len() - 1 - occurrence]);
        } else {
            out.push(T::NAN);
        }
    }
    Ok(Series::from_vec(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_since_na_until_first_true() {
        let out = bars_since::<f64>(&[false, false, true, false, false, true]);

        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_eq!(out[2], 0.0);
        assert_eq!(out[3], 1.0);
        assert_eq!(out[4], 2.0);
        assert_eq!(out[5], 0.0);
    }

    #[test]
    fn test_bars_since_all_false() {
        let out = bars_since::<f64>(&[false, false, false]);
        assert_eq!(out.na_count(), 3);
    }

    #[test]
    fn test_bars_since_empty() {
        let out = bars_since::<f64>(&[]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_value_when_most_recent() {
        let cond = [false, true, false, true, false];
        let src: [f64; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];
        let out = value_when(&cond, &src, 0).unwrap();

        assert!(out[0].is_nan());
        assert_eq!(out[1], 20.0);
        assert_eq!(out[2], 20.0);
        assert_eq!(out[3], 40.0);
        assert_eq!(out[4], 40.0);
    }

    #[test]
    fn test_value_when_older_occurrence() {
        let cond = [false, true, false, true, false];
        let src: [f64; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];
        let out = value_when(&cond, &src, 1).unwrap();

        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert!(out[2].is_nan());
        assert_eq!(out[3], 20.0);
        assert_eq!(out[4], 20.0);
    }

    #[test]
    fn test_value_when_captures_na_source() {
        // A capture at an NA source bar stores NA; it still counts as a
        // capture for the occurrence bookkeeping.
        let cond = [true, false, true];
        let src = [f64::NAN, 2.0, 3.0];
        let out = value_when(&cond, &src, 0).unwrap();

        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert_eq!(out[2], 3.0);
    }

    #[test]
    fn test_value_when_length_mismatch() {
        let cond = [true, false];
        let src = [1.0];
        assert!(matches!(
            value_when(&cond, &src, 0),
            Err(TaError::BroadcastMismatch { .. })
        ));
    }
}
