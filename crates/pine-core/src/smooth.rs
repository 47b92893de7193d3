//! Recursive smoothing engine.
//!
//! Exponential moving averages computed by the first-order recurrence
//! `y[i] = alpha * x[i] + (1 - alpha) * y[i-1]`, seeded with the arithmetic
//! mean of the first `length` valid samples. Both the simple EMA
//! (`alpha = 2 / (length + 1)`) and Wilder's RMA (`alpha = 1 / length`) share
//! the same routine.
//!
//! NA policy: an NA input emits NA and leaves the carried state untouched.
//! During warm-up the seed accumulation pauses; once seeded, the recurrence
//! holds its previous value and resumes from it at the next valid sample. NA
//! is never propagated forever.

use crate::error::{Result, TaError};
use crate::num::PineFloat;
use crate::series::Series;

/// Exponential moving average with `alpha = 2 / (length + 1)`.
///
/// The first `length - 1` valid positions emit NA; the seed at the
/// `length`-th valid sample is the plain mean of the samples seen so far,
/// after which the recurrence drives all subsequent outputs.
///
/// # Errors
///
/// Returns [`TaError::InvalidWindow`] when `length` is zero.
///
/// # Example
///
/// ```rust
/// use pine_core::smooth::ema;
///
/// let result = ema(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 2.0); // seed: mean of the first three samples
/// assert_eq!(result[3], 3.0); // alpha = 1/2
/// assert_eq!(result[4], 4.0);
/// ```
pub fn ema<T: PineFloat>(data: &[T], length: usize) -> Result<Series<T>> {
    if length == 0 {
        return Err(TaError::InvalidWindow(0));
    }
    let alpha = T::TWO / <T as PineFloat>::from_usize(length + 1);
    Ok(recurrence(data, length, alpha))
}

/// Wilder's smoothing (RMA) with `alpha = 1 / length`.
///
/// Same seeding and NA policy as [`ema`]. Used by RSI and ATR.
///
/// # Errors
///
/// Returns [`TaError::InvalidWindow`] when `length` is zero.
pub fn rma<T: PineFloat>(data: &[T], length: usize) -> Result<Series<T>> {
    if length == 0 {
        return Err(TaError::InvalidWindow(0));
    }
    let alpha = T::ONE / <T as PineFloat>::from_usize(length);
    Ok(recurrence(data, length, alpha))
}

fn recurrence<T: PineFloat>(data: &[T], length: usize, alpha: T) -> Series<T> {
    let beta = T::ONE - alpha;
    let mut out = Vec::with_capacity(data.len());

    // Carried state: the last smoothed value once seeded, the partial seed
    // sum before that.
    let mut state: Option<T> = None;
    let mut seed_sum = T::ZERO;
    let mut seed_count = 0usize;

    for &x in data {
        if x.is_na() {
            out.push(T::NAN);
            continue;
        }
        match state {
            Some(prev) => {
                let y = alpha * x + beta * prev;
                state = Some(y);
                out.push(y);
            }
            None => {
                seed_sum = seed_sum + x;
                seed_count += 1;
                if seed_count == length {
                    let seed = seed_sum / <T as PineFloat>::from_usize(length);
                    state = Some(seed);
                    out.push(seed);
                } else {
                    out.push(T::NAN);
                }
            }
        }
    }
    Series::from_vec(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ema_basic() {
        let data: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = ema(&data, 3).unwrap();

        assert_eq!(result.len(), 5);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_eq!(result[2], 2.0); // seed = (1+2+3)/3

        // alpha = 2/(3+1) = 0.5
        assert_eq!(result[3], 3.0); // 0.5*4 + 0.5*2
        assert_eq!(result[4], 4.0); // 0.5*5 + 0.5*3
    }

    #[test]
    fn test_rma_basic() {
        let data: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = rma(&data, 3).unwrap();

        assert!(result[1].is_nan());
        assert_eq!(result[2], 2.0); // seed

        // alpha = 1/3
        assert_relative_eq!(result[3], 8.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(result[4], 31.0 / 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_length_one_is_identity() {
        let data = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(ema(&data, 1).unwrap().as_slice(), &data);
        assert_eq!(rma(&data, 1).unwrap().as_slice(), &data);
    }

    #[test]
    fn test_zero_length_rejected() {
        let data = [1.0, 2.0];
        assert!(matches!(ema(&data, 0), Err(TaError::InvalidWindow(0))));
        assert!(matches!(rma(&data, 0), Err(TaError::InvalidWindow(0))));
    }

    #[test]
    fn test_na_during_warmup_pauses_seed() {
        let data = [1.0, f64::NAN, 2.0, 3.0, 4.0];
        let result = ema(&data, 3).unwrap();

        assert!(result[0].is_nan());
        assert!(result[1].is_nan()); // NA input
        assert!(result[2].is_nan()); // only two valid samples so far
        assert_eq!(result[3], 2.0); // seed over {1, 2, 3}

        // alpha = 0.5, recurrence resumes normally
        assert_eq!(result[4], 3.0);
    }

    #[test]
    fn test_na_after_seed_holds_state() {
        let data = [1.0, 2.0, 3.0, f64::NAN, f64::NAN, 3.0];
        let result = ema(&data, 3).unwrap();

        assert_eq!(result[2], 2.0);
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
        // Resumes from the held state 2.0, not from scratch: 0.5*3 + 0.5*2
        assert_eq!(result[5], 2.5);
    }

    #[test]
    fn test_constant_input_stays_constant() {
        let data = [7.0; 10];
        let result = rma(&data, 4).unwrap();
        for i in 3..10 {
            assert_relative_eq!(result[i], 7.0, epsilon = 1e-12);
        }
    }
}
