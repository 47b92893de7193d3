//! Golden data tests for pine-ta.
//!
//! Indicator outputs are compared bar-by-bar against pre-computed expected
//! vectors over one shared OHLCV fixture. NA positions in the expected data
//! are written as NaN and must match exactly.

use pine_ta::prelude::*;

// ============================================================================
// Fixture
// ============================================================================

const NA: f64 = f64::NAN;

const OPEN: [f64; 5] = [10.0, 10.5, 11.0, 10.8, 11.2];
const HIGH: [f64; 5] = [10.8, 11.2, 11.5, 11.4, 12.0];
const LOW: [f64; 5] = [9.8, 10.3, 10.7, 10.5, 11.0];
const CLOSE: [f64; 5] = [10.5, 11.0, 10.9, 11.3, 11.8];
const VOLUME: [f64; 5] = [100.0, 150.0, 120.0, 180.0, 160.0];

/// Compare a series against expected values, treating NaN as the NA marker.
fn assert_series_matches(actual: &Series<f64>, expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for i in 0..expected.len() {
        let (a, e) = (actual[i], expected[i]);
        if e.is_nan() {
            assert!(a.is_nan(), "expected NA at bar {i}, got {a}");
        } else {
            assert!(
                (a - e).abs() <= tol,
                "mismatch at bar {i}: got {a}, expected {e}"
            );
        }
    }
}

// ============================================================================
// Moving averages
// ============================================================================

#[test]
fn golden_sma() {
    let result = sma(&CLOSE, 3).unwrap();
    let expected = [NA, NA, 10.8, 11.066666666666666, 11.333333333333334];
    assert_series_matches(&result, &expected, 1e-9);
}

#[test]
fn golden_ema() {
    let result = ema(&CLOSE, 3).unwrap();
    let expected = [NA, NA, 10.8, 11.05, 11.425];
    assert_series_matches(&result, &expected, 1e-9);
}

#[test]
fn golden_rma() {
    let result = rma(&CLOSE, 3).unwrap();
    let expected = [NA, NA, 10.8, 10.966666666666667, 11.244444444444444];
    assert_series_matches(&result, &expected, 1e-9);
}

#[test]
fn golden_wma() {
    let result = wma(&CLOSE, 3).unwrap();
    let expected = [
        NA,
        NA,
        10.866666666666667,
        11.116666666666667,
        11.483333333333333,
    ];
    assert_series_matches(&result, &expected, 1e-9);
}

#[test]
fn golden_vwma() {
    let result = vwma(&CLOSE, &VOLUME, 3).unwrap();
    let expected = [
        NA,
        NA,
        10.832432432432432,
        11.093333333333334,
        11.369565217391305,
    ];
    assert_series_matches(&result, &expected, 1e-9);
}

// ============================================================================
// Volatility
// ============================================================================

#[test]
fn golden_true_range() {
    let result = true_range(&HIGH, &LOW, &CLOSE).unwrap();
    let expected = [1.0, 0.9, 0.8, 0.9, 1.0];
    assert_series_matches(&result, &expected, 1e-9);
}

#[test]
fn golden_atr() {
    let result = atr(&HIGH, &LOW, &CLOSE, 3).unwrap();
    let expected = [NA, NA, 0.9, 0.9, 0.9333333333333333];
    assert_series_matches(&result, &expected, 1e-9);
}

#[test]
fn golden_stdev_and_variance() {
    let std = stdev(&CLOSE, 3).unwrap();
    let expected_std = [NA, NA, 0.21602468994692867, 0.1699673171197595, 0.3681787005729087];
    assert_series_matches(&std, &expected_std, 1e-6);

    let var = variance(&CLOSE, 3).unwrap();
    let expected_var = [
        NA,
        NA,
        0.04666666666666667,
        0.028888888888888888,
        0.13555555555555557,
    ];
    assert_series_matches(&var, &expected_var, 1e-9);
}

#[test]
fn golden_highest_lowest() {
    let hi = highest(&HIGH, 3).unwrap();
    assert_series_matches(&hi, &[NA, NA, 11.5, 11.5, 12.0], 1e-9);

    let lo = lowest(&LOW, 3).unwrap();
    assert_series_matches(&lo, &[NA, NA, 9.8, 10.3, 10.5], 1e-9);
}

#[test]
fn golden_highestbars() {
    let result = highestbars(&HIGH, 3).unwrap();
    assert_series_matches(&result, &[NA, NA, 0.0, 1.0, 0.0], 1e-9);
}

#[test]
fn golden_lowestbars() {
    let result = lowestbars(&LOW, 3).unwrap();
    assert_series_matches(&result, &[NA, NA, 2.0, 2.0, 1.0], 1e-9);
}

// ============================================================================
// Momentum
// ============================================================================

#[test]
fn golden_rsi() {
    let result = rsi(&CLOSE, 3).unwrap();
    let expected = [NA, NA, 83.33333333333333, 91.66666666666667, 95.6989247311828];
    assert_series_matches(&result, &expected, 1e-9);
}

#[test]
fn golden_roc() {
    let result = roc(&CLOSE, 2).unwrap();
    let expected = [
        NA,
        NA,
        3.8095238095238098,
        2.727272727272727,
        8.256880733944953,
    ];
    assert_series_matches(&result, &expected, 1e-9);
}

#[test]
fn golden_change() {
    let result = change(&CLOSE, 1).unwrap();
    let expected = [NA, 0.5, -0.10000000000000053, 0.40000000000000036, 0.5];
    assert_series_matches(&result, &expected, 1e-9);
}

// ============================================================================
// Price aggregates
// ============================================================================

#[test]
fn golden_price_aggregates() {
    let m = hl2(&HIGH, &LOW).unwrap();
    assert_series_matches(&m, &[10.3, 10.75, 11.1, 10.95, 11.5], 1e-9);

    let t = hlc3(&HIGH, &LOW, &CLOSE).unwrap();
    assert_series_matches(
        &t,
        &[
            10.366666666666667,
            10.833333333333334,
            11.033333333333333,
            11.066666666666666,
            11.6,
        ],
        1e-9,
    );

    let o = ohlc4(&OPEN, &HIGH, &LOW, &CLOSE).unwrap();
    assert_series_matches(&o, &[10.275, 10.75, 11.025, 11.0, 11.5], 1e-9);
}

// ============================================================================
// Signal scans
// ============================================================================

#[test]
fn golden_barssince_and_valuewhen() {
    // Condition: bullish bar (close above open)
    let bullish: Vec<bool> = CLOSE
        .iter()
        .zip(&OPEN)
        .map(|(c, o)| c > o)
        .collect();
    assert_eq!(bullish, vec![true, true, false, true, true]);

    let since: Series<f64> = barssince(&bullish);
    assert_series_matches(&since, &[0.0, 0.0, 1.0, 0.0, 0.0], 1e-9);

    let last_close = valuewhen(&bullish, &CLOSE, 0).unwrap();
    assert_series_matches(&last_close, &[10.5, 11.0, 11.0, 11.3, 11.8], 1e-9);

    let prior_close = valuewhen(&bullish, &CLOSE, 1).unwrap();
    assert_series_matches(&prior_close, &[NA, 10.5, 10.5, 11.0, 11.3], 1e-9);
}

// ============================================================================
// Math helpers
// ============================================================================

#[test]
fn golden_sum_and_cum() {
    let s = sum(&CLOSE, 3).unwrap();
    assert_series_matches(&s, &[NA, NA, 32.4, 33.2, 34.0], 1e-9);

    let c = cum(&CLOSE);
    assert_series_matches(&c, &[10.5, 21.5, 32.4, 43.7, 55.5], 1e-9);
}
