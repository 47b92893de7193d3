//! Prelude module for convenient imports.
//!
//! Re-exports every indicator function plus the core types they operate on.

// Core types
pub use pine_core::{to_series, PineFloat, Result, Series, SeriesInput, TaError};

// Indicator surface
pub use crate::math::{
    abs, avg, ceil, cum, floor, isna, max, min, nz, pow, round, sqrt, sum,
};
pub use crate::momentum::{change, roc, rsi};
pub use crate::price::{hl2, hlc3, ohlc4};
pub use crate::signal::{barssince, cross, crossover, crossunder, valuewhen};
pub use crate::trend::{ema, rma, sma, wma};
pub use crate::volatility::{
    atr, highest, highestbars, lowest, lowestbars, stdev, true_range, variance,
};
pub use crate::volume::vwma;
