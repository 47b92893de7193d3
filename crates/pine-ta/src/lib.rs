//! # pine-ta
//!
//! Pine-Script-style technical analysis indicators for the rust-pine engine.
//!
//! Every function is pure: it reads one or more broadcast-aligned inputs
//! (series, slices, or scalars) and returns a new series, with the NA
//! sentinel marking bars where the indicator is undefined. The modules follow
//! the usual indicator families:
//!
//! - **Trend**: SMA, EMA, RMA, WMA
//! - **Momentum**: RSI, ROC, change
//! - **Volatility**: true range, ATR, stdev/variance, highest/lowest and
//!   their bar offsets
//! - **Volume**: VWMA
//! - **Signal**: crossover/crossunder/cross, barssince, valuewhen
//! - **Price**: hl2, hlc3, ohlc4
//! - **Math**: nz/isna, elementwise helpers, sliding and cumulative sums
//!
//! # Example
//!
//! ```
//! use pine_ta::prelude::*;
//!
//! let close = [44.0, 44.3, 44.1, 43.6, 44.3, 44.8, 45.1];
//! let fast = sma(&close, 2).unwrap();
//! let slow = sma(&close, 5).unwrap();
//!
//! let entries = crossover(&fast, &slow).unwrap();
//! let since: Series<f64> = barssince(&entries);
//! assert_eq!(since.len(), close.len());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod math;
pub mod momentum;
pub mod price;
pub mod signal;
pub mod trend;
pub mod volatility;
pub mod volume;

pub mod prelude;

pub use prelude::*;
