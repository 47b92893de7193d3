//! # pine-core
//!
//! Core primitives for the rust-pine technical analysis engine.
//!
//! This crate provides the foundational abstractions the indicator surface is
//! built from:
//!
//! - [`PineFloat`] - Trait for numeric types (f32/f64), including the NA
//!   sentinel rules
//! - [`Series`] - Bar-aligned series container with broadcasting and causal
//!   lookback
//! - [`rolling`] - Windowed aggregation engine (generic reducers plus the
//!   concrete ones)
//! - [`smooth`] - Recursive exponential smoothing engine (EMA, Wilder RMA)
//! - [`scan`] - Sequential state-carrying scans (bars-since, value-when)
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use pine_core::prelude::*;
//!
//! let close: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8, 102.3]);
//! let mean = rolling_mean(close.as_slice(), 3).unwrap();
//!
//! assert!(mean[1].is_nan());
//! assert!(!mean[2].is_nan());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod num;
pub mod prelude;
pub mod rolling;
pub mod scan;
pub mod series;
pub mod smooth;

// Re-export core types at crate root
pub use error::{Result, TaError};
pub use num::PineFloat;
pub use series::{to_series, Series, SeriesInput};
