//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types and functions from pine-core.
//!
//! # Example
//!
//! ```rust
//! use pine_core::prelude::*;
//!
//! let series: Series<f64> = Series::from_vec(vec![1.0, 2.0, 3.0]);
//! assert_eq!(series.len(), 3);
//! ```

// Core types
pub use crate::num::PineFloat;
pub use crate::series::{to_series, Series, SeriesInput};

// Error types
pub use crate::error::{Result, TaError};

// Engine functions
pub use crate::rolling::{
    rolling_apply, rolling_apply_with, rolling_max, rolling_max_offset, rolling_mean, rolling_min,
    rolling_min_offset, rolling_std, rolling_sum, rolling_var, rolling_wma,
};
pub use crate::scan::{bars_since, value_when};
pub use crate::smooth::{ema, rma};
