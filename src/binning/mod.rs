//! Logarithmic binning for distribution charts.
//!
//! This module provides decade-aligned bin-edge construction and helpers
//! for trimming empty bins from a histogram.

pub mod log_scale;
pub mod trim;

pub use log_scale::{decade_bound, log_bins, DecadeBound};
pub use trim::trim_zero_bins;
