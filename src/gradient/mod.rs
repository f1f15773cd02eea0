//! Color gradient helpers for map and chart styling.
//!
//! This module provides hex color parsing and linear gradient interpolation.

pub mod color;
pub mod linear;

pub use color::Color;
pub use linear::{linear_gradient, Gradient};
