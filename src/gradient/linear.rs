//! Linear color gradient interpolation.
//!
//! Produces evenly spaced colors between two hex endpoints, with the
//! endpoints reproduced exactly.

use super::color::Color;
use crate::error::{DistplotError, Result};

/// An ordered sequence of interpolated colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    colors: Vec<Color>,
}

impl Gradient {
    /// Number of colors in the gradient
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the gradient holds no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The interpolated colors in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Hex strings for all colors, index-aligned with the channel views
    pub fn hex_values(&self) -> Vec<String> {
        self.colors.iter().map(Color::to_hex).collect()
    }

    /// Red channel values for all colors
    pub fn reds(&self) -> Vec<u8> {
        self.colors.iter().map(|c| c.r).collect()
    }

    /// Green channel values for all colors
    pub fn greens(&self) -> Vec<u8> {
        self.colors.iter().map(|c| c.g).collect()
    }

    /// Blue channel values for all colors
    pub fn blues(&self) -> Vec<u8> {
        self.colors.iter().map(|c| c.b).collect()
    }
}

/// Build a gradient of `n` colors between two hex endpoints.
///
/// Each channel is interpolated independently with truncating integer
/// conversion, so index 0 is exactly the start color and index n-1 is
/// exactly the finish color. Requires n >= 2.
pub fn linear_gradient(start_hex: &str, finish_hex: &str, n: usize) -> Result<Gradient> {
    if n < 2 {
        return Err(DistplotError::InvalidRange {
            message: format!("Gradient needs at least 2 colors, got {}", n),
        });
    }

    let start = Color::from_hex(start_hex)?;
    let finish = Color::from_hex(finish_hex)?;

    let lerp = |s: u8, f: u8, frac: f64| -> u8 {
        // Truncation, not rounding; the interpolant stays within [s, f]
        (f64::from(s) + frac * (f64::from(f) - f64::from(s))) as u8
    };

    let mut colors = Vec::with_capacity(n);
    for t in 0..n {
        let frac = t as f64 / (n - 1) as f64;
        colors.push(Color::new(
            lerp(start.r, finish.r, frac),
            lerp(start.g, finish.g, frac),
            lerp(start.b, finish.b, frac),
        ));
    }

    Ok(Gradient { colors })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_color_gradient_is_exact_endpoints() {
        let gradient = linear_gradient("#000000", "#ffffff", 2).unwrap();
        assert_eq!(gradient.colors(), &[Color::new(0, 0, 0), Color::new(255, 255, 255)]);
    }

    #[test]
    fn test_endpoints_are_exact_for_any_length() {
        for n in [2, 3, 7, 100] {
            let gradient = linear_gradient("#1f77b4", "#d62728", n).unwrap();
            assert_eq!(gradient.len(), n);
            assert_eq!(gradient.colors()[0], Color::from_hex("#1f77b4").unwrap());
            assert_eq!(gradient.colors()[n - 1], Color::from_hex("#d62728").unwrap());
        }
    }

    #[test]
    fn test_identical_endpoints_repeat() {
        let gradient = linear_gradient("#5f5b5b", "#5f5b5b", 5).unwrap();
        assert_eq!(gradient.colors(), vec![Color::from_hex("#5f5b5b").unwrap(); 5].as_slice());
    }

    #[test]
    fn test_midpoint_truncates() {
        // 0 -> 255 over 3 samples: midpoint is 127.5, truncated to 127
        let gradient = linear_gradient("#000000", "#ffffff", 3).unwrap();
        assert_eq!(gradient.colors()[1], Color::new(127, 127, 127));
    }

    #[test]
    fn test_parallel_views_are_index_aligned() {
        let gradient = linear_gradient("#000000", "#ffffff", 4).unwrap();
        let hex = gradient.hex_values();
        let (r, g, b) = (gradient.reds(), gradient.greens(), gradient.blues());
        for i in 0..gradient.len() {
            assert_eq!(hex[i], Color::new(r[i], g[i], b[i]).to_hex());
        }
    }

    #[test]
    fn test_rejects_degenerate_length() {
        assert!(linear_gradient("#000000", "#ffffff", 0).is_err());
        assert!(linear_gradient("#000000", "#ffffff", 1).is_err());
    }
}
