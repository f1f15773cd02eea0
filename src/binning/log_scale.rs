//! Decade bounds and logarithmic bin-edge construction.
//!
//! A decade is the interval [10^k, 10^(k+1)); log-binned charts span whole
//! decades with nine edges per decade.

use crate::error::{DistplotError, Result};

/// Which power-of-ten bound of a value's decade to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecadeBound {
    /// Nearest power of ten at or below the value
    Min,
    /// Nearest power of ten at or above the value
    Max,
}

/// Compute the power-of-ten bound enclosing `value` from below or above.
///
/// For value > 1 this satisfies `decade_bound(v, Min) <= v <= decade_bound(v, Max)`.
/// Values at or below 1 are outside the contract and rejected.
pub fn decade_bound(value: f64, bound: DecadeBound) -> Result<f64> {
    if !value.is_finite() || value <= 1.0 {
        return Err(DistplotError::InvalidRange {
            message: format!("Decade bound is only defined for values > 1, got {}", value),
        });
    }

    // Count divisions by 10 until the quotient drops to 1 or below
    let mut quotient = value;
    let mut k = 0;
    while quotient > 1.0 {
        k += 1;
        quotient /= 10.0;
    }

    match bound {
        DecadeBound::Min => Ok(10f64.powi(k - 1)),
        DecadeBound::Max => Ok(10f64.powi(k)),
    }
}

/// Build the ordered bin edges spanning the decades from `start` to `stop`.
///
/// Requires `start > 0` and `stop == start * 10^d` for a positive integer d.
/// Each decade contributes the nine edges {1m, 2m, ..., 9m} for its
/// multiplier m, and one final edge equal to `stop` closes the last decade,
/// for 9d + 1 edges in total.
pub fn log_bins(start: f64, stop: f64) -> Result<Vec<f64>> {
    if !start.is_finite() || !stop.is_finite() || start <= 0.0 || stop <= start {
        return Err(DistplotError::InvalidRange {
            message: format!("Expected 0 < start < stop, got start = {}, stop = {}", start, stop),
        });
    }

    // Count the decades by dividing stop back down to start
    let mut quotient = stop;
    let mut decades = 0u32;
    while quotient > start {
        quotient /= 10.0;
        decades += 1;
    }
    if quotient != start {
        return Err(DistplotError::InvalidRange {
            message: format!(
                "stop must be start times a positive power of ten, got start = {}, stop = {}",
                start, stop
            ),
        });
    }

    let mut edges = Vec::with_capacity(9 * decades as usize + 1);
    let mut multiplier = start;
    for _ in 0..decades {
        for x in 1..=9 {
            edges.push(f64::from(x) * multiplier);
        }
        multiplier *= 10.0;
    }
    edges.push(stop);

    Ok(edges)
}
