//! Trimming of empty leading and trailing histogram bins.

use crate::error::{DistplotError, Result};

/// Drop all-zero bins from both ends of a histogram/edge pair.
///
/// `bin_edges` must hold exactly one more entry than `counts`. Both
/// sequences are sliced with the same offsets: from the first nonzero
/// count, up to the end minus the number of trailing zero counts. When the
/// last count is nonzero the sequences are kept through the end.
///
/// An all-zero histogram is rejected with `EmptyHistogram`.
pub fn trim_zero_bins(counts: &[u64], bin_edges: &[f64]) -> Result<(Vec<u64>, Vec<f64>)> {
    if bin_edges.len() != counts.len() + 1 {
        return Err(DistplotError::InvalidRange {
            message: format!(
                "Expected one more bin edge than count, got {} counts and {} edges",
                counts.len(),
                bin_edges.len()
            ),
        });
    }

    let first = counts
        .iter()
        .position(|&c| c > 0)
        .ok_or_else(|| DistplotError::EmptyHistogram {
            message: "All histogram bins are zero".to_string(),
        })?;

    // Trailing zeros counted from the end; zero means keep through the end
    let last = counts
        .iter()
        .rev()
        .position(|&c| c > 0)
        .unwrap_or(counts.len());

    let trimmed_counts = counts[first..counts.len() - last].to_vec();
    let trimmed_edges = bin_edges[first..bin_edges.len() - last].to_vec();

    Ok((trimmed_counts, trimmed_edges))
}
