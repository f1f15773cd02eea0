//! Figure value objects for histogram and cumulative-distribution charts.

use super::style::ChartStyle;
use crate::error::{DistplotError, Result};

/// The kind of distribution chart a figure describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Per-bin counts drawn as bars
    Histogram,
    /// Running percentage of the total drawn as a step trace
    CumulativeDistribution,
}

/// An immutable description of a chart: counts, bin edges, and styling.
///
/// The x axis is ordinal: bars occupy unit-width slots and tick labels show
/// the bin-edge values, which keeps log-spaced bins visually even.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    kind: ChartKind,
    counts: Vec<u64>,
    bin_edges: Vec<f64>,
    style: ChartStyle,
}

impl Figure {
    /// Build a histogram figure from per-bin counts and their edges
    pub fn histogram(counts: Vec<u64>, bin_edges: Vec<f64>, style: ChartStyle) -> Result<Self> {
        Self::new(ChartKind::Histogram, counts, bin_edges, style)
    }

    /// Build a cumulative-distribution figure from per-bin counts and their edges
    pub fn cumulative_distribution(
        counts: Vec<u64>,
        bin_edges: Vec<f64>,
        style: ChartStyle,
    ) -> Result<Self> {
        if counts.iter().all(|&c| c == 0) {
            return Err(DistplotError::EmptyHistogram {
                message: "Cumulative distribution needs at least one nonzero count".to_string(),
            });
        }
        Self::new(ChartKind::CumulativeDistribution, counts, bin_edges, style)
    }

    fn new(
        kind: ChartKind,
        counts: Vec<u64>,
        bin_edges: Vec<f64>,
        style: ChartStyle,
    ) -> Result<Self> {
        if counts.is_empty() {
            return Err(DistplotError::InvalidRange {
                message: "Figure needs at least one bin".to_string(),
            });
        }
        if bin_edges.len() != counts.len() + 1 {
            return Err(DistplotError::InvalidRange {
                message: format!(
                    "Expected one more bin edge than count, got {} counts and {} edges",
                    counts.len(),
                    bin_edges.len()
                ),
            });
        }
        style.validate()?;

        Ok(Self {
            kind,
            counts,
            bin_edges,
            style,
        })
    }

    /// The chart kind
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Per-bin counts
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Bin edges, one more entry than counts
    pub fn bin_edges(&self) -> &[f64] {
        &self.bin_edges
    }

    /// Styling options
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Tick labels for the ordinal x axis, one per bin edge
    pub fn edge_labels(&self) -> Vec<String> {
        self.bin_edges.iter().map(|&e| format_edge_label(e)).collect()
    }

    /// Cumulative percentage series: 0 followed by the running share of the
    /// total per bin, one value per bin edge
    pub fn cumulative_percentages(&self) -> Vec<f64> {
        let total: u64 = self.counts.iter().sum();
        if total == 0 {
            // Only reachable through histogram figures; the cumulative
            // constructor rejects all-zero counts
            return vec![0.0; self.counts.len() + 1];
        }

        let mut series = Vec::with_capacity(self.counts.len() + 1);
        series.push(0.0);

        let mut running = 0u64;
        for &count in &self.counts {
            running += count;
            series.push(running as f64 / total as f64 * 100.0);
        }
        series
    }
}

/// Format a bin-edge value for an axis tick label.
///
/// Sub-unit edges round to one decimal; everything else renders as an
/// integer with thousands separators.
pub fn format_edge_label(value: f64) -> String {
    if value < 1.0 {
        format!("{:.1}", value)
    } else {
        group_thousands(value as u64)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> ChartStyle {
        ChartStyle::default()
    }

    #[test]
    fn test_histogram_construction() {
        let figure = Figure::histogram(vec![1, 2, 3], vec![1.0, 2.0, 3.0, 4.0], style()).unwrap();
        assert_eq!(figure.kind(), ChartKind::Histogram);
        assert_eq!(figure.counts(), &[1, 2, 3]);
        assert_eq!(figure.bin_edges(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        assert!(Figure::histogram(vec![1, 2], vec![1.0, 2.0], style()).is_err());
        assert!(Figure::histogram(vec![], vec![1.0], style()).is_err());
    }

    #[test]
    fn test_rejects_invalid_style() {
        let mut bad = style();
        bad.data_color = "red".to_string();
        assert!(Figure::histogram(vec![1], vec![1.0, 2.0], bad).is_err());
    }

    #[test]
    fn test_cumulative_rejects_all_zero() {
        let err =
            Figure::cumulative_distribution(vec![0, 0], vec![1.0, 2.0, 3.0], style()).unwrap_err();
        assert!(matches!(err, DistplotError::EmptyHistogram { .. }));
    }

    #[test]
    fn test_cumulative_percentages() {
        let figure =
            Figure::cumulative_distribution(vec![1, 1, 2], vec![1.0, 2.0, 3.0, 4.0], style())
                .unwrap();
        assert_eq!(figure.cumulative_percentages(), vec![0.0, 25.0, 50.0, 100.0]);
    }

    #[test]
    fn test_format_edge_label() {
        assert_eq!(format_edge_label(0.25), "0.2");
        assert_eq!(format_edge_label(0.5), "0.5");
        assert_eq!(format_edge_label(1.0), "1");
        assert_eq!(format_edge_label(90.0), "90");
        assert_eq!(format_edge_label(1500.0), "1,500");
        assert_eq!(format_edge_label(1_000_000.0), "1,000,000");
    }

    #[test]
    fn test_edge_labels_align_with_edges() {
        let figure = Figure::histogram(
            vec![1, 2],
            vec![900.0, 1000.0, 2000.0],
            style(),
        )
        .unwrap();
        assert_eq!(figure.edge_labels(), vec!["900", "1,000", "2,000"]);
    }
}
