//! Test data fixtures: styles and figures shared across integration tests.

use distplot::{log_bins, ChartStyle, Figure};

/// A styling configuration exercising every recognized option
pub fn sample_style() -> ChartStyle {
    ChartStyle {
        title: "Flow size distribution".to_string(),
        x_axis_label: "Flow size (bytes)".to_string(),
        y_axis_label: "Flows".to_string(),
        data_color: "#1f77b4".to_string(),
        text_font_family: "sans-serif".to_string(),
        text_color: "#444444".to_string(),
        text_font_size: 16,
    }
}

/// Per-bin counts matching three decades of log bins (27 bins)
pub fn sample_counts() -> Vec<u64> {
    let mut counts = vec![0u64; 27];
    for (i, count) in counts.iter_mut().enumerate() {
        // A rough bell over the middle decades, empty at both ends
        if (4..23).contains(&i) {
            *count = (12 - (i as i64 - 13).abs()).max(1) as u64;
        }
    }
    counts
}

/// A histogram figure over 1..1000 log bins
pub fn sample_histogram() -> Figure {
    let edges = log_bins(1.0, 1000.0).expect("valid decade span");
    Figure::histogram(sample_counts(), edges, sample_style()).expect("valid figure")
}

/// A cumulative-distribution figure over 1..1000 log bins
pub fn sample_cumulative() -> Figure {
    let edges = log_bins(1.0, 1000.0).expect("valid decade span");
    Figure::cumulative_distribution(sample_counts(), edges, sample_style()).expect("valid figure")
}
