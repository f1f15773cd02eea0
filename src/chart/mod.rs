//! Figure construction for distribution charts.
//!
//! Figures are immutable value objects: bin counts, bin edges, and a
//! styling configuration captured once at construction time.

pub mod figure;
pub mod style;

pub use figure::{format_edge_label, ChartKind, Figure};
pub use style::ChartStyle;
