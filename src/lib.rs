//! # distplot
//!
//! Log-binned distribution charts and linear color gradients.
//!
//! This library provides the building blocks for distribution plots on a
//! logarithmic binning scheme: decade-aligned bin edges, zero-bin trimming,
//! linear color gradients, and export of histogram and
//! cumulative-distribution figures to PNG or HTML.
//!
//! ## Key Features
//!
//! - **Decade-aligned log bins**: Nine edges per decade spanning any
//!   power-of-ten range
//! - **Linear color gradients**: Hex-to-hex interpolation with exact
//!   endpoints, for map and chart styling
//! - **Two figure kinds**: Log-binned histogram and cumulative distribution,
//!   built as immutable value objects
//! - **Two renderer backends**: Raster PNG via plotters, CDN-linked HTML via
//!   charming
//!
//! ## Example
//!
//! ```no_run
//! use distplot::{log_bins, save_figure, ChartStyle, ExportFormat, Figure};
//!
//! # fn main() -> distplot::Result<()> {
//! let edges = log_bins(1.0, 1000.0)?;
//! let counts = vec![3; edges.len() - 1];
//!
//! let mut style = ChartStyle::default();
//! style.title = "Flow size distribution".to_string();
//!
//! let figure = Figure::histogram(counts, edges, style)?;
//! save_figure(&figure, std::path::Path::new("out"), "flows", ExportFormat::Png)?;
//! # Ok(())
//! # }
//! ```

pub mod binning;
pub mod chart;
pub mod error;
pub mod gradient;
pub mod logging;
pub mod render;

pub use binning::{decade_bound, log_bins, trim_zero_bins, DecadeBound};
pub use chart::{format_edge_label, ChartKind, ChartStyle, Figure};
pub use error::{DistplotError, Result};
pub use gradient::{linear_gradient, Color, Gradient};
pub use logging::init_tracing;
pub use render::{save_figure, ExportFormat};
