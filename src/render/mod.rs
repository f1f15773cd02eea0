//! Figure export to disk.
//!
//! A figure is written either as a raster PNG (plotters backend) or as a
//! CDN-linked HTML document (charming backend), selected by `ExportFormat`.

pub mod html;
pub mod raster;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::chart::Figure;
use crate::error::{DistplotError, Result};
use crate::logging::{log_error, log_export_stats, log_timed_operation};

/// The on-disk artifact format for an exported figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Rasterized image written by the plotters backend
    Png,
    /// Self-contained HTML document written by the charming backend,
    /// loading the chart runtime from a CDN
    Html,
}

impl ExportFormat {
    /// File extension for this format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Html => "html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DistplotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "html" => Ok(ExportFormat::Html),
            _ => Err(DistplotError::InvalidFormat {
                message: format!("Unknown export format: {}", s),
            }),
        }
    }
}

/// Write a figure to `<output_dir>/<name>.<ext>` and return the path.
///
/// The output directory must already exist; it is not created here.
pub fn save_figure(
    figure: &Figure,
    output_dir: &Path,
    name: &str,
    format: ExportFormat,
) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", output_dir.display()),
        )
        .into());
    }

    let path = output_dir.join(format!("{}.{}", name, format.extension()));
    debug!(
        path = %path.display(),
        kind = ?figure.kind(),
        "Exporting figure"
    );

    let result = log_timed_operation("save_figure", || match format {
        ExportFormat::Png => raster::write_png(figure, &path),
        ExportFormat::Html => html::write_html(figure, &path),
    });

    if let Err(error) = &result {
        log_error(error, "figure export");
    }
    result?;

    log_export_stats(&path, format.extension(), figure.counts().len());
    Ok(path)
}
