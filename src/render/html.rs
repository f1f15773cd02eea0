//! HTML rendering backend built on charming (Apache ECharts).
//!
//! The exported document loads the chart runtime from a CDN, so it stays
//! small but needs a network connection to display.

use std::path::Path;

use charming::{
    component::{Axis, Title},
    element::{AxisType, ItemStyle, LineStyle, TextStyle},
    series::{Bar, Line},
    Chart, HtmlRenderer,
};

use crate::chart::{ChartKind, Figure};
use crate::error::{DistplotError, Result};

/// Rendered document dimensions in pixels
const WIDTH: u64 = 900;
const HEIGHT: u64 = 400;

fn render_error<E: std::fmt::Display>(e: E) -> DistplotError {
    DistplotError::Render {
        message: e.to_string(),
    }
}

/// Build the ECharts chart and write it to `path` as an HTML document
pub fn write_html(figure: &Figure, path: &Path) -> Result<()> {
    let style = figure.style();

    let chart = Chart::new()
        .title(
            Title::new().text(style.title.as_str()).text_style(
                TextStyle::new()
                    .font_family(style.text_font_family.as_str())
                    .font_size(f64::from(style.text_font_size))
                    .color(style.text_color.as_str()),
            ),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(figure.edge_labels())
                .name(style.x_axis_label.as_str()),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name(style.y_axis_label.as_str()));

    let chart = match figure.kind() {
        ChartKind::Histogram => chart.series(
            Bar::new()
                .data(figure.counts().iter().map(|&c| c as f64).collect::<Vec<_>>())
                .item_style(ItemStyle::new().color(style.data_color.as_str())),
        ),
        ChartKind::CumulativeDistribution => chart.series(
            Line::new()
                .data(figure.cumulative_percentages())
                .line_style(LineStyle::new().color(style.data_color.as_str()).width(2.0)),
        ),
    };

    // Render to a string first so filesystem failures surface as IO errors
    let html = HtmlRenderer::new(style.title.as_str(), WIDTH, HEIGHT)
        .render(&chart)
        .map_err(render_error)?;
    std::fs::write(path, html)?;
    Ok(())
}
