//! Raster (PNG) rendering backend built on plotters.
//!
//! Bars are drawn as unit-width rectangles on an ordinal x axis whose tick
//! labels carry the bin-edge values; the cumulative distribution is a step
//! polyline.

use plotters::prelude::*;
use plotters::style::Color as PlottersColor;
use std::path::Path;

use crate::chart::{ChartKind, Figure};
use crate::error::{DistplotError, Result};
use crate::gradient::Color;

/// Rendered image dimensions in pixels
const WIDTH: u32 = 900;
const HEIGHT: u32 = 300;

/// Outline color for histogram bars
const BAR_OUTLINE: RGBColor = RGBColor(0x5f, 0x5b, 0x5b);

fn render_error<E: std::fmt::Display>(e: E) -> DistplotError {
    DistplotError::Render {
        message: e.to_string(),
    }
}

fn to_rgb(hex: &str) -> Result<RGBColor> {
    let color = Color::from_hex(hex)?;
    Ok(RGBColor(color.r, color.g, color.b))
}

/// Draw the figure and write it to `path` as a PNG
pub fn write_png(figure: &Figure, path: &Path) -> Result<()> {
    let style = figure.style();
    let data_color = to_rgb(&style.data_color)?;
    let text_color = to_rgb(&style.text_color)?;
    let labels = figure.edge_labels();
    let slots = figure.counts().len() as i32;

    // Leave a little headroom above the tallest bar; the cumulative trace
    // always tops out at 100 percent
    let y_max = match figure.kind() {
        ChartKind::Histogram => {
            figure.counts().iter().copied().max().unwrap_or(0).max(1) as f64 * 1.05
        }
        ChartKind::CumulativeDistribution => 105.0,
    };

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            &style.title,
            (style.text_font_family.as_str(), style.text_font_size)
                .into_font()
                .color(&text_color),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..slots, 0.0..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(style.x_axis_label.as_str())
        .y_desc(style.y_axis_label.as_str())
        .axis_desc_style(
            (style.text_font_family.as_str(), 14)
                .into_font()
                .color(&text_color),
        )
        .label_style(
            (style.text_font_family.as_str(), 12)
                .into_font()
                .color(&text_color),
        )
        .x_labels(labels.len())
        .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
        .draw()
        .map_err(render_error)?;

    match figure.kind() {
        ChartKind::Histogram => {
            chart
                .draw_series(figure.counts().iter().enumerate().map(|(i, &count)| {
                    Rectangle::new(
                        [(i as i32, 0.0), (i as i32 + 1, count as f64)],
                        data_color.filled(),
                    )
                }))
                .map_err(render_error)?;
            chart
                .draw_series(figure.counts().iter().enumerate().map(|(i, &count)| {
                    Rectangle::new(
                        [(i as i32, 0.0), (i as i32 + 1, count as f64)],
                        BAR_OUTLINE.stroke_width(1),
                    )
                }))
                .map_err(render_error)?;
        }
        ChartKind::CumulativeDistribution => {
            let series = figure.cumulative_percentages();
            let mut points = Vec::with_capacity(series.len() * 2);
            points.push((0, series[0]));
            for (i, &y) in series.iter().enumerate().skip(1) {
                points.push((i as i32, series[i - 1]));
                points.push((i as i32, y));
            }
            chart
                .draw_series(std::iter::once(PathElement::new(
                    points,
                    data_color.stroke_width(2),
                )))
                .map_err(render_error)?;
        }
    }

    root.present().map_err(render_error)?;
    Ok(())
}
