use crate::PlotBytes;
use crate::options::{MAX_PLOT_DIMENSION, MIN_PLOT_DIMENSION, PlotOptions, SpeedupPlotOptions};
use crate::render::encode_png;
use crate::style::dash_segments;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use speedup_estimates::{Chart, Series};
use std::ops::Range;
use tracing::warn;

/// Height of one legend row in pixels
const LEGEND_ROW_HEIGHT: i32 = 20;

/// Width of the line sample drawn in front of each legend label
const LEGEND_SAMPLE_WIDTH: i32 = 36;

/// Render a speedup chart to PNG bytes using the Plotters backend
///
/// This function handles the complete rendering pipeline:
/// 1. Sets up a log-x Plotters chart with axes and mesh
/// 2. Draws markers and dash-patterned lines for every series
/// 3. Draws the legend to the right of the chart
/// 4. Encodes the RGB buffer to PNG
pub fn render_speedup_chart(chart: &Chart, options: &SpeedupPlotOptions) -> Result<PlotBytes> {
    let base = options.base();
    let width = base.width;
    let height = base.height;

    let lines = plottable_series(chart);
    let (x_range, y_range) = axis_ranges(lines.iter().flat_map(|(_, points)| points.iter()));

    let mut pixel_buffer = vec![255; rgb_buffer_len(width, height)?];
    {
        let root = BitMapBackend::with_buffer(&mut pixel_buffer, (width, height))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow::anyhow!("failed to fill plot background: {e:?}"))?;

        let legend_width = base.legend_area_size.min(width / 2);
        let (plot_area, legend_area) = root.split_horizontally(width - legend_width);

        let mut cc = ChartBuilder::on(&plot_area)
            .margin(base.margin)
            .x_label_area_size(base.x_label_area_size)
            .y_label_area_size(base.y_label_area_size)
            .build_cartesian_2d(x_range.log_scale(), y_range)
            .map_err(|e| anyhow::anyhow!("failed to build chart: {e:?}"))?;

        cc.configure_mesh()
            .x_desc(chart.layout.x_label.as_str())
            .y_desc(options.y_label.as_str())
            .draw()
            .map_err(|e| anyhow::anyhow!("failed to draw plot mesh: {e:?}"))?;

        for (series, points) in &lines {
            let color = options.color(series.color_index);

            if let Some(pattern) = options.line_style(series.style_index).pattern() {
                let pixels: Vec<(i32, i32)> = points.iter().map(|p| cc.backend_coord(p)).collect();
                for segment in dash_segments(&pixels, pattern) {
                    plot_area
                        .draw(&PathElement::new(
                            segment,
                            color.stroke_width(options.line_width),
                        ))
                        .map_err(|e| anyhow::anyhow!("failed to draw series line: {e:?}"))?;
                }
            }

            cc.draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, options.marker_size, color.filled())),
            )
            .map_err(|e| anyhow::anyhow!("failed to draw series markers: {e:?}"))?;
        }

        draw_legend(&legend_area, chart, options)?;

        root.present()
            .map_err(|e| anyhow::anyhow!("failed to present plotters buffer: {e:?}"))?;
    }

    encode_png(pixel_buffer, width, height)
}

/// Bytes needed for a `width` x `height` RGB image
fn rgb_buffer_len(width: u32, height: u32) -> Result<usize> {
    let allowed = MIN_PLOT_DIMENSION..=MAX_PLOT_DIMENSION;
    if !allowed.contains(&width) || !allowed.contains(&height) {
        anyhow::bail!(
            "plot size {width}x{height} is outside {MIN_PLOT_DIMENSION}..={MAX_PLOT_DIMENSION} pixels per side"
        );
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| anyhow::anyhow!("plot size {width}x{height} is too large"))
}

/// Series with the points a log axis can show; non-positive x values are dropped
fn plottable_series(chart: &Chart) -> Vec<(&Series, Vec<(f64, f64)>)> {
    chart
        .series
        .iter()
        .map(|series| {
            let points: Vec<(f64, f64)> = series
                .points
                .iter()
                .copied()
                .filter(|&(x, _)| x > 0.0)
                .collect();
            if points.len() < series.points.len() {
                warn!(
                    "{}: skipping {} point(s) of '{}' with non-positive x on the log axis",
                    chart.layout.file_name,
                    series.points.len() - points.len(),
                    series.label.trim()
                );
            }
            (series, points)
        })
        .collect()
}

/// Data ranges for the log x axis and the linear speedup axis
fn axis_ranges<'a>(points: impl Iterator<Item = &'a (f64, f64)>) -> (Range<f64>, Range<f64>) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        if x.is_finite() && x > 0.0 {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
        }
        if y.is_finite() {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    let x_range = if x_min > x_max {
        1.0..10.0
    } else if x_min == x_max {
        (x_min / 2.0)..(x_max * 2.0)
    } else {
        (x_min / 1.2)..(x_max * 1.2)
    };

    let y_range = if y_min > y_max {
        0.0..1.0
    } else if y_min == y_max {
        (y_min - 0.5)..(y_max + 0.5)
    } else {
        let pad = (y_max - y_min) * 0.05;
        (y_min - pad)..(y_max + pad)
    };

    (x_range, y_range)
}

fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &Chart,
    options: &SpeedupPlotOptions,
) -> Result<()> {
    let title_style = ("sans-serif", 16).into_font().color(&BLACK);
    area.draw(&Text::new(
        chart.layout.legend_title.clone(),
        (8, 12),
        title_style,
    ))
    .map_err(|e| anyhow::anyhow!("failed to draw legend title: {e:?}"))?;

    let label_style = ("monospace", 14).into_font().color(&BLACK);
    for (row, series) in chart.series.iter().enumerate() {
        let y = 44 + row as i32 * LEGEND_ROW_HEIGHT;
        let color = options.color(series.color_index);
        let (x0, x1) = (8, 8 + LEGEND_SAMPLE_WIDTH);

        if let Some(pattern) = options.line_style(series.style_index).pattern() {
            for segment in dash_segments(&[(x0, y), (x1, y)], pattern) {
                area.draw(&PathElement::new(
                    segment,
                    color.stroke_width(options.line_width),
                ))
                .map_err(|e| anyhow::anyhow!("failed to draw legend sample: {e:?}"))?;
            }
        }
        area.draw(&Circle::new(
            ((x0 + x1) / 2, y),
            options.marker_size,
            color.filled(),
        ))
        .map_err(|e| anyhow::anyhow!("failed to draw legend marker: {e:?}"))?;

        area.draw(&Text::new(
            series.label.clone(),
            (x1 + 8, y - 7),
            label_style.clone(),
        ))
        .map_err(|e| anyhow::anyhow!("failed to draw legend label: {e:?}"))?;
    }

    Ok(())
}
