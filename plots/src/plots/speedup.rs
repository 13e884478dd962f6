use crate::PlotBytes;
use crate::options::SpeedupPlotOptions;
use crate::plots::traits::Plot;
use crate::render::plotters_backend::render_speedup_chart;
use anyhow::Result;
use speedup_estimates::Chart;
use tracing::{debug, warn};

/// Speedup chart implementation
///
/// Draws one marker-and-line series per colour/style combination of a
/// [`Chart`] on a log-scaled x axis, with the legend to the right.
///
/// # Example
///
/// ```rust,no_run
/// use speedup_plots::{Plot, SpeedupPlot, SpeedupPlotOptions};
/// use speedup_estimates::{Chart, ChartLayout, RatioConfig, compute_ratios, load};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = compute_ratios(&load("target/criterion")?, &RatioConfig::default())?;
/// let chart = Chart::build(&table, &ChartLayout::by_string_count());
/// let png = SpeedupPlot::new().render(&chart, &SpeedupPlotOptions::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SpeedupPlot;

impl SpeedupPlot {
    /// Create a new SpeedupPlot instance
    pub fn new() -> Self {
        Self
    }
}

impl Plot for SpeedupPlot {
    type Options = SpeedupPlotOptions;
    type Data = Chart;

    fn render(&self, data: &Self::Data, options: &Self::Options) -> Result<PlotBytes> {
        let n_colors = distinct(data.series.iter().map(|s| s.color_index));
        let n_styles = distinct(data.series.iter().map(|s| s.style_index));

        if n_colors > options.colors.len() {
            warn!(
                "{}: {} values of '{}' but only {} colours, colours repeat",
                data.layout.file_name,
                n_colors,
                data.layout.color,
                options.colors.len()
            );
        }
        if n_styles > options.line_styles.len() {
            warn!(
                "{}: {} values of '{}' but only {} line styles, styles repeat",
                data.layout.file_name,
                n_styles,
                data.layout.style,
                options.line_styles.len()
            );
        }

        let bytes = render_speedup_chart(data, options)?;
        debug!(
            "Rendered {} ({} series, {} bytes)",
            data.layout.file_name,
            data.series.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

fn distinct(indices: impl Iterator<Item = usize>) -> usize {
    indices.max().map_or(0, |max| max + 1)
}
