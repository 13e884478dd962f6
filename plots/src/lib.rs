//! # speedup-plots
//!
//! Speedup charts for the Criterion join benchmark comparison.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use speedup_plots::{SpeedupPlotOptions, render_standard_charts};
//! use speedup_estimates::{RatioConfig, compute_ratios, load};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = compute_ratios(&load("target/criterion")?, &RatioConfig::default())?;
//! for chart in render_standard_charts(&table, &SpeedupPlotOptions::default())? {
//!     std::fs::write(&chart.file_name, &chart.bytes)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `options`: Plot configuration types using the builder pattern
//! - `plots`: Plot implementations (currently `SpeedupPlot`)
//! - `render`: Plotters drawing and PNG encoding
//! - `style`: Colour palette, line styles and dash patterns

pub mod options;
pub mod plots;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use options::{
    BasePlotOptions, MAX_PLOT_DIMENSION, MIN_PLOT_DIMENSION, PlotOptions, SpeedupPlotOptions,
};
pub use plots::{Plot, SpeedupPlot};
pub use style::LineStyle;

use anyhow::Result;
use speedup_estimates::{Chart, RatioTable};

// Type aliases
pub type PlotBytes = Vec<u8>;

/// An encoded chart together with the file name it is saved under
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub file_name: String,
    pub bytes: PlotBytes,
}

/// Render the three standard speedup charts of `table`
pub fn render_standard_charts(
    table: &RatioTable,
    options: &SpeedupPlotOptions,
) -> Result<Vec<RenderedChart>> {
    let plot = SpeedupPlot::new();
    Chart::standard(table)
        .into_iter()
        .map(|chart| {
            Ok(RenderedChart {
                bytes: plot.render(&chart, options)?,
                file_name: chart.layout.file_name,
            })
        })
        .collect()
}
