use crate::options::{BasePlotOptions, PlotOptions};
use crate::style::{DEFAULT_COLORS, DEFAULT_LINE_STYLES, LineStyle};
use derive_builder::Builder;
use plotters::style::{BLACK, RGBColor};

/// Options for speedup charts
///
/// The x-axis label and the legend title come from the chart's layout;
/// everything else about the appearance is configured here.
///
/// # Example
///
/// ```rust,no_run
/// use speedup_plots::options::{BasePlotOptions, SpeedupPlotOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = SpeedupPlotOptions::new()
///     .base(BasePlotOptions::new().width(1400u32).build()?)
///     .marker_size(4u32)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct SpeedupPlotOptions {
    /// Base plot options (layout, dimensions, etc.)
    #[builder(default)]
    pub base: BasePlotOptions,

    /// Y-axis label
    #[builder(default = "\"Speedup\".to_string()")]
    pub y_label: String,

    /// Series colours, indexed by position on the colour dimension
    #[builder(default = "DEFAULT_COLORS.to_vec()")]
    pub colors: Vec<RGBColor>,

    /// Series line styles, indexed by position on the style dimension
    #[builder(default = "DEFAULT_LINE_STYLES.to_vec()")]
    pub line_styles: Vec<LineStyle>,

    /// Radius of the point markers in pixels
    #[builder(default = "3")]
    pub marker_size: u32,

    /// Stroke width of connecting lines in pixels
    #[builder(default = "2")]
    pub line_width: u32,
}

impl Default for SpeedupPlotOptions {
    fn default() -> Self {
        Self {
            base: BasePlotOptions::default(),
            y_label: "Speedup".to_string(),
            colors: DEFAULT_COLORS.to_vec(),
            line_styles: DEFAULT_LINE_STYLES.to_vec(),
            marker_size: 3,
            line_width: 2,
        }
    }
}

impl PlotOptions for SpeedupPlotOptions {
    fn base(&self) -> &BasePlotOptions {
        &self.base
    }
}

impl SpeedupPlotOptions {
    /// Create a new builder for SpeedupPlotOptions
    pub fn new() -> SpeedupPlotOptionsBuilder {
        SpeedupPlotOptionsBuilder::default()
    }

    /// Colour for a position on the colour dimension; the palette repeats
    pub fn color(&self, index: usize) -> RGBColor {
        if self.colors.is_empty() {
            return BLACK;
        }
        self.colors[index % self.colors.len()]
    }

    /// Line style for a position on the style dimension; the styles repeat
    pub fn line_style(&self, index: usize) -> LineStyle {
        if self.line_styles.is_empty() {
            return LineStyle::Solid;
        }
        self.line_styles[index % self.line_styles.len()]
    }
}
