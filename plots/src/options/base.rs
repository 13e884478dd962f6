use derive_builder::Builder;

/// Smallest width or height the axes and legend still fit into
pub const MIN_PLOT_DIMENSION: u32 = 200;

/// Largest width or height a chart may be rendered at
pub const MAX_PLOT_DIMENSION: u32 = 16384;

/// Canvas size and the space reserved around the data area
///
/// The legend sits in its own column right of the axes, so
/// `legend_area_size` is taken off `width` before the chart is laid out.
///
/// # Example
///
/// ```rust,no_run
/// use speedup_plots::options::BasePlotOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let base = BasePlotOptions::new()
///     .width(1200u32)
///     .height(800u32)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option), default)]
pub struct BasePlotOptions {
    /// Image width in pixels
    #[builder(default = "1000")]
    pub width: u32,

    /// Image height in pixels
    #[builder(default = "600")]
    pub height: u32,

    /// Gap between the canvas edge and the axes
    #[builder(default = "10")]
    pub margin: u32,

    /// Size of the x-axis label area in pixels
    #[builder(default = "50")]
    pub x_label_area_size: u32,

    /// Size of the y-axis label area in pixels
    #[builder(default = "60")]
    pub y_label_area_size: u32,

    /// Width reserved right of the plot for the legend
    #[builder(default = "240")]
    pub legend_area_size: u32,
}

impl Default for BasePlotOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            margin: 10,
            x_label_area_size: 50,
            y_label_area_size: 60,
            legend_area_size: 240,
        }
    }
}

impl BasePlotOptions {
    /// Create a new builder for BasePlotOptions
    pub fn new() -> BasePlotOptionsBuilder {
        BasePlotOptionsBuilder::default()
    }
}
