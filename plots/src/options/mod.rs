pub mod base;
pub mod speedup;

pub use base::{BasePlotOptions, BasePlotOptionsBuilder, MAX_PLOT_DIMENSION, MIN_PLOT_DIMENSION};
pub use speedup::{SpeedupPlotOptions, SpeedupPlotOptionsBuilder};

/// Gives the renderer access to the size and layout shared by every chart kind
pub trait PlotOptions {
    fn base(&self) -> &BasePlotOptions;
}
