use crate::PlotBytes;
use crate::options::PlotOptions;
use anyhow::Result;

/// A chart kind that turns borrowed data into an encoded image
///
/// `Data` may be unsized so slices can be plotted without copying.
///
/// ```rust,no_run
/// use speedup_plots::PlotBytes;
/// use speedup_plots::options::{BasePlotOptions, PlotOptions};
/// use speedup_plots::plots::Plot;
/// use anyhow::Result;
///
/// struct ScatterOptions {
///     base: BasePlotOptions,
/// }
///
/// impl PlotOptions for ScatterOptions {
///     fn base(&self) -> &BasePlotOptions { &self.base }
/// }
///
/// struct Scatter;
///
/// impl Plot for Scatter {
///     type Options = ScatterOptions;
///     type Data = [(f64, f64)];
///
///     fn render(&self, points: &[(f64, f64)], options: &ScatterOptions) -> Result<PlotBytes> {
///         let _ = (points, options.base().width);
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait Plot {
    type Options: PlotOptions;

    type Data: ?Sized;

    /// Draw `data` and return the PNG bytes
    fn render(&self, data: &Self::Data, options: &Self::Options) -> Result<PlotBytes>;
}
