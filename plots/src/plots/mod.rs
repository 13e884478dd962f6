pub mod speedup;
pub mod traits;

pub use speedup::SpeedupPlot;
pub use traits::Plot;
