//! # speedup-estimates
//!
//! Reads the Criterion results of the join benchmark and turns them into
//! old/new speedups.
//!
//! ```rust,no_run
//! use speedup_estimates::{Chart, RatioConfig, compute_ratios, load, write_table};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = load("target/criterion")?;
//! let table = compute_ratios(&dataset, &RatioConfig::default())?;
//! write_table(&table, &mut std::io::stdout())?;
//! let charts = Chart::standard(&table);
//! # Ok(())
//! # }
//! ```
//!
//! - `key`: the `len:<L>_n:<N>_sep_len:<S>/<tag>_join` naming convention
//! - `dataset`: discovery of `estimates.json` files and their point estimates
//! - `ratio`: baseline / candidate speedups over the full parameter grid
//! - `layout`: grouping of speedups into chart series
//! - `report`: fixed-width text table

pub mod dataset;
pub mod error;
pub mod key;
pub mod layout;
pub mod ratio;
pub mod report;

pub use dataset::{Axes, DEFAULT_CRITERION_DIR, Dataset};
pub use error::{Result, SpeedupError};
pub use key::{BenchmarkKey, Dimension, KeyPattern, Point};
pub use layout::{Chart, ChartLayout, Series};
pub use ratio::{RatioConfig, RatioTable};
pub use report::{format_general, write_table};

use std::path::Path;

/// Load all point estimates below a Criterion output directory
pub fn load(root: impl AsRef<Path>) -> Result<Dataset> {
    Dataset::load(root)
}

/// Speedups for every parameter combination of `dataset`
pub fn compute_ratios(dataset: &Dataset, config: &RatioConfig) -> Result<RatioTable> {
    RatioTable::compute(dataset, config)
}
