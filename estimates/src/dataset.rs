//! Discovery and extraction of Criterion point estimates.

use crate::error::{Result, SpeedupError};
use crate::key::{BenchmarkKey, Dimension, KeyPattern, Point};
use itertools::{Itertools, iproduct};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Where Criterion writes its results when run from the crate root
pub const DEFAULT_CRITERION_DIR: &str = "target/criterion";

/// Depth of `estimates.json` below the Criterion root
const ESTIMATES_DEPTH: usize = 4;

/// The part of Criterion's `estimates.json` we care about
#[derive(Debug, Deserialize)]
struct Estimates {
    // Criterion 0.2 writes `Mean`, later releases `mean`
    #[serde(rename = "Mean", alias = "mean")]
    mean: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Sorted, de-duplicated values seen for each benchmark parameter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Axes {
    pub string_lens: Vec<u64>,
    pub string_counts: Vec<u64>,
    pub separator_lens: Vec<u64>,
}

impl Axes {
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let points: Vec<Point> = points.into_iter().collect();
        let distinct = |dimension: Dimension| -> Vec<u64> {
            points
                .iter()
                .map(|p| p.get(dimension))
                .sorted_unstable()
                .dedup()
                .collect()
        };

        Self {
            string_lens: distinct(Dimension::StringLength),
            string_counts: distinct(Dimension::StringCount),
            separator_lens: distinct(Dimension::SeparatorLength),
        }
    }

    pub fn values(&self, dimension: Dimension) -> &[u64] {
        match dimension {
            Dimension::StringLength => &self.string_lens,
            Dimension::StringCount => &self.string_counts,
            Dimension::SeparatorLength => &self.separator_lens,
        }
    }

    /// Every combination of the three axes (full factorial)
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        iproduct!(
            self.string_lens.iter(),
            self.string_counts.iter(),
            self.separator_lens.iter()
        )
        .map(|(&len, &n, &sep)| Point::new(len, n, sep))
    }

    /// Number of combinations
    pub fn len(&self) -> usize {
        self.string_lens.len() * self.string_counts.len() * self.separator_lens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Point estimates keyed by benchmark, built once per run and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    estimates: FxHashMap<BenchmarkKey, f64>,
}

impl Dataset {
    /// Load every result file below `root`.
    ///
    /// # Errors
    /// Fails on the first result file whose path does not follow the naming
    /// convention or whose JSON lacks `Mean.point_estimate`, and when no
    /// result files are found at all.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let pattern = KeyPattern::new()?;

        let mut estimates = FxHashMap::default();
        for path in discover(root)? {
            let key = pattern.parse(&relative_path(root, &path))?;
            let value = read_point_estimate(&path)?;
            debug!("{} {} -> {}", key.point, key.tag, value);
            estimates.insert(key, value);
        }

        if estimates.is_empty() {
            return Err(SpeedupError::NoEstimates {
                root: root.to_path_buf(),
            });
        }

        info!("Loaded {} estimates from {}", estimates.len(), root.display());
        Ok(Self { estimates })
    }

    pub fn from_estimates(estimates: impl IntoIterator<Item = (BenchmarkKey, f64)>) -> Self {
        Self {
            estimates: estimates.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &BenchmarkKey) -> Option<f64> {
        self.estimates.get(key).copied()
    }

    /// Estimate for `tag` at `point`
    pub fn value(&self, point: Point, tag: &str) -> Option<f64> {
        self.get(&BenchmarkKey::new(point, tag))
    }

    pub fn keys(&self) -> impl Iterator<Item = &BenchmarkKey> {
        self.estimates.keys()
    }

    pub fn axes(&self) -> Axes {
        Axes::from_points(self.keys().map(|k| k.point))
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

/// Find result files shaped like `len:*_n:*_sep_len:*/*_join/new/estimates.json`
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(ESTIMATES_DEPTH)
        .max_depth(ESTIMATES_DEPTH)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && has_estimates_layout(&relative_path(root, entry.path()))
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn has_estimates_layout(relative: &str) -> bool {
    let parts: Vec<&str> = relative.split('/').collect();
    match parts.as_slice() {
        [benchmark, variant, "new", "estimates.json"] => {
            benchmark.starts_with("len:")
                && benchmark.contains("_n:")
                && benchmark.contains("_sep_len:")
                && variant.ends_with("_join")
        }
        _ => false,
    }
}

/// `/`-joined path of `path` below `root`, whatever the platform separator
fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .join("/")
}

fn read_point_estimate(path: &Path) -> Result<f64> {
    let file = File::open(path).map_err(|source| SpeedupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let estimates: Estimates =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SpeedupError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(estimates.mean.point_estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_check_matches_the_criterion_glob() {
        assert!(has_estimates_layout(
            "len:10_n:10_sep_len:4/old_join/new/estimates.json"
        ));
        // the glob is looser than the key pattern; parsing rejects these later
        assert!(has_estimates_layout(
            "len:a_n:b_sep_len:c/old2_join/new/estimates.json"
        ));
        assert!(!has_estimates_layout(
            "len:10_n:10_sep_len:4/old_join/base/estimates.json"
        ));
        assert!(!has_estimates_layout(
            "len:10_n:10_sep_len:4/old_join/new/sample.json"
        ));
        assert!(!has_estimates_layout(
            "report/old_join/new/estimates.json"
        ));
    }

    #[test]
    fn axes_are_sorted_and_deduplicated() {
        let axes = Axes::from_points([
            Point::new(100, 10, 4),
            Point::new(10, 1000, 4),
            Point::new(10, 10, 100),
            Point::new(100, 10, 4),
        ]);
        assert_eq!(axes.string_lens, vec![10, 100]);
        assert_eq!(axes.string_counts, vec![10, 1000]);
        assert_eq!(axes.separator_lens, vec![4, 100]);
        assert_eq!(axes.len(), 8);
        assert_eq!(axes.points().count(), 8);
        assert_eq!(axes.values(Dimension::SeparatorLength), &[4, 100]);
    }

    #[test]
    fn estimates_accept_both_mean_spellings() {
        let old: Estimates =
            serde_json::from_str(r#"{"Mean": {"point_estimate": 1.5, "standard_error": 0.1}}"#)
                .unwrap();
        let new: Estimates =
            serde_json::from_str(r#"{"mean": {"point_estimate": 2.5}, "median": {}}"#).unwrap();
        assert_eq!(old.mean.point_estimate, 1.5);
        assert_eq!(new.mean.point_estimate, 2.5);
        assert!(serde_json::from_str::<Estimates>(r#"{"Median": {"point_estimate": 1}}"#).is_err());
    }

    #[test]
    fn dataset_lookup_by_point_and_tag() {
        let point = Point::new(10, 10, 4);
        let dataset = Dataset::from_estimates([
            (BenchmarkKey::new(point, "old"), 3.0),
            (BenchmarkKey::new(point, "new"), 1.5),
        ]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.value(point, "old"), Some(3.0));
        assert_eq!(dataset.value(point, "other"), None);
    }
}
