//! Speedup ratios between a baseline and a candidate implementation.

use crate::dataset::{Axes, Dataset};
use crate::error::{Result, SpeedupError};
use crate::key::Point;
use std::collections::BTreeMap;
use tracing::info;

/// Which tags are compared. The ratio is `baseline / candidate`, so values
/// above 1 mean the candidate is faster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioConfig {
    pub baseline: String,
    pub candidate: String,
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            baseline: "old".to_string(),
            candidate: "new".to_string(),
        }
    }
}

/// Speedup for every combination of the dataset's axes
#[derive(Debug, Clone, Default)]
pub struct RatioTable {
    axes: Axes,
    ratios: BTreeMap<Point, f64>,
}

impl RatioTable {
    /// Compute `baseline / candidate` over the full factorial of the dataset's axes.
    ///
    /// # Errors
    /// Returns [`SpeedupError::MissingVariant`] for the first combination that
    /// lacks either tag.
    pub fn compute(dataset: &Dataset, config: &RatioConfig) -> Result<Self> {
        let axes = dataset.axes();
        let lookup = |point: Point, tag: &str| -> Result<f64> {
            dataset
                .value(point, tag)
                .ok_or_else(|| SpeedupError::MissingVariant {
                    string_len: point.string_len,
                    string_count: point.string_count,
                    separator_len: point.separator_len,
                    tag: tag.to_string(),
                })
        };

        let mut ratios = BTreeMap::new();
        for point in axes.points() {
            let ratio = lookup(point, &config.baseline)? / lookup(point, &config.candidate)?;
            ratios.insert(point, ratio);
        }

        info!(
            "Computed {} speedups ({} / {})",
            ratios.len(),
            config.baseline,
            config.candidate
        );
        Ok(Self { axes, ratios })
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn ratio(&self, point: Point) -> Option<f64> {
        self.ratios.get(&point).copied()
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Rows ordered by separator length, then string length, then string count
    pub fn rows(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        let axes = &self.axes;
        axes.separator_lens.iter().flat_map(move |&sep| {
            axes.string_lens.iter().flat_map(move |&len| {
                axes.string_counts.iter().filter_map(move |&n| {
                    let point = Point::new(len, n, sep);
                    self.ratio(point).map(|ratio| (point, ratio))
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::BenchmarkKey;
    use approx::assert_relative_eq;

    fn dataset(entries: &[(Point, &str, f64)]) -> Dataset {
        Dataset::from_estimates(
            entries
                .iter()
                .map(|&(point, tag, value)| (BenchmarkKey::new(point, tag), value)),
        )
    }

    #[test]
    fn ratio_is_old_over_new() {
        let a = Point::new(10, 10, 4);
        let b = Point::new(100, 10, 4);
        let data = dataset(&[
            (a, "old", 300.0),
            (a, "new", 100.0),
            (b, "old", 50.0),
            (b, "new", 200.0),
        ]);

        let table = RatioTable::compute(&data, &RatioConfig::default()).unwrap();
        assert_eq!(table.len(), 2);
        assert_relative_eq!(table.ratio(a).unwrap(), 3.0);
        assert_relative_eq!(table.ratio(b).unwrap(), 0.25);
    }

    #[test]
    fn custom_tags_swap_the_ratio() {
        let a = Point::new(10, 10, 4);
        let data = dataset(&[(a, "old", 300.0), (a, "new", 100.0)]);
        let config = RatioConfig {
            baseline: "new".to_string(),
            candidate: "old".to_string(),
        };

        let table = RatioTable::compute(&data, &config).unwrap();
        assert_relative_eq!(table.ratio(a).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn missing_variant_is_fatal() {
        let a = Point::new(10, 10, 4);
        let data = dataset(&[(a, "old", 300.0)]);

        let err = RatioTable::compute(&data, &RatioConfig::default()).unwrap_err();
        match err {
            SpeedupError::MissingVariant { tag, string_len, .. } => {
                assert_eq!(tag, "new");
                assert_eq!(string_len, 10);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn incomplete_factorial_is_fatal() {
        // axes span 2x2x1 but only two combinations were measured
        let a = Point::new(10, 10, 4);
        let b = Point::new(100, 100, 4);
        let data = dataset(&[
            (a, "old", 1.0),
            (a, "new", 1.0),
            (b, "old", 1.0),
            (b, "new", 1.0),
        ]);

        assert!(matches!(
            RatioTable::compute(&data, &RatioConfig::default()),
            Err(SpeedupError::MissingVariant { .. })
        ));
    }

    #[test]
    fn rows_nest_separator_then_length_then_count() {
        let mut entries = Vec::new();
        for len in [10, 100] {
            for n in [10, 1000] {
                for sep in [4, 100] {
                    let point = Point::new(len, n, sep);
                    entries.push((point, "old", 2.0));
                    entries.push((point, "new", 1.0));
                }
            }
        }
        let table = RatioTable::compute(&dataset(&entries), &RatioConfig::default()).unwrap();

        let order: Vec<(u64, u64, u64)> = table
            .rows()
            .map(|(p, _)| (p.separator_len, p.string_len, p.string_count))
            .collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(order.len(), 8);
        assert_eq!(order[0], (4, 10, 10));
        assert_eq!(order[1], (4, 10, 1000));
        assert_eq!(order[7], (100, 100, 1000));
    }
}
