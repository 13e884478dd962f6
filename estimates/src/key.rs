//! Benchmark keys and the Criterion directory naming convention.
//!
//! Every benchmark of the join comparison is stored by Criterion as
//! `len:<L>_n:<N>_sep_len:<S>/<tag>_join/new/estimates.json`, relative to the
//! Criterion output directory. The three integers are the benchmark parameters,
//! the tag names the implementation that was measured.

use crate::error::{Result, SpeedupError};
use regex::Regex;
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Regular expression matching a result file path relative to the Criterion root
pub const KEY_PATTERN: &str =
    r"^len:(\d+)_n:(\d+)_sep_len:(\d+)/([a-zA-Z]+)_join/new/estimates\.json$";

/// One of the three integer parameters of the join benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum Dimension {
    /// Length of each joined string
    #[strum(to_string = "string len")]
    StringLength,
    /// Number of joined strings
    #[strum(to_string = "num of strings")]
    StringCount,
    /// Length of the separator
    #[strum(to_string = "separator len")]
    SeparatorLength,
}

/// A parameter combination, independent of the measured implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub string_len: u64,
    pub string_count: u64,
    pub separator_len: u64,
}

impl Point {
    pub fn new(string_len: u64, string_count: u64, separator_len: u64) -> Self {
        Self {
            string_len,
            string_count,
            separator_len,
        }
    }

    /// Value of the given dimension at this point
    pub fn get(&self, dimension: Dimension) -> u64 {
        match dimension {
            Dimension::StringLength => self.string_len,
            Dimension::StringCount => self.string_count,
            Dimension::SeparatorLength => self.separator_len,
        }
    }

    /// Return a copy with `dimension` replaced by `value`
    pub fn with(mut self, dimension: Dimension, value: u64) -> Self {
        match dimension {
            Dimension::StringLength => self.string_len = value,
            Dimension::StringCount => self.string_count = value,
            Dimension::SeparatorLength => self.separator_len = value,
        }
        self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "len:{}_n:{}_sep_len:{}",
            self.string_len, self.string_count, self.separator_len
        )
    }
}

/// Identifies one Criterion result file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BenchmarkKey {
    pub point: Point,
    /// Implementation label, e.g. `old` or `new`
    pub tag: String,
}

impl BenchmarkKey {
    pub fn new(point: Point, tag: impl Into<String>) -> Self {
        Self {
            point,
            tag: tag.into(),
        }
    }

    /// Parse a relative result path with a freshly compiled [`KeyPattern`]
    pub fn parse(relative_path: &str) -> Result<Self> {
        KeyPattern::new()?.parse(relative_path)
    }

    /// Format the key back into its path relative to the Criterion root.
    ///
    /// Numbers are written in canonical form, so a parsed name with leading
    /// zeros (`len:010_...`) comes back as `len:10_...`.
    pub fn relative_path(&self) -> String {
        format!("{}/{}_join/new/estimates.json", self.point, self.tag)
    }
}

/// Compiled form of [`KEY_PATTERN`]
#[derive(Debug, Clone)]
pub struct KeyPattern {
    regex: Regex,
}

impl KeyPattern {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(KEY_PATTERN)?,
        })
    }

    /// Parse a `/`-separated path relative to the Criterion root.
    ///
    /// # Errors
    /// Returns [`SpeedupError::MalformedName`] if the path does not match the
    /// naming convention or an embedded number does not fit in a `u64`.
    pub fn parse(&self, relative_path: &str) -> Result<BenchmarkKey> {
        let captures = self
            .regex
            .captures(relative_path)
            .ok_or_else(|| SpeedupError::malformed_name(relative_path))?;

        let number = |index: usize| -> Result<u64> {
            captures[index]
                .parse()
                .map_err(|_| SpeedupError::malformed_name(relative_path))
        };

        let point = Point::new(number(1)?, number(2)?, number(3)?);
        Ok(BenchmarkKey::new(point, &captures[4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let key = BenchmarkKey::parse("len:100_n:1000_sep_len:4/old_join/new/estimates.json")
            .unwrap();
        assert_eq!(key.point, Point::new(100, 1000, 4));
        assert_eq!(key.tag, "old");
    }

    #[test]
    fn round_trips_through_relative_path() {
        let pattern = KeyPattern::new().unwrap();
        for name in [
            "len:10_n:10_sep_len:4/new_join/new/estimates.json",
            "len:1000_n:10000_sep_len:100/old_join/new/estimates.json",
            "len:0_n:0_sep_len:0/Baseline_join/new/estimates.json",
        ] {
            let key = pattern.parse(name).unwrap();
            assert_eq!(key.relative_path(), name);
            assert_eq!(pattern.parse(&key.relative_path()).unwrap(), key);
        }
    }

    #[test]
    fn leading_zeros_parse_to_the_canonical_name() {
        let key = BenchmarkKey::parse("len:010_n:001_sep_len:0/old_join/new/estimates.json")
            .unwrap();
        assert_eq!(key.point, Point::new(10, 1, 0));
        assert_eq!(
            key.relative_path(),
            "len:10_n:1_sep_len:0/old_join/new/estimates.json"
        );
        assert_eq!(BenchmarkKey::parse(&key.relative_path()).unwrap(), key);
    }

    #[test]
    fn rejects_paths_outside_the_convention() {
        let pattern = KeyPattern::new().unwrap();
        for name in [
            "",
            "len:10_n:10_sep_len:4/new_join/base/estimates.json",
            "len:10_n:10_sep_len:4/new2_join/new/estimates.json",
            "len:x_n:10_sep_len:4/new_join/new/estimates.json",
            "prefix/len:10_n:10_sep_len:4/new_join/new/estimates.json",
            "len:10_n:10_sep_len:4/new_join/new/estimates.json.bak",
        ] {
            let err = pattern.parse(name).unwrap_err();
            assert!(matches!(err, SpeedupError::MalformedName { .. }), "{name}");
        }
    }

    #[test]
    fn rejects_numbers_that_overflow() {
        let err = BenchmarkKey::parse(
            "len:99999999999999999999999_n:1_sep_len:1/old_join/new/estimates.json",
        )
        .unwrap_err();
        assert!(matches!(err, SpeedupError::MalformedName { .. }));
    }

    #[test]
    fn point_accessors_follow_dimensions() {
        let point = Point::default()
            .with(Dimension::StringLength, 1)
            .with(Dimension::StringCount, 2)
            .with(Dimension::SeparatorLength, 3);
        assert_eq!(point, Point::new(1, 2, 3));
        assert_eq!(point.get(Dimension::StringCount), 2);
        assert_eq!(Dimension::SeparatorLength.to_string(), "separator len");
    }
}
