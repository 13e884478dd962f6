//! Error types for loading estimates and computing speedups.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeedupError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk benchmark directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid key pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Benchmark path does not follow the naming convention: {path}")]
    MalformedName { path: String },

    #[error("Failed to extract Mean.point_estimate from {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No benchmark estimates found under {root}")]
    NoEstimates { root: PathBuf },

    #[error(
        "Missing '{tag}' estimate for len:{string_len} n:{string_count} sep_len:{separator_len}"
    )]
    MissingVariant {
        string_len: u64,
        string_count: u64,
        separator_len: u64,
        tag: String,
    },
}

impl SpeedupError {
    pub fn malformed_name(path: impl Into<String>) -> Self {
        Self::MalformedName { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, SpeedupError>;
