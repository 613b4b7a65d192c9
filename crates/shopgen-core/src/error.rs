use std::path::PathBuf;

use thiserror::Error;

/// Core error type shared across shopgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw CSV field could not be converted to its column type.
    #[error("cannot convert column '{column}' value '{value}'")]
    Conversion { column: String, value: String },
    /// A monetary amount is not a two-decimal number.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// The table catalog violates its ordering invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Convenience alias for results returned by shopgen crates.
pub type Result<T> = std::result::Result<T, Error>;
