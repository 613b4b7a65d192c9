use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading CSV files into the database.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data directory not found: {}", .0.display())]
    MissingDataDir(PathBuf),
    #[error("missing CSV file: {}", .0.display())]
    MissingCsv(PathBuf),
    #[error("{table}: column '{column}' missing from CSV header")]
    MissingColumn { table: String, column: String },
    #[error("core error: {0}")]
    Core(#[from] shopgen_core::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
