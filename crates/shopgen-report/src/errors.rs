use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the order summary report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("database not found: {}", .0.display())]
    MissingDatabase(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
