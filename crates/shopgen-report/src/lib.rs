//! Order summary report: one join query exported as CSV.

pub mod errors;
pub mod output;
pub mod query;

pub use errors::ReportError;
pub use output::{REPORT_HEADER, write_summary};
pub use query::{ORDER_SUMMARY_QUERY, OrderSummaryRow, fetch_order_summary};

use std::path::PathBuf;

use shopgen_core::PipelinePaths;
use tracing::info;

/// Outcome of a report run.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub output: PathBuf,
    pub rows: usize,
}

/// Query the database and write the order summary CSV.
pub async fn run_report(paths: &PipelinePaths) -> Result<ReportSummary, ReportError> {
    let rows = fetch_order_summary(&paths.database).await?;
    write_summary(&paths.report, &rows)?;
    info!(rows = rows.len(), path = %paths.report.display(), "report written");

    Ok(ReportSummary {
        output: paths.report.clone(),
        rows: rows.len(),
    })
}
