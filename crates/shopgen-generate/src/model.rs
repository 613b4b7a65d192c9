use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use shopgen_core::GenerateSettings;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the CSV files are written.
    pub out_dir: PathBuf,
    /// Seed of the order quantity sequence.
    pub order_seed: u64,
    /// Seed of the review rating sequence.
    pub review_seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::from_settings(PathBuf::from("data"), &GenerateSettings::default())
    }
}

impl GenerateOptions {
    pub fn from_settings(out_dir: PathBuf, settings: &GenerateSettings) -> Self {
        Self {
            out_dir,
            order_seed: settings.order_seed,
            review_seed: settings.review_seed,
        }
    }
}

/// Summary of a written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes_written: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationReport {
    pub tables: Vec<TableReport>,
}

impl GenerationReport {
    pub fn record_table(&mut self, report: TableReport) {
        self.tables.push(report);
    }

    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.tables.iter().find(|table| table.table == name)
    }

    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|table| table.rows).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.tables.iter().map(|table| table.bytes_written).sum()
    }
}
