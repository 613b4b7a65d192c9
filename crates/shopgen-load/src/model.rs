use std::path::PathBuf;

/// Rows inserted into one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLoad {
    pub table: String,
    pub rows: u64,
}

/// Summary of a load run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub database: PathBuf,
    pub tables: Vec<TableLoad>,
}

impl LoadReport {
    pub fn rows(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|load| load.table == table)
            .map(|load| load.rows)
    }
}
