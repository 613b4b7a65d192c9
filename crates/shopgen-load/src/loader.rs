use std::time::Instant;

use sqlx::Connection;
use tracing::info;

use shopgen_core::{PipelinePaths, TABLES, validate_order};

use crate::errors::LoadError;
use crate::model::{LoadReport, TableLoad};
use crate::source::{Row, read_table_csv};
use crate::sqlite::{connect, insert_rows, reset_tables};

/// Load every catalog table from its CSV into a freshly reset database.
///
/// All inputs are checked and parsed before the database is opened, so a
/// missing directory, missing file or malformed field leaves the existing
/// database untouched.
pub async fn load_database(paths: &PipelinePaths) -> Result<LoadReport, LoadError> {
    let start = Instant::now();

    if !paths.data_dir.is_dir() {
        return Err(LoadError::MissingDataDir(paths.data_dir.clone()));
    }
    for spec in &TABLES {
        let csv_path = paths.csv_path(spec);
        if !csv_path.exists() {
            return Err(LoadError::MissingCsv(csv_path));
        }
    }
    validate_order(&TABLES)?;

    let mut batches: Vec<Vec<Row>> = Vec::with_capacity(TABLES.len());
    for spec in &TABLES {
        let rows = read_table_csv(&paths.csv_path(spec), spec)?;
        info!(table = spec.name, rows = rows.len(), "csv parsed");
        batches.push(rows);
    }

    let mut conn = connect(&paths.database).await?;
    info!(database = %paths.database.display(), "database opened");

    reset_tables(&mut conn, &TABLES).await?;
    info!(tables = TABLES.len(), "tables reset");

    let mut tables = Vec::with_capacity(TABLES.len());
    for (spec, rows) in TABLES.iter().zip(&batches) {
        let inserted = insert_rows(&mut conn, spec, rows).await?;
        info!(table = spec.name, rows = inserted, "rows inserted");
        tables.push(TableLoad {
            table: spec.name.to_string(),
            rows: inserted,
        });
    }

    conn.close().await?;
    info!(duration_ms = start.elapsed().as_millis(), "load finished");

    Ok(LoadReport {
        database: paths.database.clone(),
        tables,
    })
}
