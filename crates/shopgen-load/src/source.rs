use std::path::Path;

use shopgen_core::{FieldValue, TableSpec, convert_field};

use crate::errors::LoadError;

/// Typed row, one value per catalog column in catalog order.
pub type Row = Vec<FieldValue>;

/// Read a table's CSV and convert every field by column name.
///
/// Columns are matched by header name, so the file may order them freely;
/// columns outside the catalog are ignored.
pub fn read_table_csv(path: &Path, spec: &TableSpec) -> Result<Vec<Row>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let positions = spec
        .columns
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|header| header == *column)
                .ok_or_else(|| LoadError::MissingColumn {
                    table: spec.name.to_string(),
                    column: column.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = spec
            .columns
            .iter()
            .zip(&positions)
            .map(|(column, position)| {
                convert_field(column, record.get(*position).unwrap_or_default())
            })
            .collect::<Result<Row, _>>()?;
        rows.push(row);
    }

    Ok(rows)
}
