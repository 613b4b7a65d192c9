use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{Connection, QueryBuilder, Sqlite};

use shopgen_core::{FieldValue, TableSpec};

/// Open (creating if needed) the database file with foreign keys enforced.
pub async fn connect(path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);
    SqliteConnection::connect_with(&options).await
}

/// Drop every table (children first) and recreate them (parents first).
///
/// Enforcement stays on throughout: dropping in reverse dependency order
/// never leaves a child referencing a dropped parent.
pub async fn reset_tables(
    conn: &mut SqliteConnection,
    tables: &[TableSpec],
) -> Result<(), sqlx::Error> {
    for spec in tables.iter().rev() {
        let sql = format!("DROP TABLE IF EXISTS {}", spec.name);
        sqlx::query(&sql).execute(&mut *conn).await?;
    }

    for spec in tables {
        sqlx::query(spec.ddl).execute(&mut *conn).await?;
    }

    Ok(())
}

/// Upper bound on bound parameters per statement in the bundled SQLite.
const MAX_BIND_VARIABLES: usize = 32766;

/// Insert all rows inside one transaction.
///
/// Rows go in as multi-row statements, split so no statement exceeds
/// `MAX_BIND_VARIABLES` bound parameters.
pub async fn insert_rows(
    conn: &mut SqliteConnection,
    spec: &TableSpec,
    rows: &[Vec<FieldValue>],
) -> Result<u64, sqlx::Error> {
    if rows.is_empty() {
        return Ok(0);
    }

    let chunk_rows = rows_per_statement(spec.columns.len());
    let mut inserted = 0;

    let mut tx = conn.begin().await?;
    for chunk in rows.chunks(chunk_rows) {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(format!(
            "INSERT INTO {} ({}) ",
            spec.name,
            spec.columns.join(", ")
        ));
        builder.push_values(chunk, |mut values, row| {
            for value in row {
                match value {
                    FieldValue::Text(text) => values.push_bind(text.clone()),
                    FieldValue::Integer(number) => values.push_bind(*number),
                    FieldValue::Real(number) => values.push_bind(*number),
                };
            }
        });
        inserted += builder.build().execute(&mut *tx).await?.rows_affected();
    }
    tx.commit().await?;

    Ok(inserted)
}

fn rows_per_statement(columns: usize) -> usize {
    (MAX_BIND_VARIABLES / columns.max(1)).max(1)
}

/// Number of rows currently stored in a table.
pub async fn count_rows(conn: &mut SqliteConnection, table: &str) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&sql).fetch_one(&mut *conn).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_stay_under_the_bind_limit() {
        assert_eq!(rows_per_statement(5), 6553);
        assert_eq!(rows_per_statement(6), 5461);
        assert!(rows_per_statement(6) * 6 <= MAX_BIND_VARIABLES);
        assert_eq!(rows_per_statement(0), MAX_BIND_VARIABLES);
        assert_eq!(rows_per_statement(40000), 1);
    }
}
