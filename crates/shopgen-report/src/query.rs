use std::path::Path;

use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{Connection, FromRow};
use tracing::info;

use crate::errors::ReportError;

/// Orders joined to their user and product; reviews and payments are
/// optional, so every order yields exactly one row.
pub const ORDER_SUMMARY_QUERY: &str = r#"
SELECT
    u.name AS user_name,
    pr.name AS product_name,
    o.order_date,
    r.rating AS review_rating,
    pay.payment_status
FROM orders o
JOIN users u ON u.user_id = o.user_id
JOIN products pr ON pr.product_id = o.product_id
LEFT JOIN reviews r ON r.order_id = o.order_id
LEFT JOIN payments pay ON pay.order_id = o.order_id
ORDER BY o.order_date, o.order_id
"#;

/// One line of the order summary report.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct OrderSummaryRow {
    pub user_name: String,
    pub product_name: String,
    pub order_date: String,
    pub review_rating: Option<i64>,
    pub payment_status: Option<String>,
}

/// Run the summary query against an existing database file.
pub async fn fetch_order_summary(path: &Path) -> Result<Vec<OrderSummaryRow>, ReportError> {
    if !path.exists() {
        return Err(ReportError::MissingDatabase(path.to_path_buf()));
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false)
        .read_only(true);
    let mut conn = SqliteConnection::connect_with(&options).await?;

    let rows = sqlx::query_as::<_, OrderSummaryRow>(ORDER_SUMMARY_QUERY)
        .fetch_all(&mut conn)
        .await?;
    info!(rows = rows.len(), database = %path.display(), "order summary fetched");

    conn.close().await?;
    Ok(rows)
}
