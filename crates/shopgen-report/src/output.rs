use std::fs::{File, create_dir_all};
use std::path::Path;

use crate::errors::ReportError;
use crate::query::OrderSummaryRow;

pub const REPORT_HEADER: [&str; 5] = [
    "user_name",
    "product_name",
    "order_date",
    "review_rating",
    "payment_status",
];

/// Write the report CSV, creating its directory. Nulls become empty fields.
pub fn write_summary(path: &Path, rows: &[OrderSummaryRow]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create(path)?);
    writer.write_record(REPORT_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_are_written_empty() {
        let path = std::env::temp_dir()
            .join(format!("shopgen_report_unit_{}", std::process::id()))
            .join("summary.csv");
        let rows = vec![
            OrderSummaryRow {
                user_name: "Ava Patel".to_string(),
                product_name: "Smartwatch".to_string(),
                order_date: "2024-02-01".to_string(),
                review_rating: Some(4),
                payment_status: Some("Completed".to_string()),
            },
            OrderSummaryRow {
                user_name: "Noah Smith".to_string(),
                product_name: "Noise Cancelling Headphones".to_string(),
                order_date: "2024-02-02".to_string(),
                review_rating: None,
                payment_status: None,
            },
        ];

        write_summary(&path, &rows).expect("write summary");
        let content = std::fs::read_to_string(&path).expect("read summary");
        assert_eq!(
            content,
            "user_name,product_name,order_date,review_rating,payment_status\n\
             Ava Patel,Smartwatch,2024-02-01,4,Completed\n\
             Noah Smith,Noise Cancelling Headphones,2024-02-02,,\n"
        );
    }
}
