use crate::error::{Error, Result};

/// Storage class a CSV column is converted to before insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Real,
}

/// Columns that are not stored as text. The mapping is keyed by column name
/// only, so a column converts the same way in every table it appears in.
const FIELD_CONVERTERS: &[(&str, FieldKind)] = &[
    ("price", FieldKind::Real),
    ("in_stock", FieldKind::Integer),
    ("quantity", FieldKind::Integer),
    ("order_total", FieldKind::Real),
    ("rating", FieldKind::Integer),
    ("amount", FieldKind::Real),
];

/// A typed CSV field ready to be bound to a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

pub fn field_kind(column: &str) -> FieldKind {
    FIELD_CONVERTERS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, kind)| *kind)
        .unwrap_or(FieldKind::Text)
}

/// Convert a raw CSV field according to its column's kind.
pub fn convert_field(column: &str, raw: &str) -> Result<FieldValue> {
    let conversion_error = || Error::Conversion {
        column: column.to_string(),
        value: raw.to_string(),
    };

    match field_kind(column) {
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldKind::Integer => raw
            .trim()
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| conversion_error()),
        FieldKind::Real => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(FieldValue::Real)
            .ok_or_else(conversion_error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_are_typed() {
        assert_eq!(convert_field("price", "149.99").unwrap(), FieldValue::Real(149.99));
        assert_eq!(convert_field("amount", "59.00").unwrap(), FieldValue::Real(59.0));
        assert_eq!(convert_field("in_stock", "53").unwrap(), FieldValue::Integer(53));
        assert_eq!(convert_field("rating", "4").unwrap(), FieldValue::Integer(4));
    }

    #[test]
    fn unknown_columns_stay_text() {
        assert_eq!(field_kind("order_date"), FieldKind::Text);
        assert_eq!(
            convert_field("user_id", "U001").unwrap(),
            FieldValue::Text("U001".to_string())
        );
        // Zero padding must survive for text columns.
        assert_eq!(
            convert_field("comment", "007").unwrap(),
            FieldValue::Text("007".to_string())
        );
    }

    #[test]
    fn invalid_numbers_report_column_and_value() {
        let err = convert_field("quantity", "two").unwrap_err();
        assert_eq!(err.to_string(), "cannot convert column 'quantity' value 'two'");
        assert!(convert_field("price", "NaN").is_err());
        assert!(convert_field("rating", "4.5").is_err());
    }
}
