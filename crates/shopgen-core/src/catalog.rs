use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Static description of one pipeline table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Table name in the database.
    pub name: &'static str,
    /// File name of the CSV holding this table's rows.
    pub csv_file: &'static str,
    /// Column names, in CSV and insert order.
    pub columns: &'static [&'static str],
    /// Tables referenced by foreign keys of this table.
    pub parents: &'static [&'static str],
    /// `CREATE TABLE` statement.
    pub ddl: &'static str,
}

pub const USERS: TableSpec = TableSpec {
    name: "users",
    csv_file: "users.csv",
    columns: &["user_id", "name", "email", "join_date", "loyalty_tier"],
    parents: &[],
    ddl: r#"
        CREATE TABLE users (
            user_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            join_date TEXT NOT NULL,
            loyalty_tier TEXT NOT NULL
        )
    "#,
};

pub const PRODUCTS: TableSpec = TableSpec {
    name: "products",
    csv_file: "products.csv",
    columns: &["product_id", "name", "category", "price", "in_stock"],
    parents: &[],
    ddl: r#"
        CREATE TABLE products (
            product_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            price REAL NOT NULL,
            in_stock INTEGER NOT NULL
        )
    "#,
};

pub const ORDERS: TableSpec = TableSpec {
    name: "orders",
    csv_file: "orders.csv",
    columns: &[
        "order_id",
        "user_id",
        "product_id",
        "quantity",
        "order_date",
        "status",
        "order_total",
    ],
    parents: &["users", "products"],
    ddl: r#"
        CREATE TABLE orders (
            order_id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            product_id TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            order_date TEXT NOT NULL,
            status TEXT NOT NULL,
            order_total REAL NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(user_id),
            FOREIGN KEY (product_id) REFERENCES products(product_id)
        )
    "#,
};

pub const REVIEWS: TableSpec = TableSpec {
    name: "reviews",
    csv_file: "reviews.csv",
    columns: &["review_id", "order_id", "rating", "comment", "review_date"],
    parents: &["orders"],
    ddl: r#"
        CREATE TABLE reviews (
            review_id TEXT PRIMARY KEY,
            order_id TEXT NOT NULL,
            rating INTEGER NOT NULL,
            comment TEXT NOT NULL,
            review_date TEXT NOT NULL,
            FOREIGN KEY (order_id) REFERENCES orders(order_id)
        )
    "#,
};

pub const PAYMENTS: TableSpec = TableSpec {
    name: "payments",
    csv_file: "payments.csv",
    columns: &["payment_id", "order_id", "amount", "method", "payment_status"],
    parents: &["orders"],
    ddl: r#"
        CREATE TABLE payments (
            payment_id TEXT PRIMARY KEY,
            order_id TEXT NOT NULL,
            amount REAL NOT NULL,
            method TEXT NOT NULL,
            payment_status TEXT NOT NULL,
            FOREIGN KEY (order_id) REFERENCES orders(order_id)
        )
    "#,
};

/// All pipeline tables in dependency order: parents before children.
///
/// Creation and insertion walk this list forward; drops walk it in reverse.
pub const TABLES: [TableSpec; 5] = [USERS, PRODUCTS, ORDERS, REVIEWS, PAYMENTS];

/// Check that every table appears once and after all of its parents.
pub fn validate_order(tables: &[TableSpec]) -> Result<()> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for spec in tables {
        for parent in spec.parents {
            if !seen.contains(parent) {
                return Err(Error::InvalidCatalog(format!(
                    "table '{}' is listed before its parent '{}'",
                    spec.name, parent
                )));
            }
        }
        if !seen.insert(spec.name) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate table name: {}",
                spec.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_respects_foreign_keys() {
        validate_order(&TABLES).expect("catalog should be ordered");
    }

    #[test]
    fn misordered_catalog_is_rejected() {
        let err = validate_order(&[ORDERS, USERS, PRODUCTS]).unwrap_err();
        assert!(err.to_string().contains("before its parent 'users'"));
    }

    #[test]
    fn duplicate_tables_are_rejected() {
        let err = validate_order(&[USERS, USERS]).unwrap_err();
        assert!(err.to_string().contains("duplicate table name: users"));
    }

    #[test]
    fn ddl_declares_every_column() {
        for spec in &TABLES {
            assert!(spec.ddl.contains(&format!("CREATE TABLE {} (", spec.name)));
            for column in spec.columns {
                assert!(
                    spec.ddl.contains(&format!("{column} ")),
                    "{}.{} missing from DDL",
                    spec.name,
                    column
                );
            }
            for parent in spec.parents {
                assert!(spec.ddl.contains(&format!("REFERENCES {parent}(")));
            }
        }
    }
}
