use std::path::PathBuf;
use std::time::Instant;

use chrono::Days;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{info, warn};

use shopgen_core::catalog::{ORDERS, PAYMENTS, PRODUCTS, REVIEWS, USERS};
use shopgen_core::{Dataset, Order, Payment, Product, Review, TableSpec, User};

use crate::checks::check_dataset;
use crate::errors::GenerationError;
use crate::fixtures::{
    self, EMAIL_DOMAIN, IN_STOCK_BASE, IN_STOCK_STEP, JOIN_DATE_STEP_DAYS, LOYALTY_TIERS,
    ORDER_STATUSES, PAYMENT_METHODS, PAYMENT_STATUSES, QUANTITY_RANGE, RATING_RANGE,
    REVIEW_COMMENTS, ROW_COUNT, USER_NAMES, cycle, record_id,
};
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::write_table_csv;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating the CSV dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Build, check and write the dataset, overwriting existing CSV files.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let out_dir = self.options.out_dir.clone();

        info!(
            out_dir = %out_dir.display(),
            order_seed = self.options.order_seed,
            review_seed = self.options.review_seed,
            "generation started"
        );

        let dataset = build_dataset(&self.options);

        let violations = check_dataset(&dataset);
        if let Some(first) = violations.first() {
            warn!(violations = violations.len(), "dataset failed checks");
            return Err(GenerationError::InvalidDataset(format!(
                "{} violation(s), first at {}: {}",
                violations.len(),
                first.path,
                first.message
            )));
        }

        std::fs::create_dir_all(&out_dir)?;

        let mut report = GenerationReport::default();
        report.record_table(self.write_table(&USERS, &dataset.users)?);
        report.record_table(self.write_table(&PRODUCTS, &dataset.products)?);
        report.record_table(self.write_table(&ORDERS, &dataset.orders)?);
        report.record_table(self.write_table(&REVIEWS, &dataset.reviews)?);
        report.record_table(self.write_table(&PAYMENTS, &dataset.payments)?);

        info!(
            tables = report.tables.len(),
            rows = report.total_rows(),
            bytes = report.total_bytes(),
            duration_ms = start.elapsed().as_millis(),
            "generation finished"
        );

        Ok(GenerationResult {
            out_dir,
            dataset,
            report,
        })
    }

    fn write_table<T: Serialize>(
        &self,
        spec: &TableSpec,
        rows: &[T],
    ) -> Result<TableReport, GenerationError> {
        let path = self.options.out_dir.join(spec.csv_file);
        let bytes_written = write_table_csv(&path, spec, rows)?;
        info!(table = spec.name, rows = rows.len(), path = %path.display(), "table written");
        Ok(TableReport {
            table: spec.name.to_string(),
            path,
            rows: rows.len() as u64,
            bytes_written,
        })
    }
}

/// Build the full dataset in memory. Pure: same options, same dataset.
pub fn build_dataset(options: &GenerateOptions) -> Dataset {
    let users = generate_users();
    let products = generate_products();
    let orders = generate_orders(&users, &products, options.order_seed);
    let reviews = generate_reviews(&orders, options.review_seed);
    let payments = generate_payments(&orders);

    Dataset {
        users,
        products,
        orders,
        reviews,
        payments,
    }
}

pub fn generate_users() -> Vec<User> {
    let base_date = fixtures::users_base_date();

    USER_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| User {
            user_id: record_id("U", idx + 1),
            name: name.to_string(),
            email: format!("{}@{EMAIL_DOMAIN}", name.to_lowercase().replace(' ', ".")),
            join_date: base_date + Days::new(idx as u64 * JOIN_DATE_STEP_DAYS),
            loyalty_tier: cycle(&LOYALTY_TIERS, idx),
        })
        .collect()
}

pub fn generate_products() -> Vec<Product> {
    fixtures::PRODUCTS
        .iter()
        .enumerate()
        .map(|(idx, fixture)| {
            let position = idx + 1;
            Product {
                product_id: record_id("P", position),
                name: fixture.name.to_string(),
                category: fixture.category.to_string(),
                price: fixture.price,
                in_stock: IN_STOCK_BASE + position as u32 * IN_STOCK_STEP,
            }
        })
        .collect()
}

/// Orders pair user `i` with product `i`; quantities come from the order
/// sequence.
pub fn generate_orders(users: &[User], products: &[Product], seed: u64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let base_date = fixtures::orders_base_date();

    users
        .iter()
        .zip(products)
        .take(ROW_COUNT)
        .enumerate()
        .map(|(idx, (user, product))| {
            let quantity = rng.random_range(QUANTITY_RANGE);
            Order {
                order_id: record_id("O", idx + 1),
                user_id: user.user_id.clone(),
                product_id: product.product_id.clone(),
                quantity,
                order_date: base_date + Days::new(idx as u64),
                status: cycle(&ORDER_STATUSES, idx),
                order_total: product.price.times(quantity),
            }
        })
        .collect()
}

/// One review per order; ratings come from the review sequence.
pub fn generate_reviews(orders: &[Order], seed: u64) -> Vec<Review> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let base_date = fixtures::reviews_base_date();

    orders
        .iter()
        .enumerate()
        .map(|(idx, order)| Review {
            review_id: record_id("R", idx + 1),
            order_id: order.order_id.clone(),
            rating: rng.random_range(RATING_RANGE),
            comment: cycle(&REVIEW_COMMENTS, idx).to_string(),
            review_date: base_date + Days::new(idx as u64),
        })
        .collect()
}

/// One payment per order, charging exactly the order total.
pub fn generate_payments(orders: &[Order]) -> Vec<Payment> {
    orders
        .iter()
        .enumerate()
        .map(|(idx, order)| Payment {
            payment_id: record_id("PM", idx + 1),
            order_id: order.order_id.clone(),
            amount: order.order_total,
            method: cycle(&PAYMENT_METHODS, idx),
            payment_status: cycle(&PAYMENT_STATUSES, idx),
        })
        .collect()
}
