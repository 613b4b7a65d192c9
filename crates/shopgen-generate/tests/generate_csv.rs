use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

use shopgen_core::{Dataset, Order, Payment, Product, Review, TABLES, User};
use shopgen_generate::{GenerateOptions, GenerationEngine};

fn hash_file(path: &Path) -> Result<String, std::io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0_u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let mut reader = csv::Reader::from_path(path)
        .unwrap_or_else(|_| panic!("missing csv at {}", path.display()));
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .expect("deserialize rows")
}

fn read_dataset(dir: &Path) -> Dataset {
    Dataset {
        users: read_rows::<User>(&dir.join("users.csv")),
        products: read_rows::<Product>(&dir.join("products.csv")),
        orders: read_rows::<Order>(&dir.join("orders.csv")),
        reviews: read_rows::<Review>(&dir.join("reviews.csv")),
        payments: read_rows::<Payment>(&dir.join("payments.csv")),
    }
}

fn generate_into(dir: &Path) -> shopgen_generate::GenerationResult {
    let mut options = GenerateOptions::default();
    options.out_dir = dir.to_path_buf();
    GenerationEngine::new(options)
        .run()
        .expect("run generation")
}

#[test]
fn generate_is_deterministic() {
    let dir_a = temp_out_dir("run_a");
    let dir_b = temp_out_dir("run_b");

    generate_into(&dir_a);
    generate_into(&dir_b);

    for spec in &TABLES {
        let hash_a = hash_file(&dir_a.join(spec.csv_file)).expect("hash run A");
        let hash_b = hash_file(&dir_b.join(spec.csv_file)).expect("hash run B");
        assert_eq!(hash_a, hash_b, "{} should be deterministic", spec.csv_file);
    }
}

#[test]
fn generate_writes_fifteen_rows_per_table() {
    let dir = temp_out_dir("run_rows");
    let result = generate_into(&dir);

    assert_eq!(result.report.tables.len(), TABLES.len());
    for spec in &TABLES {
        let table = result.report.table(spec.name).expect("table report");
        assert_eq!(table.rows, 15);
        assert_eq!(
            table.bytes_written,
            fs::metadata(dir.join(spec.csv_file)).expect("metadata").len()
        );

        let mut reader = csv::Reader::from_path(dir.join(spec.csv_file)).expect("open csv");
        let headers: Vec<String> = reader
            .headers()
            .expect("headers")
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(headers, spec.columns);
        assert_eq!(reader.records().count(), 15);
    }
}

#[test]
fn written_files_round_trip_to_the_dataset() {
    let dir = temp_out_dir("run_roundtrip");
    let result = generate_into(&dir);

    assert_eq!(read_dataset(&dir), result.dataset);
}

#[test]
fn written_orders_hold_arithmetic_and_references() {
    let dir = temp_out_dir("run_integrity");
    generate_into(&dir);
    let dataset = read_dataset(&dir);

    for order in &dataset.orders {
        assert!(dataset.users.iter().any(|u| u.user_id == order.user_id));
        let product = dataset
            .products
            .iter()
            .find(|p| p.product_id == order.product_id)
            .expect("product exists");
        let expected = u64::from(order.quantity) * product.price.cents();
        assert_eq!(order.order_total.cents(), expected);
    }
    for review in &dataset.reviews {
        assert!(dataset.orders.iter().any(|o| o.order_id == review.order_id));
    }
    for payment in &dataset.payments {
        assert!(dataset.orders.iter().any(|o| o.order_id == payment.order_id));
    }

    let raw = fs::read_to_string(dir.join("products.csv")).expect("read products.csv");
    let mut lines = raw.lines();
    assert_eq!(lines.next(), Some("product_id,name,category,price,in_stock"));
    assert_eq!(lines.next(), Some("P001,Smartwatch,Wearables,149.99,53"));

    let raw = fs::read_to_string(dir.join("orders.csv")).expect("read orders.csv");
    let first = raw.lines().nth(1).expect("first order");
    assert!(first.starts_with("O001,U001,P001,"));
    assert!(first.contains(",2024-02-01,Processing,"));
}

#[test]
fn generate_creates_directory_and_overwrites_files() {
    let dir = temp_out_dir("run_overwrite").join("nested").join("data");
    assert!(!dir.exists());

    generate_into(&dir);
    let first_pass = hash_file(&dir.join("users.csv")).expect("hash");

    fs::write(dir.join("users.csv"), "stale\n".repeat(100)).expect("write stale file");
    generate_into(&dir);

    assert_eq!(hash_file(&dir.join("users.csv")).expect("hash"), first_pass);
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("shopgen_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
