//! Shared contracts for the shopgen pipeline.
//!
//! This crate defines the record types, the table catalog, the column
//! converters and the path/config layer used by the generator, the loader
//! and the reporter.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;

pub use catalog::{TABLES, TableSpec, validate_order};
pub use config::{CONFIG_FILE, GenerateSettings, PipelineConfig, PipelinePaths};
pub use convert::{FieldKind, FieldValue, convert_field, field_kind};
pub use error::{Error, Result};
pub use model::{
    Dataset, LoyaltyTier, Money, Order, OrderStatus, Payment, PaymentMethod, PaymentStatus,
    Product, Review, User,
};
