//! Deterministic fixture-driven data generator for the shopgen pipeline.
//!
//! Builds the users/products/orders/reviews/payments dataset from fixed
//! rosters plus two seeded sequences and writes one CSV per table.

pub mod checks;
pub mod engine;
pub mod errors;
pub mod fixtures;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, TableReport};
