//! Full-refresh loader: CSV files into the SQLite pipeline schema.

pub mod errors;
pub mod loader;
pub mod model;
pub mod source;
pub mod sqlite;

pub use errors::LoadError;
pub use loader::load_database;
pub use model::{LoadReport, TableLoad};
