//! Infrastructure layer: database and storage implementations

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, SeaOrmProductRepository};
pub use storage::InMemoryProductRepository;
