//! # Product Catalog Service
//!
//! Minimal REST API for listing and creating product records with
//! offset/limit pagination, backed by a relational database via SeaORM.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits
//! - **application**: Business logic (paginated listing, creation)
//! - **infrastructure**: External concerns (database, in-memory storage)
//! - **api**: REST API with Swagger documentation

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmProductRepository};

// Re-export API router
pub use api::create_api_router;
