//! Domain layer: core entities, errors and repository traits

pub mod errors;
pub mod product;

pub use errors::{DomainError, DomainResult};
pub use product::{NewProduct, Product, ProductRepository, SortMode};
