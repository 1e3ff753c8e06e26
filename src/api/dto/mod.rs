//! API DTOs

pub mod common;
pub mod product;

pub use common::{ApiResponse, PaginatedResponse};
pub use product::{CreateProductRequest, ProductResponse};
