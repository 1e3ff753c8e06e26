//! Product DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::dto::PaginatedResponse;
use crate::domain::Product;
use crate::shared::PaginatedResult;

/// A catalog product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    /// Unique product ID
    pub id: i32,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}

/// Request to create a product
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
}

impl From<PaginatedResult<Product>> for PaginatedResponse<ProductResponse> {
    fn from(result: PaginatedResult<Product>) -> Self {
        Self {
            data: result.data.into_iter().map(Into::into).collect(),
            page: result.page,
            limit: result.limit,
            total_count: result.total_count,
        }
    }
}
