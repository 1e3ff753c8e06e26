//! Product REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{ApiResponse, CreateProductRequest, PaginatedResponse, ProductResponse};
use crate::application::ProductService;
use crate::domain::NewProduct;
use crate::shared::PageQuery;

/// Product handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProductService>,
}

/// List products
///
/// Returns one page of products ordered by price descending.
/// `totalCount` is the full collection size regardless of the window.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of products", body = PaginatedResponse<ProductResponse>),
        (status = 400, description = "Invalid pagination parameters")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PaginatedResponse<ProductResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let request = query.normalize().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(e.to_string())),
        )
    })?;

    match state.service.list(request).await {
        Ok(result) => Ok(Json(result.into())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to list products: {}", e))),
        )),
    }
}

/// Create a product
///
/// Persists the candidate record and returns it with its generated ID.
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), (StatusCode, Json<ApiResponse<()>>)> {
    let candidate = NewProduct {
        name: req.name,
        price: req.price,
    };

    match state.service.create(candidate).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created.into()))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to create product: {}", e))),
        )),
    }
}
