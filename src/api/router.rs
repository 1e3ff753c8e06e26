//! API Router with Swagger UI

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::{ApiResponse, CreateProductRequest, PaginatedResponse, ProductResponse};
use crate::api::handlers::{health, products};
use crate::application::ProductService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Products
        products::list_products,
        products::create_product,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<ProductResponse>,
            // Products
            ProductResponse,
            CreateProductRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health check. Use for availability monitoring."),
        (name = "Products", description = "Product catalog: paginated listing (ordered by price descending) and creation."),
    ),
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "REST API for listing and creating products with offset/limit pagination."
    )
)]
struct ApiDoc;

/// Build the REST API router.
pub fn create_api_router(service: Arc<ProductService>) -> Router {
    let state = products::AppState { service };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let product_routes = Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .with_state(state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Products
        .nest("/api/v1/products", product_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
