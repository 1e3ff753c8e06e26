//! REST API module for the product catalog
//!
//! Provides HTTP endpoints for listing and creating products.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::create_api_router;
