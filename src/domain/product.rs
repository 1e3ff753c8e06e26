//! Product domain model and repository interface

use async_trait::async_trait;

use crate::domain::DomainResult;

/// A catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique product ID (assigned by the store)
    pub id: i32,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
}

/// A product candidate that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// Sort mode for product listings.
///
/// `price-descending` is the sole supported mode; the enum exists so the
/// choice lives in configuration instead of being buried in a query chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    PriceDescending,
}

impl SortMode {
    /// Parse the configured sort mode name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price-descending" => Some(Self::PriceDescending),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PriceDescending => write!(f, "price-descending"),
        }
    }
}

/// Data-access interface for products.
///
/// Any store (relational, document, in-memory) can implement this.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Total number of products, unaffected by any window.
    async fn count(&self) -> DomainResult<u64>;

    /// At most `limit` products starting at `offset`, in the given order.
    async fn find_window(&self, offset: u64, limit: u64, order: SortMode)
        -> DomainResult<Vec<Product>>;

    /// Persist a new product and return it with its generated ID.
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
}
