//! Product application service: paginated listing and creation

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainResult, NewProduct, Product, ProductRepository, SortMode};
use crate::shared::{PageRequest, PaginatedResult};

/// Application service for the product catalog.
///
/// Holds no per-request state; every call is independent. The sort mode is
/// fixed at construction time from configuration.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    sort: SortMode,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, sort: SortMode) -> Self {
        Self { repository, sort }
    }

    /// List one page of products.
    ///
    /// Issues a total-count query and a windowed fetch at
    /// `(page - 1) * limit`, then echoes `page`/`limit` back in the
    /// envelope. `total_count` always reflects the full collection size.
    pub async fn list(&self, request: PageRequest) -> DomainResult<PaginatedResult<Product>> {
        let offset = request.offset();
        debug!(
            page = request.page,
            limit = request.limit,
            offset,
            "Listing products"
        );

        let total_count = self.repository.count().await?;
        let data = self
            .repository
            .find_window(offset, request.limit as u64, self.sort)
            .await?;

        Ok(PaginatedResult::new(
            data,
            request.page,
            request.limit,
            total_count,
        ))
    }

    /// Persist a new product and return it with its generated ID.
    pub async fn create(&self, product: NewProduct) -> DomainResult<Product> {
        let created = self.repository.insert(product).await?;
        debug!(id = created.id, name = %created.name, "Product created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryProductRepository;

    fn service_with(repo: Arc<InMemoryProductRepository>) -> ProductService {
        ProductService::new(repo, SortMode::PriceDescending)
    }

    /// Seed `n` products with prices 1.0, 2.0, ... n.0
    async fn seed(repo: &InMemoryProductRepository, n: u32) {
        for i in 1..=n {
            repo.insert(NewProduct {
                name: format!("Product {}", i),
                price: i as f64,
            })
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn first_page_holds_highest_prices() {
        let repo = Arc::new(InMemoryProductRepository::new());
        seed(&repo, 25).await;
        let service = service_with(repo);

        let page = service
            .list(PageRequest { page: 1, limit: 10 })
            .await
            .unwrap();

        assert_eq!(page.data.len(), 10);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        let prices: Vec<f64> = page.data.iter().map(|p| p.price).collect();
        let expected: Vec<f64> = (16..=25).rev().map(|i| i as f64).collect();
        assert_eq!(prices, expected);
    }

    #[tokio::test]
    async fn last_partial_page_holds_remainder() {
        let repo = Arc::new(InMemoryProductRepository::new());
        seed(&repo, 25).await;
        let service = service_with(repo);

        let page = service
            .list(PageRequest { page: 3, limit: 10 })
            .await
            .unwrap();

        assert_eq!(page.data.len(), 5);
        assert_eq!(page.total_count, 25);
        let prices: Vec<f64> = page.data.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[tokio::test]
    async fn empty_collection_yields_empty_page() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let service = service_with(repo);

        let page = service
            .list(PageRequest { page: 1, limit: 10 })
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_with_full_count() {
        let repo = Arc::new(InMemoryProductRepository::new());
        seed(&repo, 5).await;
        let service = service_with(repo);

        let page = service
            .list(PageRequest { page: 4, limit: 10 })
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total_count, 5);
    }

    #[tokio::test]
    async fn create_assigns_id_and_grows_count() {
        let repo = Arc::new(InMemoryProductRepository::new());
        seed(&repo, 3).await;
        let service = service_with(repo.clone());

        let before = service
            .list(PageRequest { page: 1, limit: 10 })
            .await
            .unwrap()
            .total_count;

        let created = service
            .create(NewProduct {
                name: "Widget".to_string(),
                price: 9.99,
            })
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.name, "Widget");
        assert_eq!(created.price, 9.99);

        let after = service
            .list(PageRequest { page: 1, limit: 10 })
            .await
            .unwrap()
            .total_count;
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    async fn ties_on_price_do_not_drop_items_across_pages() {
        let repo = Arc::new(InMemoryProductRepository::new());
        for i in 0..4 {
            repo.insert(NewProduct {
                name: format!("Same {}", i),
                price: 5.0,
            })
            .await
            .unwrap();
        }
        let service = service_with(repo);

        let first = service
            .list(PageRequest { page: 1, limit: 2 })
            .await
            .unwrap();
        let second = service
            .list(PageRequest { page: 2, limit: 2 })
            .await
            .unwrap();

        assert_eq!(first.data.len(), 2);
        assert_eq!(second.data.len(), 2);
        assert_eq!(first.total_count, 4);
    }
}
