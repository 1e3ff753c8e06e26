//! In-memory product store for development and testing

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainResult, NewProduct, Product, ProductRepository, SortMode};

/// DashMap-backed repository. Ties on price break on ID so windows stay
/// stable across requests.
pub struct InMemoryProductRepository {
    products: DashMap<i32, Product>,
    id_counter: AtomicI32,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }

    fn sorted(&self, order: SortMode) -> Vec<Product> {
        let mut all: Vec<Product> = self.products.iter().map(|e| e.value().clone()).collect();
        match order {
            SortMode::PriceDescending => {
                all.sort_by(|a, b| {
                    b.price
                        .partial_cmp(&a.price)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(a.id.cmp(&b.id))
                });
            }
        }
        all
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.products.len() as u64)
    }

    async fn find_window(
        &self,
        offset: u64,
        limit: u64,
        order: SortMode,
    ) -> DomainResult<Vec<Product>> {
        Ok(self
            .sorted(order)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn insert(&self, new: NewProduct) -> DomainResult<Product> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let product = Product {
            id,
            name: new.name,
            price: new.price,
        };
        self.products.insert(id, product.clone());
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();
        let a = repo
            .insert(NewProduct {
                name: "A".into(),
                price: 1.0,
            })
            .await
            .unwrap();
        let b = repo
            .insert(NewProduct {
                name: "B".into(),
                price: 2.0,
            })
            .await
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn window_is_ordered_by_price_descending() {
        let repo = InMemoryProductRepository::new();
        for price in [3.5, 1.25, 9.99] {
            repo.insert(NewProduct {
                name: format!("P{}", price),
                price,
            })
            .await
            .unwrap();
        }
        let window = repo
            .find_window(0, 10, SortMode::PriceDescending)
            .await
            .unwrap();
        let prices: Vec<f64> = window.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![9.99, 3.5, 1.25]);
    }

    #[tokio::test]
    async fn window_honors_offset_and_limit() {
        let repo = InMemoryProductRepository::new();
        for i in 1..=5 {
            repo.insert(NewProduct {
                name: format!("P{}", i),
                price: i as f64,
            })
            .await
            .unwrap();
        }
        let window = repo
            .find_window(2, 2, SortMode::PriceDescending)
            .await
            .unwrap();
        let prices: Vec<f64> = window.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![3.0, 2.0]);
    }
}
