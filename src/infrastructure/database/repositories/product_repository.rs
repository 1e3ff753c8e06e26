//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use tracing::info;

use crate::domain::{DomainError, DomainResult, NewProduct, Product, ProductRepository, SortMode};
use crate::infrastructure::database::entities::product;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn model_to_domain(m: product::Model) -> Product {
    Product {
        id: m.id,
        name: m.name,
        price: m.price,
    }
}

// ── SeaOrmProductRepository ─────────────────────────────────────

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn count(&self) -> DomainResult<u64> {
        product::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_window(
        &self,
        offset: u64,
        limit: u64,
        order: SortMode,
    ) -> DomainResult<Vec<Product>> {
        let query = match order {
            SortMode::PriceDescending => {
                product::Entity::find().order_by_desc(product::Column::Price)
            }
        };

        let models = query
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn insert(&self, new: NewProduct) -> DomainResult<Product> {
        let model = product::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(new.name),
            price: Set(new.price),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Product saved: {} ({})", result.name, result.id);
        Ok(model_to_domain(result))
    }
}
