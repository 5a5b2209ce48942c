//! Product repository.

use crate::error::StoreError;
use crate::model::Product;
use crate::repository::Crud;
use crate::service::{validation, CrudService};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }
}

#[async_trait]
impl Crud<Product> for ProductRepository {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        CrudService::find_all(&self.pool).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        CrudService::find_by_id(&self.pool, id).await
    }

    #[tracing::instrument(skip(self, entity), fields(name = %entity.name))]
    async fn insert(&self, entity: Product) -> Result<Product, StoreError> {
        validation::validate_product(&entity)?;
        CrudService::insert(&self.pool, entity).await
    }

    #[tracing::instrument(skip(self, entity), fields(id = entity.id))]
    async fn update(&self, entity: Product) -> Result<Product, StoreError> {
        validation::validate_product(&entity)?;
        CrudService::update(&self.pool, entity).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        CrudService::delete::<Product>(&self.pool, id).await
    }
}
