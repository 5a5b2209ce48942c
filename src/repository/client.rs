//! Client repository.

use crate::error::StoreError;
use crate::model::Client;
use crate::repository::Crud;
use crate::service::{validation, CrudService};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ClientRepository { pool }
    }
}

#[async_trait]
impl Crud<Client> for ClientRepository {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Client>, StoreError> {
        CrudService::find_all(&self.pool).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, StoreError> {
        CrudService::find_by_id(&self.pool, id).await
    }

    #[tracing::instrument(skip(self, entity), fields(name = %entity.name))]
    async fn insert(&self, entity: Client) -> Result<Client, StoreError> {
        validation::validate_client(&entity)?;
        CrudService::insert(&self.pool, entity).await
    }

    #[tracing::instrument(skip(self, entity), fields(id = entity.id))]
    async fn update(&self, entity: Client) -> Result<Client, StoreError> {
        validation::validate_client(&entity)?;
        CrudService::update(&self.pool, entity).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        CrudService::delete::<Client>(&self.pool, id).await
    }
}
