//! Order item repository. Items are written at placement time and never
//! updated afterwards; the stored unit price is a purchase-time snapshot.

use crate::error::StoreError;
use crate::model::OrderItem;
use crate::repository::Crud;
use crate::service::{validation, CrudService};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct OrderItemRepository {
    pool: SqlitePool,
}

impl OrderItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        OrderItemRepository { pool }
    }

    /// Items belonging to one order.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_order(&self, order_id: i64) -> Result<Vec<OrderItem>, StoreError> {
        let sql = r#"SELECT "id", "order_id", "product_id", "quantity", "price" FROM "order_item" WHERE "order_id" = ?1"#;
        tracing::debug!(sql = %sql, order_id, "query");
        Ok(sqlx::query_as(sql)
            .bind(order_id)
            .fetch_all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl Crud<OrderItem> for OrderItemRepository {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<OrderItem>, StoreError> {
        CrudService::find_all(&self.pool).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderItem>, StoreError> {
        CrudService::find_by_id(&self.pool, id).await
    }

    #[tracing::instrument(skip(self, entity), fields(order_id = entity.order_id))]
    async fn insert(&self, entity: OrderItem) -> Result<OrderItem, StoreError> {
        validation::validate_order_item(&entity)?;
        CrudService::insert(&self.pool, entity).await
    }

    async fn update(&self, _entity: OrderItem) -> Result<OrderItem, StoreError> {
        Err(StoreError::Immutable("order item"))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        CrudService::delete::<OrderItem>(&self.pool, id).await
    }
}
