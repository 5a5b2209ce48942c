//! Order repository.
//!
//! Orders are placed through [`OrderService`](crate::service::OrderService)
//! and are immutable afterwards; this repository covers listing, lookup, and
//! deletion. Deleting an order removes its items in the same transaction.
//! Bills are deliberately left in place: the billing log is history.

use crate::error::StoreError;
use crate::model::{Order, OrderItemView};
use crate::repository::Crud;
use crate::service::{validation, CrudService};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Order lines joined with product names, for display.
    #[tracing::instrument(skip(self))]
    pub async fn item_views(&self, order_id: i64) -> Result<Vec<OrderItemView>, StoreError> {
        let sql = r#"
            SELECT i."order_id", p."name" AS "product_name", i."quantity", i."price"
            FROM "order_item" i
            JOIN "product" p ON p."id" = i."product_id"
            WHERE i."order_id" = ?1
        "#;
        tracing::debug!(sql = %sql, order_id, "query");
        Ok(sqlx::query_as(sql)
            .bind(order_id)
            .fetch_all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl Crud<Order> for OrderRepository {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        CrudService::find_all(&self.pool).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, StoreError> {
        CrudService::find_by_id(&self.pool, id).await
    }

    #[tracing::instrument(skip(self, entity), fields(client_id = entity.client_id))]
    async fn insert(&self, entity: Order) -> Result<Order, StoreError> {
        validation::validate_order(&entity)?;
        CrudService::insert(&self.pool, entity).await
    }

    async fn update(&self, _entity: Order) -> Result<Order, StoreError> {
        Err(StoreError::Immutable("order"))
    }

    /// Delete the order and its items in one transaction.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;
        let sql = r#"DELETE FROM "order_item" WHERE "order_id" = ?1"#;
        tracing::debug!(sql = %sql, order_id = id, "delete");
        sqlx::query(sql).bind(id).execute(&mut *tx).await?;
        let removed = CrudService::delete_on::<Order>(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(removed)
    }
}
