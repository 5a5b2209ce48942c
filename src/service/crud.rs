//! Generic CRUD execution against SQLite.
//!
//! One engine, many entities: every statement is derived from the entity's
//! [`TableSchema`](crate::schema::TableSchema) by the SQL builder. "No rows"
//! and "operation failed" are distinct outcomes; errors always propagate.

use crate::error::StoreError;
use crate::schema::Entity;
use crate::sql;
use sqlx::{SqliteConnection, SqlitePool};

pub struct CrudService;

impl CrudService {
    /// All rows of the entity's table, in store order. Empty vec when none.
    pub async fn find_all<E: Entity>(pool: &SqlitePool) -> Result<Vec<E>, StoreError> {
        let sql = sql::select_all(E::schema());
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, E>(&sql).fetch_all(pool).await?)
    }

    /// Single-row lookup by key. `None` when the id does not exist.
    pub async fn find_by_id<E: Entity>(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<E>, StoreError> {
        let sql = sql::select_by_id(E::schema());
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Single-row lookup on an explicit connection, for use inside a transaction.
    pub async fn find_by_id_on<E: Entity>(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<E>, StoreError> {
        let sql = sql::select_by_id(E::schema());
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?)
    }

    /// Insert the entity and read the store-assigned rowid back into it.
    pub async fn insert<E: Entity>(pool: &SqlitePool, entity: E) -> Result<E, StoreError> {
        let mut conn = pool.acquire().await?;
        Self::insert_on(&mut *conn, entity).await
    }

    /// Insert on an explicit connection, for use inside a transaction.
    pub async fn insert_on<E: Entity>(
        conn: &mut SqliteConnection,
        mut entity: E,
    ) -> Result<E, StoreError> {
        let sql = sql::insert(E::schema());
        tracing::debug!(sql = %sql, "insert");
        let mut query = sqlx::query(&sql);
        for v in entity.bind_values() {
            query = query.bind(v);
        }
        let result = query.execute(&mut *conn).await?;
        entity.set_id(result.last_insert_rowid());
        Ok(entity)
    }

    /// Update every non-key column of the row matching the entity's id.
    /// Errors with `NotFound` when no row matched.
    pub async fn update<E: Entity>(pool: &SqlitePool, entity: E) -> Result<E, StoreError> {
        let sql = sql::update(E::schema());
        tracing::debug!(sql = %sql, id = entity.id(), "update");
        let mut query = sqlx::query(&sql);
        for v in entity.bind_values() {
            query = query.bind(v);
        }
        let result = query.bind(entity.id()).execute(pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!(
                "no {} with id {}",
                E::schema().table,
                entity.id()
            )));
        }
        Ok(entity)
    }

    /// Delete by key. Returns whether a row was actually removed.
    pub async fn delete<E: Entity>(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
        let mut conn = pool.acquire().await?;
        Self::delete_on::<E>(&mut *conn, id).await
    }

    /// Delete on an explicit connection, for use inside a transaction.
    pub async fn delete_on<E: Entity>(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<bool, StoreError> {
        let sql = sql::delete(E::schema());
        tracing::debug!(sql = %sql, id, "delete");
        let result = sqlx::query(&sql).bind(id).execute(&mut *conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
