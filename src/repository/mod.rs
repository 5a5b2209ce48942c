//! Per-entity repositories over the generic CRUD engine.
//!
//! [`Crud`] is the complete surface the UI/business layers depend on; each
//! repository validates input, then delegates to
//! [`CrudService`](crate::service::CrudService).

mod billing;
mod client;
mod order;
mod order_item;
mod product;

pub use billing::BillingLog;
pub use client::ClientRepository;
pub use order::OrderRepository;
pub use order_item::OrderItemRepository;
pub use product::ProductRepository;

use crate::error::StoreError;
use crate::schema::Entity;
use async_trait::async_trait;

/// Table-agnostic CRUD surface: every entity repository exposes exactly this.
#[async_trait]
pub trait Crud<T: Entity + 'static>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, StoreError>;

    /// Insert after validation; the returned entity carries the generated id.
    async fn insert(&self, entity: T) -> Result<T, StoreError>;

    /// Update the row matching the entity's id after validation.
    async fn update(&self, entity: T) -> Result<T, StoreError>;

    /// Delete by id. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
