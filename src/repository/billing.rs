//! Billing log: append-only history of finalized orders.

use crate::error::StoreError;
use crate::model::Bill;
use crate::service::CrudService;
use sqlx::SqlitePool;

/// No update or delete surface exists here: bills are write-once.
#[derive(Clone)]
pub struct BillingLog {
    pool: SqlitePool,
}

impl BillingLog {
    pub fn new(pool: SqlitePool) -> Self {
        BillingLog { pool }
    }

    /// Append a bill. Unlike the read paths, billing failures are fatal to
    /// the caller: an order without its log entry is an accounting hole.
    #[tracing::instrument(skip(self, bill), fields(order_id = bill.order_id))]
    pub async fn insert_bill(&self, bill: Bill) -> Result<Bill, StoreError> {
        CrudService::insert(&self.pool, bill).await
    }

    /// Every bill, in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn find_all_bills(&self) -> Result<Vec<Bill>, StoreError> {
        CrudService::find_all(&self.pool).await
    }
}
