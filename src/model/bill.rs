//! Billing log entries: one per finalized order, write-once.

use crate::schema::{ColumnDef, ColumnType, Entity, TableSchema};
use crate::sql::SqlValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

static SCHEMA: TableSchema = TableSchema {
    table: "log",
    columns: &[
        // No REFERENCES here: the log is denormalized history and must
        // survive deletion of the order it snapshots.
        ColumnDef::key("id"),
        ColumnDef::new("order_id", ColumnType::Integer),
        ColumnDef::new("client_id", ColumnType::Integer),
        ColumnDef::new("client_name", ColumnType::Text),
        ColumnDef::new("order_date", ColumnType::Timestamp),
        ColumnDef::new("total_amount", ColumnType::Real),
    ],
};

/// Denormalized snapshot of a finalized order. `client_name` is copied at
/// placement time so later client edits never change billing history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bill {
    pub id: i64,
    pub order_id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
}

impl Bill {
    pub fn new(
        order_id: i64,
        client_id: i64,
        client_name: &str,
        order_date: DateTime<Utc>,
        total_amount: f64,
    ) -> Self {
        Bill {
            id: 0,
            order_id,
            client_id,
            client_name: client_name.to_string(),
            order_date,
            total_amount,
        }
    }
}

impl Entity for Bill {
    fn schema() -> &'static TableSchema {
        &SCHEMA
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_values(&self) -> Vec<SqlValue> {
        vec![
            self.order_id.into(),
            self.client_id.into(),
            self.client_name.as_str().into(),
            self.order_date.into(),
            self.total_amount.into(),
        ]
    }
}
