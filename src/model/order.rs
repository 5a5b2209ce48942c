//! Orders and their line items.

use crate::schema::{ColumnDef, ColumnType, Entity, TableSchema};
use crate::sql::SqlValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// "order" is a reserved word; the table keeps the plural name.
static ORDER_SCHEMA: TableSchema = TableSchema {
    table: "orders",
    columns: &[
        ColumnDef::key("id"),
        ColumnDef::foreign("client_id", "client"),
        ColumnDef::new("order_date", ColumnType::Timestamp),
        ColumnDef::new("total_amount", ColumnType::Real),
    ],
};

static ITEM_SCHEMA: TableSchema = TableSchema {
    table: "order_item",
    columns: &[
        ColumnDef::key("id"),
        ColumnDef::foreign("order_id", "orders"),
        ColumnDef::foreign("product_id", "product"),
        ColumnDef::new("quantity", ColumnType::Integer),
        ColumnDef::new("price", ColumnType::Real),
    ],
};

/// A placed order. `total_amount` is the sum of quantity x unit price over
/// its items, computed at placement time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
}

impl Order {
    pub fn new(client_id: i64, order_date: DateTime<Utc>, total_amount: f64) -> Self {
        Order {
            id: 0,
            client_id,
            order_date,
            total_amount,
        }
    }
}

impl Entity for Order {
    fn schema() -> &'static TableSchema {
        &ORDER_SCHEMA
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_values(&self) -> Vec<SqlValue> {
        vec![
            self.client_id.into(),
            self.order_date.into(),
            self.total_amount.into(),
        ]
    }
}

/// One line of an order. `price` is the unit price at the time of purchase,
/// not re-read from the product later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}

impl OrderItem {
    pub fn new(order_id: i64, product_id: i64, quantity: i64, price: f64) -> Self {
        OrderItem {
            id: 0,
            order_id,
            product_id,
            quantity,
            price,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

impl Entity for OrderItem {
    fn schema() -> &'static TableSchema {
        &ITEM_SCHEMA
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
            self.product_id.into(),
            self.quantity.into(),
            self.price.into(),
        ]
    }
}

/// Order line joined with the product name, for listing and reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItemView {
    pub order_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
}
