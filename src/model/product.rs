//! A product held in stock.

use crate::schema::{ColumnDef, ColumnType, Entity, TableSchema};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};

static SCHEMA: TableSchema = TableSchema {
    table: "product",
    columns: &[
        ColumnDef::key("id"),
        ColumnDef::new("name", ColumnType::Text),
        ColumnDef::new("price", ColumnType::Real),
        ColumnDef::new("stock", ColumnType::Integer),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price. Snapshotted onto order items at purchase time.
    pub price: f64,
    /// Units on hand, in whole units.
    pub stock: i64,
}

impl Product {
    pub fn new(name: &str, price: f64, stock: i64) -> Self {
        Product {
            id: 0,
            name: name.to_string(),
            price,
            stock,
        }
    }
}

impl Entity for Product {
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
            self.name.as_str().into(),
            self.price.into(),
            self.stock.into(),
        ]
    }
}
