//! A client that places orders.

use crate::schema::{ColumnDef, ColumnType, Entity, TableSchema};
use crate::sql::SqlValue;
use serde::{Deserialize, Serialize};

static SCHEMA: TableSchema = TableSchema {
    table: "client",
    columns: &[
        ColumnDef::key("id"),
        ColumnDef::new("name", ColumnType::Text),
        ColumnDef::new("address", ColumnType::Text),
        ColumnDef::new("email", ColumnType::Text),
        ColumnDef::new("phone", ColumnType::Text),
    ],
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl Client {
    /// A client not yet persisted; the store assigns the id on insert.
    pub fn new(name: &str, address: &str, email: &str, phone: &str) -> Self {
        Client {
            id: 0,
            name: name.to_string(),
            address: address.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl Entity for Client {
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
            self.address.as_str().into(),
            self.email.as_str().into(),
            self.phone.as_str().into(),
        ]
    }
}
