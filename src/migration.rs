//! DDL for the entity tables, derived from the same schema descriptors the
//! mapper builds its statements from. One source of truth for the layout.

use crate::error::StoreError;
use crate::model::{Bill, Client, Order, OrderItem, Product};
use crate::schema::{Entity, TableSchema};
use sqlx::SqlitePool;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn entity_schemas() -> [&'static TableSchema; 5] {
    // Referenced tables first; SQLite records the clauses either way, but
    // the order reads as the dependency graph.
    [
        Client::schema(),
        Product::schema(),
        Order::schema(),
        OrderItem::schema(),
        Bill::schema(),
    ]
}

fn create_table_sql(schema: &TableSchema) -> String {
    let mut defs = Vec::with_capacity(schema.columns.len());
    for c in schema.columns {
        if c.pk {
            defs.push(format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", quote(c.name)));
            continue;
        }
        let mut def = format!("{} {}", quote(c.name), c.ty.sql_type());
        if !c.nullable {
            def.push_str(" NOT NULL");
        }
        if let Some(table) = c.references {
            def.push_str(&format!(" REFERENCES {} ({})", quote(table), quote("id")));
        }
        defs.push(def);
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote(schema.table),
        defs.join(", ")
    )
}

/// Create every entity table. Idempotent.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), StoreError> {
    for schema in entity_schemas() {
        let ddl = create_table_sql(schema);
        tracing::debug!(sql = %ddl, "migrate");
        sqlx::query(&ddl).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ddl() {
        assert_eq!(
            create_table_sql(Product::schema()),
            r#"CREATE TABLE IF NOT EXISTS "product" ("id" INTEGER PRIMARY KEY AUTOINCREMENT, "name" TEXT NOT NULL, "price" REAL NOT NULL, "stock" INTEGER NOT NULL)"#
        );
    }

    #[test]
    fn order_item_ddl_declares_references() {
        let ddl = create_table_sql(OrderItem::schema());
        assert!(ddl.contains(r#""order_id" INTEGER NOT NULL REFERENCES "orders" ("id")"#));
        assert!(ddl.contains(r#""product_id" INTEGER NOT NULL REFERENCES "product" ("id")"#));
    }
}
