//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from a table schema.

use crate::schema::TableSchema;

/// Quote identifier for SQLite (safe: names come from schema descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list(schema: &TableSchema) -> String {
    schema
        .columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `SELECT <cols> FROM <table>`, rows in store order.
pub fn select_all(schema: &TableSchema) -> String {
    format!(
        "SELECT {} FROM {}",
        select_column_list(schema),
        quoted(schema.table)
    )
}

/// Single-row lookup by key. Caller binds the id as the sole parameter.
pub fn select_by_id(schema: &TableSchema) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?1",
        select_column_list(schema),
        quoted(schema.table),
        quoted(schema.pk())
    )
}

/// INSERT over every non-key column, one placeholder per column in schema
/// order. The key column is never inserted; the store assigns the rowid.
pub fn insert(schema: &TableSchema) -> String {
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (i, c) in schema.value_columns().enumerate() {
        cols.push(quoted(c.name));
        placeholders.push(format!("?{}", i + 1));
    }
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(schema.table),
        cols.join(", "),
        placeholders.join(", ")
    )
}

/// `UPDATE <table> SET c = ?, ... WHERE <pk> = ?` over every non-key column.
/// The id binds last, after the SET values.
pub fn update(schema: &TableSchema) -> String {
    let mut sets = Vec::new();
    let mut n = 0;
    for c in schema.value_columns() {
        n += 1;
        sets.push(format!("{} = ?{}", quoted(c.name), n));
    }
    format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        quoted(schema.table),
        sets.join(", "),
        quoted(schema.pk()),
        n + 1
    )
}

/// DELETE by key. Caller binds the id as the sole parameter.
pub fn delete(schema: &TableSchema) -> String {
    format!(
        "DELETE FROM {} WHERE {} = ?1",
        quoted(schema.table),
        quoted(schema.pk())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnDef, ColumnType};

    static SCHEMA: TableSchema = TableSchema {
        table: "widget",
        columns: &[
            ColumnDef::key("id"),
            ColumnDef::new("name", ColumnType::Text),
            ColumnDef::new("price", ColumnType::Real),
            ColumnDef::new("stock", ColumnType::Integer),
        ],
    };

    #[test]
    fn select_all_lists_every_column() {
        assert_eq!(
            select_all(&SCHEMA),
            r#"SELECT "id", "name", "price", "stock" FROM "widget""#
        );
    }

    #[test]
    fn select_by_id_filters_on_key() {
        assert_eq!(
            select_by_id(&SCHEMA),
            r#"SELECT "id", "name", "price", "stock" FROM "widget" WHERE "id" = ?1"#
        );
    }

    #[test]
    fn insert_skips_key_column() {
        assert_eq!(
            insert(&SCHEMA),
            r#"INSERT INTO "widget" ("name", "price", "stock") VALUES (?1, ?2, ?3)"#
        );
    }

    #[test]
    fn update_sets_values_then_binds_id_last() {
        assert_eq!(
            update(&SCHEMA),
            r#"UPDATE "widget" SET "name" = ?1, "price" = ?2, "stock" = ?3 WHERE "id" = ?4"#
        );
    }

    #[test]
    fn delete_targets_single_row() {
        assert_eq!(delete(&SCHEMA), r#"DELETE FROM "widget" WHERE "id" = ?1"#);
    }
}
