//! Compile-time entity descriptors: table name, columns, key column.
//!
//! Every persisted type declares a [`TableSchema`] and the generic mapper
//! derives all SQL from it. Column names equal field names, so a row decodes
//! straight into the entity via `sqlx::FromRow`.

use crate::sql::SqlValue;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// Storage class of a column, for DDL generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    /// RFC 3339 text in storage, `chrono::DateTime<Utc>` in entities.
    Timestamp,
}

impl ColumnType {
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text | ColumnType::Timestamp => "TEXT",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    /// Store-assigned rowid key. Excluded from INSERT and UPDATE SET lists.
    pub pk: bool,
    /// `REFERENCES <table> (id)` target, for DDL.
    pub references: Option<&'static str>,
}

impl ColumnDef {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        ColumnDef {
            name,
            ty,
            nullable: false,
            pk: false,
            references: None,
        }
    }

    pub const fn key(name: &'static str) -> Self {
        ColumnDef {
            name,
            ty: ColumnType::Integer,
            nullable: false,
            pk: true,
            references: None,
        }
    }

    pub const fn foreign(name: &'static str, table: &'static str) -> Self {
        ColumnDef {
            name,
            ty: ColumnType::Integer,
            nullable: false,
            pk: false,
            references: Some(table),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableSchema {
    pub table: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableSchema {
    /// Single key column name. Schemas are declared with exactly one.
    pub fn pk(&self) -> &'static str {
        self.columns
            .iter()
            .find(|c| c.pk)
            .map(|c| c.name)
            .unwrap_or("id")
    }

    /// Columns written on INSERT/UPDATE, in declaration order.
    pub fn value_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| !c.pk)
    }
}

/// A persisted record with a store-assigned integer identifier.
///
/// `bind_values` must yield one [`SqlValue`] per non-key column, in the order
/// the schema declares them; the builder relies on that pairing.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin {
    fn schema() -> &'static TableSchema;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    fn bind_values(&self) -> Vec<SqlValue>;
}
