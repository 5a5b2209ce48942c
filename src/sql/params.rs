//! Bind values for dynamically built statements.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteArgumentValue, SqliteTypeInfo};
use std::borrow::Cow;

/// A value that can be bound to a SQLite query. One variant per storage class
/// an entity column can carry.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Storage encoding for timestamps: RFC 3339 with millisecond precision,
    /// always UTC. Decoding goes through sqlx's chrono support.
    pub fn timestamp_text(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(v)
    }
}

impl<'q> Encode<'q, Sqlite> for SqlValue {
    fn encode_by_ref(
        &self,
        args: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            SqlValue::Null => {
                args.push(SqliteArgumentValue::Null);
                IsNull::Yes
            }
            SqlValue::Integer(n) => {
                args.push(SqliteArgumentValue::Int64(*n));
                IsNull::No
            }
            SqlValue::Real(n) => {
                args.push(SqliteArgumentValue::Double(*n));
                IsNull::No
            }
            SqlValue::Text(s) => {
                args.push(SqliteArgumentValue::Text(Cow::Owned(s.clone())));
                IsNull::No
            }
            SqlValue::Timestamp(ts) => {
                args.push(SqliteArgumentValue::Text(Cow::Owned(
                    SqlValue::timestamp_text(ts),
                )));
                IsNull::No
            }
        })
    }
}

impl sqlx::Type<Sqlite> for SqlValue {
    fn type_info() -> SqliteTypeInfo {
        <&str as sqlx::Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}
