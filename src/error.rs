//! Typed errors for every store and service operation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("insufficient stock for product {product_id}: requested {requested}")]
    InsufficientStock { product_id: i64, requested: i64 },
    #[error("{0} is immutable once written")]
    Immutable(&'static str),
    #[error("config: {0}")]
    Config(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl StoreError {
    /// True when the error means the referenced row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound(_) | StoreError::Db(sqlx::Error::RowNotFound)
        )
    }
}
