//! Field validation, applied before any store call.

use crate::error::StoreError;
use crate::model::{Client, Order, OrderItem, Product};

fn non_blank(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{} cannot be blank", field)));
    }
    Ok(())
}

fn email(field: &str, value: &str) -> Result<(), StoreError> {
    if !value.contains('@') || value.len() < 3 {
        return Err(StoreError::Validation(format!(
            "{} must be a valid email",
            field
        )));
    }
    Ok(())
}

fn min_length(field: &str, value: &str, min: usize) -> Result<(), StoreError> {
    if value.len() < min {
        return Err(StoreError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

fn at_least_f64(field: &str, value: f64, min: f64) -> Result<(), StoreError> {
    if value < min {
        return Err(StoreError::Validation(format!(
            "{} must be at least {}",
            field, min
        )));
    }
    Ok(())
}

fn positive(field: &str, value: i64) -> Result<(), StoreError> {
    if value <= 0 {
        return Err(StoreError::Validation(format!(
            "{} must be greater than 0",
            field
        )));
    }
    Ok(())
}

pub fn validate_client(client: &Client) -> Result<(), StoreError> {
    non_blank("name", &client.name)?;
    non_blank("address", &client.address)?;
    email("email", &client.email)?;
    min_length("phone", &client.phone, 10)?;
    Ok(())
}

pub fn validate_product(product: &Product) -> Result<(), StoreError> {
    non_blank("name", &product.name)?;
    at_least_f64("price", product.price, 0.0)?;
    if product.stock < 0 {
        return Err(StoreError::Validation("stock cannot be negative".into()));
    }
    Ok(())
}

pub fn validate_order(order: &Order) -> Result<(), StoreError> {
    positive("client_id", order.client_id)
}

pub fn validate_order_item(item: &OrderItem) -> Result<(), StoreError> {
    positive("quantity", item.quantity)?;
    at_least_f64("price", item.price, 0.0)?;
    Ok(())
}
