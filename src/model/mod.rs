//! Persisted entities and their schema descriptors.

mod bill;
mod client;
mod order;
mod product;

pub use bill::Bill;
pub use client::Client;
pub use order::{Order, OrderItem, OrderItemView};
pub use product::Product;
