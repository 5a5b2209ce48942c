//! CrudService: generic CRUD engine; OrderService: transactional order placement.

mod crud;
mod orders;
pub mod validation;
pub use crud::CrudService;
pub use orders::{CartLine, OrderService, PlacedOrder};
