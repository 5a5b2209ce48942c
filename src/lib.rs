//! orderdesk-store: persistence and business layer for a desktop
//! order-management tool, over an embedded SQLite database.
//!
//! One generic CRUD engine ([`CrudService`]) serves every entity; each
//! entity declares a compile-time [`schema::TableSchema`] the engine derives
//! its SQL from. Per-entity repositories add validation and the few
//! operations that are not table-agnostic, and [`OrderService`] runs the
//! multi-step order placement inside a single transaction.

pub mod config;
pub mod error;
pub mod migration;
pub mod model;
pub mod repository;
pub mod schema;
pub mod service;
pub mod sql;

pub use config::StoreConfig;
pub use error::StoreError;
pub use migration::apply_migrations;
pub use model::{Bill, Client, Order, OrderItem, OrderItemView, Product};
pub use repository::{
    BillingLog, ClientRepository, Crud, OrderItemRepository, OrderRepository, ProductRepository,
};
pub use schema::{ColumnDef, ColumnType, Entity, TableSchema};
pub use service::{CartLine, CrudService, OrderService, PlacedOrder};
