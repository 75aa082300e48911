//! Table Orders Module Implementation
//!
//! Orders REST API, menu snapshot, per-table QR codes and the `SeaORM` order
//! store. The public models are defined in `table-orders-sdk` and re-exported
//! here.

pub use table_orders_sdk::{NewOrder, NewOrderLine, Order, OrderItem, OrderStatus, TableNumber};

pub mod module;
pub use module::TableOrdersModule;

pub mod api;
pub mod config;
#[doc(hidden)]
pub mod domain;
pub mod errors;
#[doc(hidden)]
pub mod infra;

#[cfg(test)]
mod test_support;
