//! Table orders SDK
//!
//! Transport-agnostic types shared between the `table-orders` module and its
//! consumers. REST DTOs and storage entities convert to and from these.

pub mod errors;
pub mod models;

pub use errors::{InvalidOrderStatus, InvalidTableNumber};
pub use models::{NewOrder, NewOrderLine, Order, OrderItem, OrderStatus, TableNumber};
