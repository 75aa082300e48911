use async_trait::async_trait;
use table_orders_sdk::{Order, OrderStatus, TableNumber};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for order persistence.
///
/// Implementations own their connection. Multi-row writes (an order with its
/// items, a table reset) must be atomic.
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persist a fully priced order together with its line items.
    async fn insert(&self, order: &Order) -> Result<(), DomainError>;

    /// All orders, oldest first, each with its items in submission order.
    async fn list_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Orders placed from `table`, oldest first.
    async fn list_by_table(&self, table: TableNumber) -> Result<Vec<Order>, DomainError>;

    /// Set the status of one line item and return the order that contains it,
    /// or `None` when no item has that id.
    async fn set_item_status(
        &self,
        item_id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError>;

    /// Delete every order of `table`. Returns the number of orders removed.
    async fn delete_by_table(&self, table: TableNumber) -> Result<u64, DomainError>;
}
