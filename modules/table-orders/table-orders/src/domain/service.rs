//! Order service: business rules over the order repository and the menu
//! snapshot.
//!
//! - Every ordered dish must exist in the menu; prices come from the menu,
//!   never from the client.
//! - A line with `quantity = N` becomes `N` items of quantity 1, each with its
//!   own id and status.
//! - Only item status changes after an order is placed.

use std::sync::Arc;

use table_orders_sdk::{NewOrder, Order, OrderItem, OrderStatus, TableNumber};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::menu::Menu;
use crate::domain::repo::OrdersRepository;

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_units_per_line: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_units_per_line: 50,
        }
    }
}

/// Current time truncated to microseconds, the finest precision every
/// supported store keeps.
fn now_micros() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_microsecond(now.microsecond()).unwrap_or(now)
}

pub struct OrdersService {
    repo: Arc<dyn OrdersRepository>,
    menu: Arc<Menu>,
    config: ServiceConfig,
}

impl OrdersService {
    pub fn new(repo: Arc<dyn OrdersRepository>, menu: Arc<Menu>, config: ServiceConfig) -> Self {
        Self { repo, menu, config }
    }

    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Validate, price and persist a new order.
    ///
    /// # Errors
    /// `Validation` for empty orders or bad quantities, `UnknownMenuItem` when a
    /// dish is not on the menu, `Database` when persisting fails. Nothing is
    /// stored unless every line is valid.
    #[instrument(skip(self, new_order), fields(table = %new_order.table_number, lines = new_order.lines.len()))]
    pub async fn place_order(&self, new_order: NewOrder) -> Result<Order, DomainError> {
        info!("Placing order");

        if new_order.lines.is_empty() {
            return Err(DomainError::validation(
                "orderItems",
                "an order must contain at least one item",
            ));
        }

        let mut items = Vec::new();
        for line in &new_order.lines {
            self.validate_quantity(line.quantity)?;

            let menu_item = self
                .menu
                .find(&line.name)
                .ok_or_else(|| DomainError::unknown_menu_item(&line.name))?;

            items.extend((0..line.quantity).map(|_| OrderItem {
                id: Uuid::now_v7(),
                name: menu_item.name.clone(),
                quantity: 1,
                price: menu_item.price,
                status: OrderStatus::Pending,
            }));
        }

        let order = Order {
            id: Uuid::now_v7(),
            table_number: new_order.table_number,
            created_at: now_micros(),
            items,
        };

        self.repo.insert(&order).await?;

        info!(order_id = %order.id, items = order.items.len(), "Order placed");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self.repo.list_all().await?;
        debug!("Listed {} orders", orders.len());
        Ok(orders)
    }

    #[instrument(skip(self), fields(table = %table))]
    pub async fn list_table_orders(&self, table: TableNumber) -> Result<Vec<Order>, DomainError> {
        let orders = self.repo.list_by_table(table).await?;
        debug!("Listed {} orders for table", orders.len());
        Ok(orders)
    }

    /// # Errors
    /// `ItemNotFound` when no line item has `item_id`.
    #[instrument(skip(self), fields(item_id = %item_id, status = %status))]
    pub async fn update_item_status(
        &self,
        item_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, DomainError> {
        info!("Updating item status");

        let order = self
            .repo
            .set_item_status(item_id, status)
            .await?
            .ok_or_else(|| DomainError::item_not_found(item_id))?;

        info!(order_id = %order.id, "Item status updated");
        Ok(order)
    }

    /// Remove every order of `table`. Resetting a table with no orders is not
    /// an error.
    #[instrument(skip(self), fields(table = %table))]
    pub async fn reset_table(&self, table: TableNumber) -> Result<u64, DomainError> {
        let removed = self.repo.delete_by_table(table).await?;
        info!(removed, "Table reset");
        Ok(removed)
    }

    fn validate_quantity(&self, quantity: u32) -> Result<(), DomainError> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity", "must be at least 1"));
        }
        if quantity > self.config.max_units_per_line {
            return Err(DomainError::validation(
                "quantity",
                format!(
                    "must not exceed {} units per item",
                    self.config.max_units_per_line
                ),
            ));
        }
        Ok(())
    }
}
