//! Test doubles shared by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use table_orders_sdk::{Order, OrderStatus, TableNumber};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::menu::{Menu, MenuItem};
use crate::domain::repo::OrdersRepository;
use crate::domain::service::{OrdersService, ServiceConfig};

/// Vec-backed repository. `fail` makes every call return a database error.
#[derive(Default)]
pub struct MockRepository {
    pub orders: Mutex<Vec<Order>>,
    pub fail: bool,
}

impl MockRepository {
    pub fn failing() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::database("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OrdersRepository for MockRepository {
    async fn insert(&self, order: &Order) -> Result<(), DomainError> {
        self.check()?;
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn list_by_table(&self, table: TableNumber) -> Result<Vec<Order>, DomainError> {
        self.check()?;
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|o| o.table_number == table)
            .collect())
    }

    async fn set_item_status(
        &self,
        item_id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        self.check()?;
        let mut orders = self.orders.lock().unwrap();
        for order in orders.iter_mut() {
            if let Some(item) = order.items.iter_mut().find(|i| i.id == item_id) {
                item.status = status;
                return Ok(Some(order.clone()));
            }
        }
        Ok(None)
    }

    async fn delete_by_table(&self, table: TableNumber) -> Result<u64, DomainError> {
        self.check()?;
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.table_number != table);
        Ok((before - orders.len()) as u64)
    }
}

pub fn sample_menu() -> Menu {
    Menu::new(vec![
        MenuItem::new("Pizza", 12.5),
        MenuItem::new("Soup", 4.0),
        MenuItem::new("Lemonade", 2.25),
    ])
}

pub fn service_with(repo: Arc<MockRepository>) -> Arc<OrdersService> {
    Arc::new(OrdersService::new(
        repo,
        Arc::new(sample_menu()),
        ServiceConfig::default(),
    ))
}

pub fn table(n: i64) -> TableNumber {
    TableNumber::new(n).unwrap()
}
