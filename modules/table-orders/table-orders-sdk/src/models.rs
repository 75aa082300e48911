//! Public models for the table-orders module.
//!
//! An [`Order`] belongs to one physical table and holds one [`OrderItem`] per
//! dish unit. Items carry their own [`OrderStatus`] so the kitchen can move
//! them independently.

use std::fmt;
use std::str::FromStr;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::{InvalidOrderStatus, InvalidTableNumber};

/// Identifier of a physical table. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableNumber(i32);

impl TableNumber {
    /// # Errors
    /// Returns [`InvalidTableNumber`] when `n` is zero, negative or does not fit in `i32`.
    pub fn new(n: i64) -> Result<Self, InvalidTableNumber> {
        i32::try_from(n)
            .ok()
            .filter(|v| *v > 0)
            .map(Self)
            .ok_or_else(|| InvalidTableNumber { raw: n.to_string() })
    }

    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for TableNumber {
    type Err = InvalidTableNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map_err(|_| InvalidTableNumber { raw: s.to_owned() })
            .and_then(|n| Self::new(n).map_err(|_| InvalidTableNumber { raw: s.to_owned() }))
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a single line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::Cancelled,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidOrderStatus { raw: s.to_owned() })
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dish unit inside an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    /// Menu price at the time the order was placed.
    pub price: f64,
    pub status: OrderStatus,
}

/// An order placed from a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub table_number: TableNumber,
    pub created_at: OffsetDateTime,
    pub items: Vec<OrderItem>,
}

/// A requested dish and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLine {
    pub name: String,
    pub quantity: u32,
}

/// Order submission before pricing and id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub table_number: TableNumber,
    pub lines: Vec<NewOrderLine>,
}
