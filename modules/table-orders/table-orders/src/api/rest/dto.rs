use serde::{Deserialize, Serialize};
use table_orders_sdk::{NewOrder, NewOrderLine, Order, OrderItem, OrderStatus, TableNumber};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// REST DTO for an order with its line items
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Uuid,
    pub table_number: i32,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    pub order_items: Vec<OrderItemDto>,
}

/// REST DTO for one dish unit
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    /// Menu price captured when the order was placed.
    pub price: f64,
    pub status: OrderStatusDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusDto {
    Pending,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

/// Body of `POST /order`.
///
/// Either an itemized order or the single-dish shorthand
/// `{ "tableNumber": 2, "orderNumber": "Pizza" }`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PlaceOrderReq {
    Itemized(ItemizedOrderReq),
    Single(SingleItemOrderReq),
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemizedOrderReq {
    pub table_number: i64,
    pub order_items: Vec<OrderLineReq>,
}

/// One requested dish. Any `price` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderLineReq {
    pub name: String,
    /// Defaults to 1.
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SingleItemOrderReq {
    pub table_number: i64,
    /// Name of the ordered menu item.
    pub order_number: String,
}

/// Body of `PUT /orders/{itemId}/status`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStatusReq {
    /// One of `pending`, `preparing`, `ready`, `served`, `cancelled`.
    pub status: String,
}

/// Menu entry as stored in the menu file. `GET /menu` returns entries
/// verbatim, including fields beyond these.
#[derive(Debug, Clone, ToSchema)]
pub struct MenuItemDto {
    pub name: String,
    pub price: f64,
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            table_number: order.table_number.get(),
            created_at: order.created_at,
            order_items: order.items.into_iter().map(OrderItemDto::from).collect(),
        }
    }
}

impl From<OrderItem> for OrderItemDto {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            price: item.price,
            status: item.status.into(),
        }
    }
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => Self::Pending,
            OrderStatus::Preparing => Self::Preparing,
            OrderStatus::Ready => Self::Ready,
            OrderStatus::Served => Self::Served,
            OrderStatus::Cancelled => Self::Cancelled,
        }
    }
}

fn quantity(raw: Option<i64>) -> Result<u32, DomainError> {
    match raw {
        None => Ok(1),
        Some(q) if q < 1 => Err(DomainError::validation("quantity", "must be at least 1")),
        Some(q) => u32::try_from(q).map_err(|_| DomainError::validation("quantity", "out of range")),
    }
}

impl TryFrom<PlaceOrderReq> for NewOrder {
    type Error = DomainError;

    fn try_from(req: PlaceOrderReq) -> Result<Self, Self::Error> {
        match req {
            PlaceOrderReq::Itemized(req) => Ok(Self {
                table_number: TableNumber::new(req.table_number)?,
                lines: req
                    .order_items
                    .into_iter()
                    .map(|line| {
                        Ok(NewOrderLine {
                            quantity: quantity(line.quantity)?,
                            name: line.name,
                        })
                    })
                    .collect::<Result<_, DomainError>>()?,
            }),
            PlaceOrderReq::Single(req) => Ok(Self {
                table_number: TableNumber::new(req.table_number)?,
                lines: vec![NewOrderLine {
                    name: req.order_number,
                    quantity: 1,
                }],
            }),
        }
    }
}
