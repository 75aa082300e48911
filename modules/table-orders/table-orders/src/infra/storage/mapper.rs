use table_orders_sdk::{Order, OrderItem, OrderStatus, TableNumber};

use crate::domain::error::DomainError;
use crate::infra::storage::entity::{order, order_item};

/// Assemble a domain order from its row and item rows. Items come back in
/// submission order regardless of the order the database returned them in.
pub(crate) fn order_from_rows(
    row: order::Model,
    mut item_rows: Vec<order_item::Model>,
) -> Result<Order, DomainError> {
    item_rows.sort_by_key(|item| item.position);

    let items = item_rows
        .into_iter()
        .map(item_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    let table_number = TableNumber::new(i64::from(row.table_number)).map_err(|e| {
        DomainError::database(format!("order {} has a corrupt table number: {e}", row.id))
    })?;

    Ok(Order {
        id: row.id,
        table_number,
        created_at: row.created_at,
        items,
    })
}

fn item_from_row(row: order_item::Model) -> Result<OrderItem, DomainError> {
    let status: OrderStatus = row.status.parse().map_err(|e| {
        DomainError::database(format!("order item {} has a corrupt status: {e}", row.id))
    })?;
    let quantity = u32::try_from(row.quantity).map_err(|_| {
        DomainError::database(format!(
            "order item {} has a corrupt quantity: {}",
            row.id, row.quantity
        ))
    })?;

    Ok(OrderItem {
        id: row.id,
        name: row.name,
        quantity,
        price: row.price,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn item_row(order_id: Uuid, position: i32, status: &str) -> order_item::Model {
        order_item::Model {
            id: Uuid::now_v7(),
            order_id,
            position,
            name: format!("dish-{position}"),
            quantity: 1,
            price: 3.5,
            status: status.to_owned(),
        }
    }

    #[test]
    fn test_rows_to_order_sorts_items_by_position() {
        let id = Uuid::now_v7();
        let row = order::Model {
            id,
            table_number: 4,
            created_at: OffsetDateTime::now_utc(),
        };

        let order = order_from_rows(
            row,
            vec![item_row(id, 2, "ready"), item_row(id, 0, "pending"), item_row(id, 1, "served")],
        )
        .unwrap();

        assert_eq!(order.table_number.get(), 4);
        let names: Vec<_> = order.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["dish-0", "dish-1", "dish-2"]);
        assert_eq!(order.items[2].status, OrderStatus::Ready);
    }

    #[test]
    fn test_corrupt_status_is_a_database_error() {
        let id = Uuid::now_v7();
        let row = order::Model {
            id,
            table_number: 1,
            created_at: OffsetDateTime::now_utc(),
        };

        let err = order_from_rows(row, vec![item_row(id, 0, "lost")]).unwrap_err();
        assert!(matches!(err, DomainError::Database { .. }));
    }
}
