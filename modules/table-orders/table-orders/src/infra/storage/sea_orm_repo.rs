use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set, TransactionTrait,
};
use table_orders_sdk::{Order, OrderStatus, TableNumber};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repo::OrdersRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::{order, order_item};
use crate::infra::storage::mapper::order_from_rows;

/// ORM-based implementation of the `OrdersRepository` trait.
#[derive(Clone)]
pub struct SeaOrmOrdersRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrdersRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load<C: ConnectionTrait>(
        conn: &C,
        query: Select<order::Entity>,
    ) -> Result<Vec<Order>, DomainError> {
        query
            .order_by_asc(order::Column::CreatedAt)
            .order_by_asc(order::Column::Id)
            .find_with_related(order_item::Entity)
            .all(conn)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|(row, items)| order_from_rows(row, items))
            .collect()
    }
}

fn item_models(order: &Order) -> Result<Vec<order_item::ActiveModel>, DomainError> {
    order
        .items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let position = i32::try_from(position)
                .map_err(|_| DomainError::validation("orderItems", "too many items"))?;
            let quantity = i32::try_from(item.quantity)
                .map_err(|_| DomainError::validation("quantity", "out of range"))?;
            Ok(order_item::ActiveModel {
                id: Set(item.id),
                order_id: Set(order.id),
                position: Set(position),
                name: Set(item.name.clone()),
                quantity: Set(quantity),
                price: Set(item.price),
                status: Set(item.status.as_str().to_owned()),
            })
        })
        .collect()
}

#[async_trait]
impl OrdersRepository for SeaOrmOrdersRepository {
    async fn insert(&self, order: &Order) -> Result<(), DomainError> {
        let items = item_models(order)?;
        let head = order::ActiveModel {
            id: Set(order.id),
            table_number: Set(order.table_number.get()),
            created_at: Set(order.created_at),
        };

        let txn = self.db.begin().await.map_err(db_err)?;
        order::Entity::insert(head)
            .exec_without_returning(&txn)
            .await
            .map_err(db_err)?;
        if !items.is_empty() {
            order_item::Entity::insert_many(items)
                .exec_without_returning(&txn)
                .await
                .map_err(db_err)?;
        }
        txn.commit().await.map_err(db_err)
    }

    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        Self::load(&self.db, order::Entity::find()).await
    }

    async fn list_by_table(&self, table: TableNumber) -> Result<Vec<Order>, DomainError> {
        Self::load(
            &self.db,
            order::Entity::find().filter(order::Column::TableNumber.eq(table.get())),
        )
        .await
    }

    async fn set_item_status(
        &self,
        item_id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let Some(item) = order_item::Entity::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        order_item::Entity::update_many()
            .col_expr(order_item::Column::Status, Expr::value(status.as_str()))
            .filter(order_item::Column::Id.eq(item_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        let mut orders = Self::load(&self.db, order::Entity::find_by_id(item.order_id)).await?;
        Ok(orders.pop())
    }

    async fn delete_by_table(&self, table: TableNumber) -> Result<u64, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let ids: Vec<Uuid> = order::Entity::find()
            .select_only()
            .column(order::Column::Id)
            .filter(order::Column::TableNumber.eq(table.get()))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(db_err)?;

        if ids.is_empty() {
            txn.commit().await.map_err(db_err)?;
            return Ok(0);
        }

        order_item::Entity::delete_many()
            .filter(order_item::Column::OrderId.is_in(ids.clone()))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let removed = order::Entity::delete_many()
            .filter(order::Column::Id.is_in(ids))
            .exec(&txn)
            .await
            .map_err(db_err)?
            .rows_affected;

        txn.commit().await.map_err(db_err)?;
        Ok(removed)
    }
}
