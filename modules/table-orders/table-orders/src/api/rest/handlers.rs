use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::{StatusCode, Uri};
use serde_json::Value;
use table_orders_sdk::{NewOrder, OrderStatus, TableNumber};
use uuid::Uuid;

use crate::api::problem::Problem;
use crate::domain::error::DomainError;
use crate::domain::service::OrdersService;

use super::dto::{MenuItemDto, OrderDto, PlaceOrderReq, UpdateStatusReq};
use super::error::{ApiJson, domain_error_to_problem, invalid_item_id_problem};

type ApiResult<T> = Result<T, Problem>;

fn parse_table(raw: &str, uri: &Uri) -> ApiResult<TableNumber> {
    raw.parse::<TableNumber>()
        .map_err(|e| domain_error_to_problem(&DomainError::from(e), uri.path()))
}

/// Place a new order
#[utoipa::path(
    post,
    path = "/order",
    tag = "Orders",
    request_body = PlaceOrderReq,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 400, description = "Unknown menu item or invalid order", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Malformed body", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn place_order(
    Extension(svc): Extension<Arc<OrdersService>>,
    uri: Uri,
    ApiJson(req): ApiJson<PlaceOrderReq>,
) -> ApiResult<(StatusCode, Json<OrderDto>)> {
    let new_order =
        NewOrder::try_from(req).map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    let order = svc
        .place_order(new_order)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// List all orders, oldest first
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders", body = [OrderDto]),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_orders(
    Extension(svc): Extension<Arc<OrdersService>>,
    uri: Uri,
) -> ApiResult<Json<Vec<OrderDto>>> {
    let orders = svc
        .list_orders()
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

/// List the orders of one table
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "Table number")),
    responses(
        (status = 200, description = "Orders of the table", body = [OrderDto]),
        (status = 400, description = "Invalid table number", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn list_table_orders(
    Extension(svc): Extension<Arc<OrdersService>>,
    uri: Uri,
    Path(table): Path<String>,
) -> ApiResult<Json<Vec<OrderDto>>> {
    let table = parse_table(&table, &uri)?;
    let orders = svc
        .list_table_orders(table)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

/// Change the status of one line item
#[utoipa::path(
    put,
    path = "/orders/{id}/status",
    tag = "Orders",
    params(("id" = String, Path, description = "Line item id")),
    request_body = UpdateStatusReq,
    responses(
        (status = 200, description = "The order containing the item", body = OrderDto),
        (status = 400, description = "Invalid item id or status", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Item not found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn update_item_status(
    Extension(svc): Extension<Arc<OrdersService>>,
    uri: Uri,
    Path(item_id): Path<String>,
    ApiJson(req): ApiJson<UpdateStatusReq>,
) -> ApiResult<Json<OrderDto>> {
    let item_id =
        Uuid::parse_str(&item_id).map_err(|_| invalid_item_id_problem(&item_id, uri.path()))?;
    let status = req
        .status
        .parse::<OrderStatus>()
        .map_err(|e| domain_error_to_problem(&DomainError::from(e), uri.path()))?;

    let order = svc
        .update_item_status(item_id, status)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(order.into()))
}

/// Delete every order of a table
#[utoipa::path(
    delete,
    path = "/orders/reset/{table}",
    tag = "Orders",
    params(("table" = String, Path, description = "Table number")),
    responses(
        (status = 200, description = "Table reset", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid table number", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn reset_table(
    Extension(svc): Extension<Arc<OrdersService>>,
    uri: Uri,
    Path(table): Path<String>,
) -> ApiResult<String> {
    let table = parse_table(&table, &uri)?;
    svc.reset_table(table)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(format!("Orders for table {table} reset"))
}

/// The menu, as loaded at startup
#[utoipa::path(
    get,
    path = "/menu",
    tag = "Menu",
    responses((status = 200, description = "Menu items", body = [MenuItemDto]))
)]
pub async fn get_menu(Extension(svc): Extension<Arc<OrdersService>>) -> Json<Vec<Value>> {
    Json(svc.menu().entries().to_vec())
}
