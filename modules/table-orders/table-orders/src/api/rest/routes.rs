use std::sync::Arc;

use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use crate::api::problem::Problem;
use crate::api::rest::{dto, handlers};
use crate::domain::service::OrdersService;

#[derive(OpenApi)]
#[openapi(
    info(title = "Table Orders API", description = "Restaurant table ordering"),
    paths(
        handlers::place_order,
        handlers::list_orders,
        handlers::list_table_orders,
        handlers::update_item_status,
        handlers::reset_table,
        handlers::get_menu,
    ),
    components(schemas(
        dto::OrderDto,
        dto::OrderItemDto,
        dto::OrderStatusDto,
        dto::PlaceOrderReq,
        dto::ItemizedOrderReq,
        dto::OrderLineReq,
        dto::SingleItemOrderReq,
        dto::UpdateStatusReq,
        dto::MenuItemDto,
        Problem,
    )),
    tags(
        (name = "Orders", description = "Orders placed from tables"),
        (name = "Menu", description = "Menu reference data")
    )
)]
pub struct ApiDoc;

/// Register the orders and menu routes plus `/openapi.json` on `router`.
pub fn register_routes(router: Router, service: Arc<OrdersService>) -> Router {
    // Build once, serve as static JSON
    let openapi_doc = Arc::new(ApiDoc::openapi());

    router
        .route("/order", post(handlers::place_order))
        .route("/orders", get(handlers::list_orders))
        .route("/orders/{id}", get(handlers::list_table_orders))
        .route("/orders/{id}/status", put(handlers::update_item_status))
        .route("/orders/reset/{table}", delete(handlers::reset_table))
        .route("/menu", get(handlers::get_menu))
        .route(
            "/openapi.json",
            get(move || {
                let doc = openapi_doc.clone();
                async move {
                    ([(header::CACHE_CONTROL, "no-store")], Json(doc.as_ref().clone()))
                        .into_response()
                }
            }),
        )
        .layer(Extension(service))
}
