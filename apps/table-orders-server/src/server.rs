use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderName, Request, Response};
use axum::routing::get;
use serde_json::json;
use table_orders::TableOrdersModule;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::AppConfig;
use crate::shutdown::{server_shutdown, settle_qr_drain};

const REQUEST_ID_HEADER: &str = "x-request-id";

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(json!({ "status": "ok" }))
}

fn trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(|res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                span.record("status", res.status().as_u16());
                span.record("latency_ms", latency.as_millis());
            }),
    )
}

/// Module routes, `/health`, the static file fallback and the middleware
/// stack.
///
/// Requests flow `SetRequestId` → `PropagateRequestId` → Trace → `BodyLimit`
/// → routes.
pub fn build_router(module: &TableOrdersModule, public_dir: &Path, body_limit: usize) -> Router {
    let mut router = module
        .router()
        .route("/health", get(health))
        .fallback_service(ServeDir::new(public_dir));

    router = router.layer(RequestBodyLimitLayer::new(body_limit));
    router = trace_layer(router);

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

/// Bind `host` (an IP address or a resolvable name such as `localhost`).
async fn bind_listener(host: &str, port: u16) -> Result<TcpListener> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Server listening");
    }
    Ok(listener)
}

/// Bring the module up, kick off QR generation and serve until a shutdown
/// signal arrives.
///
/// # Errors
/// Returns an error if the module fails to initialize or the listener cannot
/// bind.
pub async fn run(config: AppConfig) -> Result<()> {
    tracing::info!("Initializing modules...");
    let module = TableOrdersModule::init(config.table_orders.clone()).await?;

    let mut qr_drain = None;
    if let Some(handle) = module.start_qr_generation(config.server.port) {
        if config.table_orders.qr.wait_before_serving {
            let summary = handle.wait().await;
            tracing::info!(
                generated = summary.generated,
                failed = summary.failed,
                "QR generation finished"
            );
        } else {
            qr_drain = Some(handle.detach());
        }
    }

    let router = build_router(
        &module,
        &config.server.public_dir,
        config.server.body_limit_bytes,
    );

    let listener = bind_listener(&config.server.host, config.server.port).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(server_shutdown())
        .await
        .context("HTTP server failed")?;

    settle_qr_drain(qr_drain).await;
    tracing::info!("Server stopped");
    Ok(())
}
