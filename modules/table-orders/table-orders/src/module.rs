use std::sync::Arc;

use axum::Router;
use tracing::{debug, info};

use crate::api::rest::routes;
use crate::config::TableOrdersConfig;
use crate::domain::service::OrdersService;
use crate::infra::menu_file;
use crate::infra::qr::{self, QrGenerationHandle};
use crate::infra::storage::{SeaOrmOrdersRepository, connect};

/// Composition root: wires the store, the menu snapshot and the service, and
/// exposes the REST router and QR generation to the host binary.
pub struct TableOrdersModule {
    service: Arc<OrdersService>,
    config: TableOrdersConfig,
}

impl TableOrdersModule {
    /// Connect the order store (running migrations), load the menu and build
    /// the service.
    ///
    /// # Errors
    /// Returns an error if the store is unreachable or migrations fail. A
    /// missing or malformed menu file is not an error.
    pub async fn init(config: TableOrdersConfig) -> anyhow::Result<Self> {
        info!("Initializing table_orders module");
        debug!(
            "Loaded table_orders config: db={}, menu={}, max_units_per_line={}",
            config.database.url,
            config.menu.path.display(),
            config.max_units_per_line
        );

        let db = connect(&config.database).await?;
        let repo = Arc::new(SeaOrmOrdersRepository::new(db));
        let menu = Arc::new(menu_file::load_menu(&config.menu.path).await);

        let service = Arc::new(OrdersService::new(repo, menu, config.service_config()));
        info!("table_orders module initialized");
        Ok(Self { service, config })
    }

    /// REST routes with the service attached.
    #[must_use]
    pub fn router(&self) -> Router {
        routes::register_routes(Router::new(), self.service.clone())
    }

    /// Start QR generation for the configured tables, or `None` when disabled.
    #[must_use]
    pub fn start_qr_generation(&self, port: u16) -> Option<QrGenerationHandle> {
        if !self.config.qr.enabled {
            info!("QR generation disabled");
            return None;
        }
        Some(qr::spawn_generation(&self.config.qr, port))
    }
}
