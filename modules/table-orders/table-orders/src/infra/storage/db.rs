use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::error::DomainError;
use crate::infra::storage::migrations::Migrator;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::database(e.to_string())
}

/// The in-memory database lives and dies with its only connection, so the
/// pool must never recycle it. `Duration::MAX` would overflow the reaper's
/// `Instant` arithmetic.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// `sqlite::memory:` and `sqlite://:memory:` style URLs. Each pooled connection
/// to an in-memory SQLite database sees its own empty database, so the pool is
/// pinned to a single connection.
fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    if is_in_memory(&cfg.url) {
        opts.max_connections(1)
            .min_connections(1)
            .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME)
            .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME);
    } else {
        opts.max_connections(cfg.max_connections);
    }
    opts.sqlx_logging(false);
    opts
}

/// Open the order store and bring its schema up to date.
///
/// # Errors
/// Returns an error if the connection cannot be established or a migration fails.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg))
        .await
        .context("failed to connect to the order store")?;
    info!(backend = ?db.get_database_backend(), "Connected to order store");

    Migrator::up(&db, None)
        .await
        .context("failed to run order store migrations")?;
    info!("Order store migrations completed");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_sqlite_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://:memory:"));
        assert!(!is_in_memory("sqlite://restaurant.db?mode=rwc"));
        assert!(!is_in_memory("postgres://localhost/memory"));
    }

    #[test]
    fn in_memory_pool_keeps_its_single_connection() {
        let opts = connect_options(&DatabaseConfig::in_memory());

        assert_eq!(opts.get_max_connections(), Some(1));
        assert_eq!(opts.get_min_connections(), Some(1));
        assert_eq!(opts.get_max_lifetime(), Some(IN_MEMORY_CONNECTION_LIFETIME));
        assert_eq!(opts.get_idle_timeout(), Some(IN_MEMORY_CONNECTION_LIFETIME));
    }

    #[test]
    fn file_pool_uses_configured_size_and_default_recycling() {
        let opts = connect_options(&DatabaseConfig {
            url: "sqlite://restaurant.db?mode=rwc".to_owned(),
            max_connections: 7,
        });

        assert_eq!(opts.get_max_connections(), Some(7));
        assert_eq!(opts.get_max_lifetime(), None);
        assert_eq!(opts.get_idle_timeout(), None);
    }

    #[tokio::test]
    async fn connect_runs_migrations_on_fresh_database() {
        let cfg = DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            max_connections: 4,
        };
        let db = connect(&cfg).await.unwrap();

        // Running the migrator again must be a no-op.
        Migrator::up(&db, None).await.unwrap();
    }
}
