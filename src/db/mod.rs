pub mod employee_repository;
pub mod memory;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::{Config, ConfigError, StoreKind};
use crate::db::employee_repository::{EmployeeStore, PostgresEmployeeStore};
use crate::db::memory::InMemoryEmployeeStore;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Builds the store selected by configuration. The Postgres pool is owned by the
/// returned store and released when the last handle is dropped.
pub async fn create_store(config: &Config) -> Result<Arc<dyn EmployeeStore>, Box<dyn std::error::Error>> {
    match config.store {
        StoreKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or(ConfigError::Missing("DATABASE_URL"))?;
            let pool = create_pool(url, config.max_connections).await?;
            run_migrations(&pool).await?;
            log::info!("Connected to Postgres ({} max connections)", config.max_connections);
            Ok(Arc::new(PostgresEmployeeStore::new(pool)))
        }
        StoreKind::Memory => {
            log::warn!("Using in-memory employee store; records are lost on shutdown");
            Ok(Arc::new(InMemoryEmployeeStore::new()))
        }
    }
}
