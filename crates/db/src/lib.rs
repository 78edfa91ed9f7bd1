//! Database layer for the HostelHub backend.

pub mod entities;
pub mod migrations;
pub mod repositories;
pub mod test_utils;

use std::time::Duration;

use hostel_common::{AppError, AppResult, Config};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::debug;

use migrations::Migrator;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Open the connection pool described by `config.database`.
///
/// sqlx's per-statement log lines are turned off.
pub async fn init(config: &Config) -> AppResult<DatabaseConnection> {
    let database = &config.database;

    let mut opt = ConnectOptions::new(&database.url);
    opt.max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .connect_timeout(CONNECT_TIMEOUT)
        .acquire_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);

    debug!(
        max_connections = database.max_connections,
        min_connections = database.min_connections,
        "Opening database pool"
    );

    Database::connect(opt)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Apply pending migrations and return how many ran.
pub async fn migrate(db: &DatabaseConnection) -> AppResult<usize> {
    let pending = Migrator::get_pending_migrations(db)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?
        .len();

    Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(pending)
}
