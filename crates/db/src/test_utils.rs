//! Test utilities for database operations.
//!
//! Provides helpers for connecting to a migrated test database and seeding the
//! student and worker directory tables that complaints refer to.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Set,
    Statement,
};
use tracing::info;

use crate::entities::{student, worker};

/// Tables truncated between tests, children first.
const TABLES: [&str; 3] = ["complaint", "student", "worker"];

/// Test database configuration.
#[derive(Debug, Clone)]
pub struct TestDbConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database username.
    pub username: String,
    /// Database password.
    pub password: String,
    /// Database name.
    pub database: String,
}

impl Default for TestDbConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("TEST_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("TEST_DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5433),
            username: std::env::var("TEST_DB_USER").unwrap_or_else(|_| "hostel_test".to_string()),
            password: std::env::var("TEST_DB_PASSWORD")
                .unwrap_or_else(|_| "hostel_test".to_string()),
            database: std::env::var("TEST_DB_NAME").unwrap_or_else(|_| "hostel_test".to_string()),
        }
    }
}

impl TestDbConfig {
    /// Get the database URL.
    #[must_use]
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }
}

/// A migrated test database connection.
pub struct TestDatabase {
    /// Database connection, shareable with repositories.
    pub conn: Arc<DatabaseConnection>,
    /// Database configuration.
    pub config: TestDbConfig,
}

impl TestDatabase {
    /// Connect using the `TEST_DB_*` environment and run migrations.
    pub async fn new() -> Result<Self, DbErr> {
        Self::with_config(TestDbConfig::default()).await
    }

    /// Connect with a custom configuration and run migrations.
    pub async fn with_config(config: TestDbConfig) -> Result<Self, DbErr> {
        use sea_orm_migration::MigratorTrait;

        let conn = Database::connect(&config.database_url()).await?;
        crate::migrations::Migrator::up(&conn, None).await?;

        info!(database = %config.database, "Connected to test database");

        Ok(Self {
            conn: Arc::new(conn),
            config,
        })
    }

    /// Get the database connection.
    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Remove all complaint and directory rows.
    pub async fn cleanup(&self) -> Result<(), DbErr> {
        for table in TABLES {
            self.conn
                .execute(Statement::from_string(
                    DatabaseBackend::Postgres,
                    format!("TRUNCATE TABLE \"{table}\" CASCADE"),
                ))
                .await?;
        }

        info!("Cleaned up test database");
        Ok(())
    }

    /// Insert a student into the directory table.
    pub async fn seed_student(
        &self,
        id: &str,
        name: &str,
        room_number: &str,
    ) -> Result<student::Model, DbErr> {
        student::ActiveModel {
            id: Set(id.to_string()),
            name: Set(name.to_string()),
            room_number: Set(room_number.to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(self.conn.as_ref())
        .await
    }

    /// Insert a worker into the directory table.
    pub async fn seed_worker(&self, id: &str, name: &str) -> Result<worker::Model, DbErr> {
        worker::ActiveModel {
            id: Set(id.to_string()),
            name: Set(name.to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(self.conn.as_ref())
        .await
    }
}
