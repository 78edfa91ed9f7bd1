//! Worker repository.

use std::sync::Arc;

use crate::entities::{Worker, worker};
use hostel_common::{AppError, AppResult};
use sea_orm::{DatabaseConnection, EntityTrait};

/// Read-only worker directory lookups.
#[derive(Clone)]
pub struct WorkerRepository {
    db: Arc<DatabaseConnection>,
}

impl WorkerRepository {
    /// Create a new worker repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find worker by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<worker::Model>> {
        Worker::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get worker by ID, returning `NotFound` if absent.
    pub async fn get_by_id(&self, id: &str) -> AppResult<worker::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Worker not found".to_string()))
    }
}
