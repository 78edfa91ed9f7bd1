//! Student repository.

use std::sync::Arc;

use crate::entities::{Student, student};
use hostel_common::{AppError, AppResult};
use sea_orm::{DatabaseConnection, EntityTrait};

/// Read-only student directory lookups.
#[derive(Clone)]
pub struct StudentRepository {
    db: Arc<DatabaseConnection>,
}

impl StudentRepository {
    /// Create a new student repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find student by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<student::Model>> {
        Student::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get student by ID, returning `NotFound` if absent.
    pub async fn get_by_id(&self, id: &str) -> AppResult<student::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }
}
