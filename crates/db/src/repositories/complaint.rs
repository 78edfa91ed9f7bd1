//! Complaint repository.

use std::sync::Arc;

use chrono::Utc;
use hostel_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{Complaint, complaint};

/// Repository for complaint persistence.
#[derive(Clone)]
pub struct ComplaintRepository {
    db: Arc<DatabaseConnection>,
}

impl ComplaintRepository {
    /// Create a new complaint repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find complaint by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<complaint::Model>> {
        Complaint::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get complaint by ID, returning `NotFound` if absent.
    pub async fn get_by_id(&self, id: &str) -> AppResult<complaint::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Complaint not found".to_string()))
    }

    /// Find complaints filed by a student, newest first.
    pub async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<complaint::Model>> {
        Complaint::find()
            .filter(complaint::Column::StudentId.eq(student_id))
            .order_by_desc(complaint::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find every complaint, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<complaint::Model>> {
        Complaint::find()
            .order_by_desc(complaint::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a new complaint.
    pub async fn create(&self, model: complaint::ActiveModel) -> AppResult<complaint::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Overwrite the student-editable fields of a complaint.
    ///
    /// Status, snapshots and assignment are left as they are.
    pub async fn update_details(
        &self,
        id: &str,
        description: String,
        category: String,
        image: String,
    ) -> AppResult<complaint::Model> {
        let complaint = self.get_by_id(id).await?;

        let mut active: complaint::ActiveModel = complaint.into();
        active.description = Set(description);
        active.category = Set(category);
        active.image = Set(image);
        active.updated_at = Set(Utc::now());

        active
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Write back a complaint changed by the status workflow.
    pub async fn update(&self, model: complaint::ActiveModel) -> AppResult<complaint::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a complaint. Deleting a missing ID is not an error.
    ///
    /// Returns the number of rows removed.
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let result = Complaint::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
