//! Complaint service.

use chrono::Utc;
use hostel_common::{AppResult, id::IdGenerator};
use hostel_db::entities::{ComplaintStatus, complaint};
use hostel_db::repositories::{ComplaintRepository, StudentRepository};
use sea_orm::Set;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

/// Input for filing a complaint.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateComplaintInput {
    #[validate(length(min = 1))]
    pub description: String,
    pub image: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub category: String,
    #[validate(length(min = 1))]
    pub student_id: String,
}

/// Input for a student editing their complaint.
#[derive(Debug, Deserialize, Validate)]
pub struct EditComplaintInput {
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 128))]
    pub category: String,
    pub image: Option<String>,
}

/// Service for filing, listing, editing and deleting complaints.
#[derive(Clone)]
pub struct ComplaintService {
    complaint_repo: ComplaintRepository,
    student_repo: StudentRepository,
    id_gen: IdGenerator,
}

impl ComplaintService {
    /// Create a new complaint service.
    #[must_use]
    pub const fn new(complaint_repo: ComplaintRepository, student_repo: StudentRepository) -> Self {
        Self {
            complaint_repo,
            student_repo,
            id_gen: IdGenerator::new(),
        }
    }

    /// File a complaint on behalf of a student.
    ///
    /// The student's current name and room are copied onto the complaint.
    pub async fn create(&self, input: CreateComplaintInput) -> AppResult<complaint::Model> {
        input.validate()?;

        let student = self.student_repo.get_by_id(&input.student_id).await?;
        let now = Utc::now();

        let model = complaint::ActiveModel {
            id: Set(self.id_gen.generate()),
            description: Set(input.description),
            image: Set(input.image.unwrap_or_default()),
            category: Set(input.category),
            student_id: Set(student.id),
            student_name: Set(student.name),
            room_number: Set(student.room_number),
            status: Set(ComplaintStatus::Pending),
            warden_comments: Set(String::new()),
            assigned_worker_id: Set(None),
            assigned_worker_name: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let complaint = self.complaint_repo.create(model).await?;
        info!(complaint_id = %complaint.id, student_id = %complaint.student_id, "Complaint filed");

        Ok(complaint)
    }

    /// List a student's complaints, newest first.
    pub async fn list_by_student(&self, student_id: &str) -> AppResult<Vec<complaint::Model>> {
        self.complaint_repo.find_by_student(student_id).await
    }

    /// List all complaints, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<complaint::Model>> {
        self.complaint_repo.find_all().await
    }

    /// Replace description, category and image of a complaint.
    pub async fn edit(&self, id: &str, input: EditComplaintInput) -> AppResult<complaint::Model> {
        input.validate()?;

        self.complaint_repo
            .update_details(
                id,
                input.description,
                input.category,
                input.image.unwrap_or_default(),
            )
            .await
    }

    /// Delete a complaint. Succeeds whether or not it existed.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let removed = self.complaint_repo.delete(id).await?;
        info!(complaint_id = %id, removed, "Complaint deleted");
        Ok(())
    }
}
