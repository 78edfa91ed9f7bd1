//! Complaint endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post, put},
};
use chrono::{DateTime, Utc};
use hostel_common::AppResult;
use hostel_core::{CreateComplaintInput, EditComplaintInput, StatusUpdateInput};
use hostel_db::entities::{ComplaintStatus, complaint};
use serde::Serialize;

use crate::{extractors::ApiJson, middleware::AppState, response::MessageResponse};

/// Create complaint router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_complaint))
        .route("/all", get(list_all_complaints))
        .route("/student/{student_id}", get(list_student_complaints))
        .route("/{id}", put(edit_complaint).delete(delete_complaint))
        .route("/{id}/status", patch(update_status))
}

/// Complaint response.
#[derive(Debug, Serialize)]
pub struct ComplaintResponse {
    pub id: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub student_id: String,
    pub student_name: String,
    pub room_number: String,
    pub status: ComplaintStatus,
    pub warden_comments: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_worker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_worker_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<complaint::Model> for ComplaintResponse {
    fn from(complaint: complaint::Model) -> Self {
        Self {
            id: complaint.id,
            description: complaint.description,
            image: complaint.image,
            category: complaint.category,
            student_id: complaint.student_id,
            student_name: complaint.student_name,
            room_number: complaint.room_number,
            status: complaint.status,
            warden_comments: complaint.warden_comments,
            assigned_worker_id: complaint.assigned_worker_id,
            assigned_worker_name: complaint.assigned_worker_name,
            created_at: complaint.created_at,
            updated_at: complaint.updated_at,
        }
    }
}

fn to_responses(complaints: Vec<complaint::Model>) -> Vec<ComplaintResponse> {
    complaints.into_iter().map(ComplaintResponse::from).collect()
}

/// File a complaint.
async fn create_complaint(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateComplaintInput>,
) -> AppResult<Json<ComplaintResponse>> {
    let complaint = state.complaint_service.create(input).await?;
    Ok(Json(complaint.into()))
}

/// List one student's complaints, newest first.
async fn list_student_complaints(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> AppResult<Json<Vec<ComplaintResponse>>> {
    let complaints = state.complaint_service.list_by_student(&student_id).await?;
    Ok(Json(to_responses(complaints)))
}

/// List every complaint, newest first (warden and worker views).
async fn list_all_complaints(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ComplaintResponse>>> {
    let complaints = state.complaint_service.list_all().await?;
    Ok(Json(to_responses(complaints)))
}

/// Edit description, category and image.
async fn edit_complaint(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<EditComplaintInput>,
) -> AppResult<Json<ComplaintResponse>> {
    let complaint = state.complaint_service.edit(&id, input).await?;
    Ok(Json(complaint.into()))
}

/// Delete a complaint.
async fn delete_complaint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.complaint_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Complaint deleted")))
}

/// Accept, reject, assign or complete a complaint.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<StatusUpdateInput>,
) -> AppResult<Json<ComplaintResponse>> {
    let complaint = state
        .workflow_service
        .apply_status_transition(&id, input)
        .await?;
    Ok(Json(complaint.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_omits_unset_assignment() {
        let now = Utc::now();
        let response = ComplaintResponse::from(complaint::Model {
            id: "c1".to_string(),
            description: "Light flickers".to_string(),
            image: String::new(),
            category: "electrical".to_string(),
            student_id: "s101".to_string(),
            student_name: "Asha".to_string(),
            room_number: "12B".to_string(),
            status: ComplaintStatus::Pending,
            warden_comments: String::new(),
            assigned_worker_id: None,
            assigned_worker_name: None,
            created_at: now,
            updated_at: now,
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], json!("pending"));
        assert_eq!(value["student_name"], json!("Asha"));
        assert!(value.get("assigned_worker_id").is_none());
        assert!(value.get("assigned_worker_name").is_none());
    }
}
