//! Complaint status workflow.
//!
//! Wardens accept or reject complaints, workers take them on and complete them.
//! Transitions are deliberately permissive: the target status is applied
//! whatever the current status is, and a request that matches no rule is
//! written back unchanged.

use chrono::Utc;
use hostel_common::AppResult;
use hostel_db::entities::{ComplaintStatus, complaint};
use hostel_db::repositories::{ComplaintRepository, WorkerRepository};
use sea_orm::Set;
use serde::Deserialize;
use tracing::{debug, info};

/// Body of a status update request.
///
/// `status` stays a plain string so that unknown values reach the workflow
/// and fall through to [`StatusTransition::Unchanged`]. An empty string is
/// just another unknown value.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateInput {
    pub status: String,
    pub assigned_worker_id: Option<String>,
    pub warden_comments: Option<String>,
}

/// What a status update request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTransition {
    /// Warden accepts or rejects, leaving a comment (possibly empty).
    Review {
        status: ComplaintStatus,
        warden_comments: String,
    },
    /// A worker takes the job.
    Assign { worker_id: String },
    /// The job is done. Assignment is kept.
    Complete,
    /// Nothing to change; the complaint is still written back.
    Unchanged,
}

impl StatusTransition {
    /// Classify a status update request.
    #[must_use]
    pub fn from_input(input: &StatusUpdateInput) -> Self {
        let worker_id = input
            .assigned_worker_id
            .as_deref()
            .filter(|id| !id.is_empty());

        match (ComplaintStatus::from_wire(&input.status), worker_id) {
            (Some(status @ (ComplaintStatus::Accepted | ComplaintStatus::Rejected)), _) => {
                Self::Review {
                    status,
                    warden_comments: input.warden_comments.clone().unwrap_or_default(),
                }
            }
            (Some(ComplaintStatus::InProgress), Some(worker_id)) => Self::Assign {
                worker_id: worker_id.to_string(),
            },
            (Some(ComplaintStatus::Completed), _) => Self::Complete,
            _ => Self::Unchanged,
        }
    }
}

/// Service applying status transitions to complaints.
#[derive(Clone)]
pub struct ComplaintWorkflowService {
    complaint_repo: ComplaintRepository,
    worker_repo: WorkerRepository,
}

impl ComplaintWorkflowService {
    /// Create a new workflow service.
    #[must_use]
    pub const fn new(complaint_repo: ComplaintRepository, worker_repo: WorkerRepository) -> Self {
        Self {
            complaint_repo,
            worker_repo,
        }
    }

    /// Apply a status update to a complaint and persist the result.
    ///
    /// Fails with `NotFound` if the complaint, or the worker named by an
    /// `in-progress` request, does not exist. In the worker case nothing is written.
    pub async fn apply_status_transition(
        &self,
        id: &str,
        input: StatusUpdateInput,
    ) -> AppResult<complaint::Model> {
        let complaint = self.complaint_repo.get_by_id(id).await?;
        let transition = StatusTransition::from_input(&input);
        let previous = complaint.status;

        let mut active: complaint::ActiveModel = complaint.into();

        match transition {
            StatusTransition::Review {
                status,
                warden_comments,
            } => {
                active.status = Set(status);
                active.warden_comments = Set(warden_comments);
            }
            StatusTransition::Assign { worker_id } => {
                let worker = self.worker_repo.get_by_id(&worker_id).await?;
                active.status = Set(ComplaintStatus::InProgress);
                active.assigned_worker_id = Set(Some(worker.id));
                active.assigned_worker_name = Set(Some(worker.name));
            }
            StatusTransition::Complete => {
                active.status = Set(ComplaintStatus::Completed);
            }
            StatusTransition::Unchanged => {
                debug!(complaint_id = %id, requested = %input.status, "Status request matched no rule");
            }
        }

        active.updated_at = Set(Utc::now());
        let updated = self.complaint_repo.update(active).await?;

        info!(
            complaint_id = %updated.id,
            from = %previous,
            to = %updated.status,
            "Complaint status written"
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_common::AppError;
    use hostel_db::entities::worker;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Statement, Value};
    use std::sync::Arc;

    fn input(status: &str, worker: Option<&str>, comments: Option<&str>) -> StatusUpdateInput {
        StatusUpdateInput {
            status: status.to_string(),
            assigned_worker_id: worker.map(String::from),
            warden_comments: comments.map(String::from),
        }
    }

    fn mock_complaint(status: ComplaintStatus) -> complaint::Model {
        complaint::Model {
            id: "c1".to_string(),
            description: "Fan not working".to_string(),
            image: String::new(),
            category: "electrical".to_string(),
            student_id: "s101".to_string(),
            student_name: "Asha".to_string(),
            room_number: "12B".to_string(),
            status,
            warden_comments: String::new(),
            assigned_worker_id: None,
            assigned_worker_name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn mock_worker() -> worker::Model {
        worker::Model {
            id: "w7".to_string(),
            name: "Ravi".to_string(),
            created_at: Utc::now(),
        }
    }

    fn service(db: &Arc<DatabaseConnection>) -> ComplaintWorkflowService {
        ComplaintWorkflowService::new(
            ComplaintRepository::new(Arc::clone(db)),
            WorkerRepository::new(Arc::clone(db)),
        )
    }

    fn statements(db: Arc<DatabaseConnection>) -> Vec<Statement> {
        Arc::try_unwrap(db)
            .ok()
            .unwrap()
            .into_transaction_log()
            .iter()
            .flat_map(|t| t.statements().to_vec())
            .collect()
    }

    fn values(statement: &Statement) -> Vec<Value> {
        statement.values.clone().map(|v| v.0).unwrap_or_default()
    }

    #[test]
    fn test_classify_review() {
        assert_eq!(
            StatusTransition::from_input(&input("accepted", None, Some("ok"))),
            StatusTransition::Review {
                status: ComplaintStatus::Accepted,
                warden_comments: "ok".to_string(),
            }
        );
        assert_eq!(
            StatusTransition::from_input(&input("rejected", Some("w7"), None)),
            StatusTransition::Review {
                status: ComplaintStatus::Rejected,
                warden_comments: String::new(),
            }
        );
    }

    #[test]
    fn test_classify_in_progress_requires_worker() {
        assert_eq!(
            StatusTransition::from_input(&input("in-progress", Some("w7"), None)),
            StatusTransition::Assign {
                worker_id: "w7".to_string()
            }
        );
        assert_eq!(
            StatusTransition::from_input(&input("in-progress", None, None)),
            StatusTransition::Unchanged
        );
        assert_eq!(
            StatusTransition::from_input(&input("in-progress", Some(""), None)),
            StatusTransition::Unchanged
        );
    }

    #[test]
    fn test_classify_completed_and_unknown() {
        assert_eq!(
            StatusTransition::from_input(&input("completed", None, Some("ignored"))),
            StatusTransition::Complete
        );
        assert_eq!(
            StatusTransition::from_input(&input("pending", None, None)),
            StatusTransition::Unchanged
        );
        assert_eq!(
            StatusTransition::from_input(&input("archived", None, None)),
            StatusTransition::Unchanged
        );
        assert_eq!(
            StatusTransition::from_input(&input("", Some("w7"), Some("ok"))),
            StatusTransition::Unchanged
        );
    }

    #[tokio::test]
    async fn test_missing_complaint_returns_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<complaint::Model>::new()])
                .into_connection(),
        );
        let service = service(&db);

        let result = service
            .apply_status_transition("missing", input("completed", None, None))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_accept_overwrites_any_prior_status() {
        let mut accepted = mock_complaint(ComplaintStatus::Accepted);
        accepted.warden_comments = "ok".to_string();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[mock_complaint(ComplaintStatus::Completed)]])
                .append_query_results([[accepted]])
                .into_connection(),
        );
        let service = service(&db);

        let result = service
            .apply_status_transition("c1", input("accepted", None, Some("ok")))
            .await
            .unwrap();
        assert_eq!(result.status, ComplaintStatus::Accepted);
        drop(service);

        let statements = statements(db);
        let update = &statements[1];
        assert!(update.sql.starts_with(r#"UPDATE "complaint""#));
        let values = values(update);
        assert!(values.contains(&Value::from("accepted")));
        assert!(values.contains(&Value::from("ok")));
    }

    #[tokio::test]
    async fn test_unknown_worker_leaves_complaint_unwritten() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[mock_complaint(ComplaintStatus::Accepted)]])
                .append_query_results([Vec::<worker::Model>::new()])
                .into_connection(),
        );
        let service = service(&db);

        let result = service
            .apply_status_transition("c1", input("in-progress", Some("w404"), None))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        drop(service);

        let statements = statements(db);
        assert_eq!(statements.len(), 2);
        assert!(statements.iter().all(|s| !s.sql.starts_with("UPDATE")));
    }

    #[tokio::test]
    async fn test_assign_snapshots_worker_name() {
        let mut assigned = mock_complaint(ComplaintStatus::InProgress);
        assigned.assigned_worker_id = Some("w7".to_string());
        assigned.assigned_worker_name = Some("Ravi".to_string());

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[mock_complaint(ComplaintStatus::Accepted)]])
                .append_query_results([[mock_worker()]])
                .append_query_results([[assigned]])
                .into_connection(),
        );
        let service = service(&db);

        let result = service
            .apply_status_transition("c1", input("in-progress", Some("w7"), None))
            .await
            .unwrap();
        assert_eq!(result.assigned_worker_name.as_deref(), Some("Ravi"));
        drop(service);

        let statements = statements(db);
        let values = values(&statements[2]);
        assert!(values.contains(&Value::from("in-progress")));
        assert!(values.contains(&Value::from("w7")));
        assert!(values.contains(&Value::from("Ravi")));
    }

    #[tokio::test]
    async fn test_complete_keeps_assignment() {
        let mut in_progress = mock_complaint(ComplaintStatus::InProgress);
        in_progress.assigned_worker_id = Some("w7".to_string());
        in_progress.assigned_worker_name = Some("Ravi".to_string());
        let mut completed = in_progress.clone();
        completed.status = ComplaintStatus::Completed;

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[in_progress]])
                .append_query_results([[completed]])
                .into_connection(),
        );
        let service = service(&db);

        let result = service
            .apply_status_transition("c1", input("completed", None, None))
            .await
            .unwrap();
        assert_eq!(result.status, ComplaintStatus::Completed);
        assert_eq!(result.assigned_worker_name.as_deref(), Some("Ravi"));
        drop(service);

        let statements = statements(db);
        let update = &statements[1];
        assert!(update.sql.contains(r#""status" = "#));
        assert!(!update.sql.contains(r#""assigned_worker_id" = "#));
        assert!(!update.sql.contains(r#""assigned_worker_name" = "#));
    }

    #[tokio::test]
    async fn test_unmatched_request_is_still_written() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[mock_complaint(ComplaintStatus::Accepted)]])
                .append_query_results([[mock_complaint(ComplaintStatus::Accepted)]])
                .into_connection(),
        );
        let service = service(&db);

        let result = service
            .apply_status_transition("c1", input("in-progress", None, None))
            .await
            .unwrap();
        assert_eq!(result.status, ComplaintStatus::Accepted);
        drop(service);

        let statements = statements(db);
        let update = &statements[1];
        assert!(update.sql.starts_with(r#"UPDATE "complaint""#));
        assert!(!update.sql.contains(r#""status" = "#));
    }

    #[tokio::test]
    async fn test_empty_status_is_written_back_unchanged() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[mock_complaint(ComplaintStatus::Rejected)]])
                .append_query_results([[mock_complaint(ComplaintStatus::Rejected)]])
                .into_connection(),
        );
        let service = service(&db);

        let result = service
            .apply_status_transition("c1", input("", None, None))
            .await
            .unwrap();
        assert_eq!(result.status, ComplaintStatus::Rejected);
        drop(service);

        let statements = statements(db);
        assert_eq!(statements.len(), 2);
        let update = &statements[1];
        assert!(update.sql.starts_with(r#"UPDATE "complaint""#));
        assert!(update.sql.contains(r#""updated_at" = "#));
        assert!(!update.sql.contains(r#""status" = "#));
        assert!(!update.sql.contains(r#""warden_comments" = "#));
    }

    #[tokio::test]
    async fn test_empty_status_on_missing_complaint_is_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<complaint::Model>::new()])
                .into_connection(),
        );
        let service = service(&db);

        let result = service
            .apply_status_transition("missing", input("", None, None))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
