//! Complaint entity.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Progress of a complaint.
///
/// Any status may follow any other; the workflow does not keep a transition table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum ComplaintStatus {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "in-progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl ComplaintStatus {
    /// Wire representation, identical to the stored value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Parse a wire value, returning `None` for anything unrecognized.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint model.
///
/// `student_name`, `room_number` and `assigned_worker_name` are point-in-time
/// copies taken when the complaint was filed or assigned. They are never
/// refreshed from the student or worker records.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "complaint")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// What is wrong.
    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Image URL or data URI, empty when none was attached.
    #[sea_orm(column_type = "Text")]
    pub image: String,

    /// Free-form category tag (plumbing, electrical, ...).
    pub category: String,

    /// Student who filed the complaint.
    pub student_id: String,

    /// Student name at filing time.
    pub student_name: String,

    /// Student room at filing time.
    pub room_number: String,

    /// Current progress.
    pub status: ComplaintStatus,

    /// Warden's note left with the last accept/reject.
    #[sea_orm(column_type = "Text")]
    pub warden_comments: String,

    /// Worker who took the job. Kept after completion.
    #[sea_orm(nullable)]
    pub assigned_worker_id: Option<String>,

    /// Worker name at assignment time.
    #[sea_orm(nullable)]
    pub assigned_worker_name: Option<String>,

    /// When the complaint was filed.
    pub created_at: DateTime<Utc>,

    /// When the complaint was last written.
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::worker::Entity",
        from = "Column::AssignedWorkerId",
        to = "super::worker::Column::Id"
    )]
    AssignedWorker,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::worker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedWorker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
