//! Business logic services.

pub mod complaint;
pub mod workflow;

pub use complaint::{ComplaintService, CreateComplaintInput, EditComplaintInput};
pub use workflow::{ComplaintWorkflowService, StatusTransition, StatusUpdateInput};
