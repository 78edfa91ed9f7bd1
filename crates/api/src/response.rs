//! API response types.

use serde::Serialize;

/// Plain confirmation body, e.g. `{"message": "Complaint deleted"}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Create a confirmation body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
