//! API middleware.

use axum::http::{HeaderName, Method, header};
use hostel_core::{ComplaintService, ComplaintWorkflowService};
use tower_http::cors::{Any, CorsLayer};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Filing, listing, editing and deleting complaints.
    pub complaint_service: ComplaintService,
    /// Status transitions.
    pub workflow_service: ComplaintWorkflowService,
}

/// CORS policy for the browser frontend, which is served from another origin.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    const ALLOWED_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(ALLOWED_HEADERS)
}
