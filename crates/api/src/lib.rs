//! HTTP API layer for the HostelHub backend.
//!
//! - **Endpoints**: complaint filing, listing, editing and status workflow
//! - **Extractors**: JSON bodies with errors rendered as [`hostel_common::AppError`]
//! - **Middleware**: application state, CORS, request tracing, body limits
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use endpoints::router;
pub use middleware::AppState;

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 100 * 1024;

/// Build the complete application: health check, `/api` routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(endpoints::health::health_check))
        .nest("/api", router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::cors_layer()),
        )
        .with_state(state)
}
