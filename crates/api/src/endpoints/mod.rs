//! API endpoints.

mod complaints;
pub mod health;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().nest("/complaints", complaints::router())
}
