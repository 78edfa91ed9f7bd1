//! Health check endpoint.

/// Liveness probe served at `/`.
pub async fn health_check() -> &'static str {
    "HostelHub Backend is running"
}
