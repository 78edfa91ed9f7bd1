//! HostelHub server entry point.

use std::sync::Arc;

use hostel_api::{AppState, app};
use hostel_common::Config;
use hostel_core::{ComplaintService, ComplaintWorkflowService};
use hostel_db::repositories::{ComplaintRepository, StudentRepository, WorkerRepository};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "hostelhub=debug,hostel_api=debug,hostel_core=debug,tower_http=debug".into()
            }),
        )
        .init();

    info!("Starting HostelHub server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database
    let db = hostel_db::init(&config).await?;
    info!("Connected to database");

    let applied = hostel_db::migrate(&db).await?;
    info!(applied, "Migrations completed");

    // Initialize repositories
    let db = Arc::new(db);
    let complaint_repo = ComplaintRepository::new(Arc::clone(&db));
    let student_repo = StudentRepository::new(Arc::clone(&db));
    let worker_repo = WorkerRepository::new(Arc::clone(&db));

    // Initialize services
    let state = AppState {
        complaint_service: ComplaintService::new(complaint_repo.clone(), student_repo),
        workflow_service: ComplaintWorkflowService::new(complaint_repo, worker_repo),
    };

    let app = app(state);

    // Start server with graceful shutdown
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Handlers and their repositories have been dropped with the router
    match Arc::try_unwrap(db) {
        Ok(db) => db.close().await?,
        Err(_) => warn!("Database handle still shared at shutdown; skipping explicit close"),
    }

    info!("Server shutdown complete");
    Ok(())
}
