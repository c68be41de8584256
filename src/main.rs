//! JobTrack Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinError;
use tracing_subscriber::{EnvFilter, fmt};

use jobtrack_api::AppState;
use jobtrack_core::config::{AppConfig, DatabaseBackend};
use jobtrack_core::error::AppError;
use jobtrack_database::{DatabasePool, DynJobRepository, MemoryJobRepository, PgJobRepository};
use jobtrack_service::JobService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and `JOBTRACK__*` environment variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("JOBTRACK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting JobTrack");

    // ── Step 1: Job gateway ──────────────────────────────────────
    let (repo, db_pool): (DynJobRepository, Option<DatabasePool>) = match config.database.backend {
        DatabaseBackend::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;

            if config.database.auto_migrate {
                jobtrack_database::migration::run_migrations(pool.pool()).await?;
            }

            let repo = Arc::new(PgJobRepository::new(pool.pool().clone()));
            (repo, Some(pool))
        }
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory job store; jobs are lost on restart");
            (Arc::new(MemoryJobRepository::new()), None)
        }
    };

    // ── Step 2: Services ─────────────────────────────────────────
    let job_service = JobService::from_config(repo, &config.jobs);

    // ── Step 3: HTTP server ──────────────────────────────────────
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    let app = jobtrack_api::build_app(AppState::new(config, job_service));

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let mut server = tokio::spawn(jobtrack_api::app::serve(listener, app, async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    }));

    // ── Step 4: Graceful shutdown ────────────────────────────────
    tokio::select! {
        result = &mut server => flatten(result)?,
        _ = shutdown_rx.changed() => {
            match tokio::time::timeout(grace, &mut server).await {
                Ok(result) => flatten(result)?,
                Err(_) => {
                    tracing::warn!(
                        grace_seconds = grace.as_secs(),
                        "In-flight requests did not drain in time, aborting"
                    );
                    server.abort();
                }
            }
        }
    }

    if let Some(pool) = db_pool {
        pool.close().await;
    }

    tracing::info!("JobTrack server shut down gracefully");
    Ok(())
}

fn flatten(result: Result<Result<(), AppError>, JoinError>) -> Result<(), AppError> {
    result.map_err(|e| AppError::internal(format!("Server task failed: {e}")))?
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
