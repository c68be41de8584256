//! Schema migrations for the `jobs` table, embedded at compile time.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use jobtrack_core::error::{AppError, ErrorKind};

/// Migrations from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the job store schema up to date.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let latest = MIGRATOR.iter().map(|m| m.version).max();
    info!(known = MIGRATOR.iter().count(), ?latest, "Applying job store migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Job store schema migration failed: {e}"),
            e,
        )
    })?;

    info!("Job store schema is current");
    Ok(())
}
