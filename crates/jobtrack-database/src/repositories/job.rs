//! PostgreSQL job repository.

use async_trait::async_trait;
use sqlx::PgPool;

use jobtrack_core::error::{AppError, ErrorKind};
use jobtrack_core::result::AppResult;
use jobtrack_core::traits::Repository;
use jobtrack_core::types::JobId;
use jobtrack_entity::job::{Job, NewJob};

const JOB_COLUMNS: &str = "id, job_type, state, priority, scheduled_time";

/// sqlx-backed job gateway over the `jobs` table.
#[derive(Debug, Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Job, NewJob, JobId> for PgJobRepository {
    async fn find_by_id(&self, id: JobId) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))
    }

    async fn create(&self, data: &NewJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (job_type, state, priority, scheduled_time) \
             VALUES ($1, $2, $3, $4) RETURNING {JOB_COLUMNS}"
        ))
        .bind(&data.job_type)
        .bind(data.state)
        .bind(data.priority)
        .bind(data.scheduled_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    async fn create_many(&self, data: &[NewJob]) -> AppResult<Vec<Job>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let insert = format!(
            "INSERT INTO jobs (job_type, state, priority, scheduled_time) \
             VALUES ($1, $2, $3, $4) RETURNING {JOB_COLUMNS}"
        );

        let mut created = Vec::with_capacity(data.len());
        for item in data {
            let job = sqlx::query_as::<_, Job>(&insert)
                .bind(&item.job_type)
                .bind(item.state)
                .bind(item.priority)
                .bind(item.scheduled_time)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to create job", e)
                })?;
            created.push(job);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit job batch", e)
        })?;

        Ok(created)
    }

    async fn update(&self, job: &Job) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(&format!(
            "UPDATE jobs SET job_type = $2, state = $3, priority = $4, scheduled_time = $5, \
             updated_at = NOW() WHERE id = $1 RETURNING {JOB_COLUMNS}"
        ))
        .bind(job.id)
        .bind(&job.job_type)
        .bind(job.state)
        .bind(job.priority)
        .bind(job.scheduled_time)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job", e))?
        .ok_or_else(|| AppError::not_found("Job not found"))
    }

    async fn delete(&self, id: JobId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))?;
        Ok(total.max(0) as u64)
    }
}
