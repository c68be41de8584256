//! In-process job repository.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use jobtrack_core::error::AppError;
use jobtrack_core::result::AppResult;
use jobtrack_core::traits::Repository;
use jobtrack_core::types::JobId;
use jobtrack_entity::job::{Job, NewJob};

/// Job gateway backed by an ordered map.
///
/// Identifiers come from a monotonically increasing counter starting at 1,
/// so deleted ids are never handed out again.
#[derive(Debug)]
pub struct MemoryJobRepository {
    jobs: RwLock<BTreeMap<JobId, Job>>,
    next_id: AtomicI64,
}

impl MemoryJobRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn allocate_id(&self) -> JobId {
        JobId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for MemoryJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Job, NewJob, JobId> for MemoryJobRepository {
    async fn find_by_id(&self, id: JobId) -> AppResult<Option<Job>> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        Ok(self.jobs.read().await.values().cloned().collect())
    }

    async fn create(&self, data: &NewJob) -> AppResult<Job> {
        let mut jobs = self.jobs.write().await;
        let job = Job::from_new(self.allocate_id(), data);
        jobs.insert(job.id, job.clone());
        debug!(job_id = %job.id, "Stored job in memory");
        Ok(job)
    }

    async fn create_many(&self, data: &[NewJob]) -> AppResult<Vec<Job>> {
        // Holding the write lock for the whole batch keeps ids contiguous.
        let mut jobs = self.jobs.write().await;
        let created: Vec<Job> = data
            .iter()
            .map(|item| Job::from_new(self.allocate_id(), item))
            .collect();
        for job in &created {
            jobs.insert(job.id, job.clone());
        }
        debug!(count = created.len(), "Stored job batch in memory");
        Ok(created)
    }

    async fn update(&self, job: &Job) -> AppResult<Job> {
        let mut jobs = self.jobs.write().await;
        let slot = jobs
            .get_mut(&job.id)
            .ok_or_else(|| AppError::not_found("Job not found"))?;
        *slot = job.clone();
        Ok(job.clone())
    }

    async fn delete(&self, id: JobId) -> AppResult<bool> {
        Ok(self.jobs.write().await.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.jobs.read().await.len() as u64)
    }
}
