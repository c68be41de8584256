//! Job lifecycle service.

use chrono::Utc;
use tracing::{debug, info, warn};

use jobtrack_core::config::JobsConfig;
use jobtrack_core::error::AppError;
use jobtrack_core::result::AppResult;
use jobtrack_core::types::JobId;
use jobtrack_database::DynJobRepository;
use jobtrack_entity::job::{CreateJobRequest, Job, JobState, NewJob};

use super::assignment::StateAssigner;
use super::guard::{ensure_deletable, ensure_retryable};
use super::validation::{validate_job, validate_jobs};

/// Message returned when a job id does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "Job not found";

/// Applies validation, initial-state assignment, and lifecycle guards on
/// top of the job gateway.
#[derive(Debug)]
pub struct JobService {
    /// Persistence gateway.
    repo: DynJobRepository,
    /// Random source for unscheduled jobs.
    assigner: StateAssigner,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(repo: DynJobRepository, assigner: StateAssigner) -> Self {
        Self { repo, assigner }
    }

    /// Creates a job service seeded per configuration.
    pub fn from_config(repo: DynJobRepository, config: &JobsConfig) -> Self {
        let assigner = match config.state_seed {
            Some(seed) => {
                info!(seed, "Using fixed seed for initial job states");
                StateAssigner::seeded(seed)
            }
            None => StateAssigner::from_entropy(),
        };
        Self::new(repo, assigner)
    }

    /// Validates, assigns a state to, and persists one job.
    pub async fn create_job(&self, request: &CreateJobRequest) -> AppResult<Job> {
        validate_job(request, Utc::now())?;

        let new_job = self.decide(request);
        let job = self.repo.create(&new_job).await?;

        info!(
            job_id = %job.id,
            job_type = %job.job_type,
            state = %job.state,
            priority = job.priority,
            "Job created"
        );
        Ok(job)
    }

    /// Validates every job first, then persists all of them in input order.
    pub async fn create_jobs(&self, requests: &[CreateJobRequest]) -> AppResult<Vec<Job>> {
        validate_jobs(requests, Utc::now())?;

        let new_jobs: Vec<NewJob> = requests.iter().map(|r| self.decide(r)).collect();
        let jobs = self.repo.create_many(&new_jobs).await?;

        info!(count = jobs.len(), "Job batch created");
        Ok(jobs)
    }

    /// Lists every job.
    pub async fn get_all_jobs(&self) -> AppResult<Vec<Job>> {
        let jobs = self.repo.find_all().await?;
        debug!(count = jobs.len(), "Listed jobs");
        Ok(jobs)
    }

    /// Fetches a job by id.
    pub async fn get_job(&self, id: JobId) -> AppResult<Job> {
        debug!(job_id = %id, "Fetching job");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    /// Fetches just the lifecycle state of a job.
    pub async fn get_job_state(&self, id: JobId) -> AppResult<JobState> {
        self.get_job(id).await.map(|job| job.state)
    }

    /// Deletes a job unless it is running.
    pub async fn delete_job(&self, id: JobId) -> AppResult<()> {
        let job = self.get_job(id).await?;
        if let Err(e) = ensure_deletable(&job) {
            warn!(job_id = %id, state = %job.state, "Refusing to delete job");
            return Err(e);
        }

        if !self.repo.delete(id).await? {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        info!(job_id = %id, "Job deleted");
        Ok(())
    }

    /// Resets a failed job to `QUEUED`, keeping its id.
    pub async fn retry_job(&self, id: JobId) -> AppResult<Job> {
        let mut job = self.get_job(id).await?;
        if let Err(e) = ensure_retryable(&job) {
            warn!(job_id = %id, state = %job.state, "Refusing to retry job");
            return Err(e);
        }

        job.state = JobState::Queued;
        let job = self.repo.update(&job).await?;

        info!(job_id = %id, state = %job.state, "Job retried");
        Ok(job)
    }

    /// Whether the job exists and is running. Absence is not an error here.
    pub async fn is_job_running(&self, id: JobId) -> AppResult<bool> {
        let running = self
            .repo
            .find_by_id(id)
            .await?
            .is_some_and(|job| job.is_running());
        debug!(job_id = %id, running, "Checked running state");
        Ok(running)
    }

    /// Total number of stored jobs; doubles as a gateway liveness probe.
    pub async fn count_jobs(&self) -> AppResult<u64> {
        self.repo.count().await
    }

    fn decide(&self, request: &CreateJobRequest) -> NewJob {
        NewJob {
            job_type: request.type_label().to_string(),
            state: self.assigner.assign(request.scheduled_time),
            priority: request.priority,
            scheduled_time: request.scheduled_time,
        }
    }
}
