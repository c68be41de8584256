//! Initial lifecycle state assignment.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use jobtrack_entity::job::JobState;

/// Decide the state a new job is created in.
///
/// Scheduled jobs always start `QUEUED`. Unscheduled jobs get a uniformly
/// random state drawn by index from [`JobState::ALL`].
pub fn assign_state<R: Rng>(
    rng: &mut R,
    scheduled_time: Option<DateTime<Utc>>,
) -> JobState {
    if scheduled_time.is_some() {
        return JobState::Queued;
    }
    let index = rng.random_range(0..JobState::ALL.len());
    JobState::ALL[index]
}

/// Owns the random source used for initial-state draws.
#[derive(Debug)]
pub struct StateAssigner {
    rng: Mutex<StdRng>,
}

impl StateAssigner {
    /// Use an explicit random source.
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Draw the initial state for one job.
    pub fn assign(&self, scheduled_time: Option<DateTime<Utc>>) -> JobState {
        // The guard never spans an await, and a poisoned RNG is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        assign_state(&mut *rng, scheduled_time)
    }
}
