//! Job lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Settings for job creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobsConfig {
    /// Seed for the initial-state random source. `None` seeds from OS entropy.
    #[serde(default)]
    pub state_seed: Option<u64>,
}
