//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum dispatched actions per session before timeout
    pub max_actions_per_run: u64,

    /// A run counts as completed once the hunter reaches this level
    pub target_level: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_actions_per_run: 20_000,
            target_level: 50,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded run for quick checks.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_actions_per_run: 2_000,
            target_level: 10,
            verbosity: 0,
        }
    }
}
