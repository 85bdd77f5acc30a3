//! Configuration types for the simulator.

use ringstab_simulation::SimulationConfig;

/// Ring size used when none is supplied.
pub const DEFAULT_RING_SIZE: usize = 2;

/// Configuration for a simulation run.
#[derive(Clone, Debug)]
pub struct SimulatorConfig {
    /// Number of processes on the ring.
    pub ring_size: usize,

    /// Base random seed for deterministic simulation.
    pub seed: u64,

    /// Number of independent runs to execute.
    pub runs: u64,

    /// Optional hard cap on scheduler steps per run.
    pub max_steps: Option<u64>,
}

impl SimulatorConfig {
    /// Create a configuration for a ring of `ring_size` processes.
    pub fn new(ring_size: usize) -> Self {
        Self {
            ring_size,
            seed: 12345,
            runs: 1,
            max_steps: None,
        }
    }

    /// Set the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of independent runs.
    pub fn with_runs(mut self, runs: u64) -> Self {
        self.runs = runs;
        self
    }

    /// Set a hard cap on scheduler steps per run.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Convert to the scheduler-level configuration.
    pub fn to_simulation_config(&self) -> SimulationConfig {
        let config = SimulationConfig::new();
        match self.max_steps {
            Some(max_steps) => config.with_max_steps(max_steps),
            None => config,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RING_SIZE)
    }
}

/// Parse a ring-size argument leniently.
///
/// A missing or unparsable value falls back to [`DEFAULT_RING_SIZE`]
/// rather than failing; a parsable but illegal value (0) is passed
/// through so construction can report it.
pub fn lenient_ring_size(arg: Option<&str>) -> usize {
    arg.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_RING_SIZE)
}
