//! Scheduler configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimulationConfig {
    /// Optional hard cap on scheduler steps.
    ///
    /// The protocol terminates with probability 1 but has no guaranteed
    /// step bound. When a cap is set and reached, the run reports
    /// `SimulationOutcome::StepLimitReached` instead of silently
    /// returning a round count. The default is no cap.
    pub max_steps: Option<u64>,
}

impl SimulationConfig {
    /// Create a configuration with no step cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a hard cap on scheduler steps.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_cap() {
        assert_eq!(SimulationConfig::default().max_steps, None);
        assert_eq!(SimulationConfig::new().max_steps, None);
    }

    #[test]
    fn test_with_max_steps() {
        let config = SimulationConfig::new().with_max_steps(500);
        assert_eq!(config.max_steps, Some(500));
    }
}
