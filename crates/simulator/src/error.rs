//! Simulator error types.

use ringstab_types::TopologyError;

/// Errors that can occur while driving simulations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulatorError {
    /// The requested ring could not be constructed.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// A metric value could not be recorded.
    #[error("failed to record metric: {0}")]
    Metrics(String),
}
