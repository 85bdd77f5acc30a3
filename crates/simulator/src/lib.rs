//! Ringstab Simulator
//!
//! The driver layer over `ringstab-simulation`: builds the seeded random
//! source, runs complete simulations, and aggregates results.
//!
//! # Example
//!
//! ```
//! use ringstab_simulator::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::new(5).with_seed(42);
//! let report = Simulator::new(config).run().expect("valid ring size");
//!
//! println!("{report}");
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod runner;

pub use config::{SimulatorConfig, DEFAULT_RING_SIZE};
pub use error::SimulatorError;
pub use metrics::{BatchReport, RunReport};
pub use runner::Simulator;
