//! Randomized asynchronous scheduler for the ring protocol.
//!
//! This crate drives a ring toward a legal configuration under an
//! asynchronous execution model: one uniformly random process acts per
//! step, with replacement, and elapsed "time" is reported in
//! synchronous-equivalent rounds.
//!
//! The scheduler is a synchronous state machine. It performs no I/O and
//! owns no randomness; callers inject the random source, so a run is
//! fully deterministic for a given RNG sequence.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                    Scheduler                     │
//! │                                                  │
//! │  select(rng) ──► step(index)                     │
//! │                    │                             │
//! │                    ├─ RoundTracker::record       │
//! │                    ├─ Ring::apply                │
//! │                    ├─ root reset? early continue │
//! │                    ├─ RoundTracker::try_complete │
//! │                    └─ Ring::is_stable            │
//! └──────────────────────────────────────────────────┘
//! ```

mod config;
mod scheduler;
mod tracker;

pub use config::SimulationConfig;
pub use scheduler::{Scheduler, SimulationOutcome, StepStatus};
pub use tracker::RoundTracker;
