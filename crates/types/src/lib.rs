//! Core types for the ring stabilization protocol.
//!
//! Provides the process identity and color types plus the circular index
//! arithmetic shared by the protocol and simulation crates.

mod color;
mod identifiers;
mod process;
mod topology;

pub use color::Color;
pub use identifiers::ProcessIndex;
pub use process::Process;
pub use topology::{RingTopology, TopologyError};
