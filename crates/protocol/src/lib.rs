//! Ring state and stabilization rules.
//!
//! This crate owns the protocol semantics: the ring of processes, the
//! per-step transition rules, and the legality predicate. Scheduling is
//! deliberately out of scope; the `ringstab-simulation` crate decides
//! which process acts when.
//!
//! The transition rule family is fixed:
//!
//! - The distinguished root (index 0) unconditionally resets itself to
//!   Green and never reads its predecessor.
//! - Every other process copies the toggle of its predecessor's color.
//!
//! A configuration is legal once no process shares a color with either
//! ring neighbor.

mod ring;

pub use ring::{ActionKind, Ring};
