//! A single ring member: immutable identity plus mutable color.

use crate::{Color, ProcessIndex};
use std::fmt;

/// One member of the ring.
///
/// The index is fixed at construction; only the color ever changes, and
/// only through [`Process::act`] or [`Process::set_color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    index: ProcessIndex,
    color: Color,
}

impl Process {
    /// Create a process in the initial color.
    pub fn new(index: ProcessIndex) -> Self {
        Self {
            index,
            color: Color::default(),
        }
    }

    /// This process's position on the ring.
    pub fn index(&self) -> ProcessIndex {
        self.index
    }

    /// Current color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Overwrite the color directly.
    ///
    /// The distinguished root's reset goes through here; every other
    /// write goes through [`Process::act`].
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Apply the general transition rule against the predecessor's color.
    pub fn act(&mut self, predecessor: Color) {
        self.color = predecessor.toggled();
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.color)
    }
}
