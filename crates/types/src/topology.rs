//! Circular index arithmetic for a fixed-size ring.

use crate::ProcessIndex;

/// Errors that can occur when constructing a ring topology.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// Ring size below the minimum of one process.
    #[error("ring requires at least one process")]
    EmptyRing,
}

/// Fixed-size circular indexing scheme.
///
/// Every index in `[0, N)` has exactly one predecessor and one successor.
/// For a single-process ring both neighbors are the process itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingTopology {
    size: usize,
}

impl RingTopology {
    /// Create a topology for `size` processes.
    pub fn new(size: usize) -> Result<Self, TopologyError> {
        if size == 0 {
            return Err(TopologyError::EmptyRing);
        }
        Ok(Self { size })
    }

    /// Number of processes on the ring.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the ring consists of a single process.
    pub fn is_singleton(&self) -> bool {
        self.size == 1
    }

    /// The index preceding `index` on the ring.
    pub fn predecessor(&self, index: ProcessIndex) -> ProcessIndex {
        ProcessIndex((index.0 + self.size - 1) % self.size)
    }

    /// The index following `index` on the ring.
    pub fn successor(&self, index: ProcessIndex) -> ProcessIndex {
        ProcessIndex((index.0 + 1) % self.size)
    }

    /// Iterate over all indices in order.
    pub fn indices(&self) -> impl Iterator<Item = ProcessIndex> {
        (0..self.size).map(ProcessIndex)
    }
}
