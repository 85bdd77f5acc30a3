//! The ring of processes and its transition rules.

use ringstab_types::{Color, Process, ProcessIndex, RingTopology, TopologyError};

/// Which transition rule a scheduled step applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// The distinguished root reset itself to Green.
    RootReset,
    /// A non-root process toggled its predecessor's color.
    Toggle,
}

/// A fixed-size ring of processes.
///
/// The ring exclusively owns its processes for the duration of one
/// simulation run. Every process starts Blue; the root is not special at
/// construction time.
#[derive(Debug, Clone)]
pub struct Ring {
    topology: RingTopology,
    processes: Vec<Process>,
}

impl Ring {
    /// Create a ring of `size` processes, all in the initial color.
    pub fn new(size: usize) -> Result<Self, TopologyError> {
        let topology = RingTopology::new(size)?;
        let processes = topology.indices().map(Process::new).collect();
        Ok(Self {
            topology,
            processes,
        })
    }

    /// Create a ring with an explicit initial color per process.
    ///
    /// Useful for driving specific configurations, mostly in tests.
    pub fn with_colors(colors: Vec<Color>) -> Result<Self, TopologyError> {
        let topology = RingTopology::new(colors.len())?;
        let processes = topology
            .indices()
            .zip(colors)
            .map(|(index, color)| {
                let mut process = Process::new(index);
                process.set_color(color);
                process
            })
            .collect();
        Ok(Self {
            topology,
            processes,
        })
    }

    /// Number of processes on the ring.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the ring consists of a single process.
    pub fn is_singleton(&self) -> bool {
        self.topology.is_singleton()
    }

    /// The ring's topology.
    pub fn topology(&self) -> RingTopology {
        self.topology
    }

    /// The process at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `[0, len)`.
    pub fn process(&self, index: ProcessIndex) -> &Process {
        &self.processes[index.0]
    }

    /// All processes in index order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Current colors in index order.
    pub fn colors(&self) -> Vec<Color> {
        self.processes.iter().map(|p| p.color()).collect()
    }

    /// Apply one protocol action at `index`.
    ///
    /// The distinguished root unconditionally resets itself to Green
    /// without reading its predecessor. Every other process copies the
    /// toggle of its predecessor's color. The selected process's color is
    /// the only state that changes.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `[0, len)`.
    pub fn apply(&mut self, index: ProcessIndex) -> ActionKind {
        if index.is_root() {
            self.processes[index.0].set_color(Color::Green);
            return ActionKind::RootReset;
        }

        let predecessor = self.topology.predecessor(index);
        let predecessor_color = self.processes[predecessor.0].color();
        self.processes[index.0].act(predecessor_color);
        ActionKind::Toggle
    }

    /// Check whether the configuration is legal.
    ///
    /// Legal means no process shares a color with either of its
    /// topological neighbors. Returns false on the first violation found.
    ///
    /// A single-process ring is its own neighbor in both directions, so
    /// this predicate never reports it stable; callers must short-circuit
    /// the singleton case before scheduling (see `ringstab-simulation`).
    pub fn is_stable(&self) -> bool {
        for process in &self.processes {
            let index = process.index();
            let predecessor = self.process(self.topology.predecessor(index));
            let successor = self.process(self.topology.successor(index));
            if process.color() == predecessor.color() || process.color() == successor.color() {
                return false;
            }
        }
        true
    }
}
