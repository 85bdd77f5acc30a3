//! The asynchronous scheduler driving a ring to stabilization.

use crate::{RoundTracker, SimulationConfig};
use rand::Rng;
use ringstab_protocol::{ActionKind, Ring};
use ringstab_types::{ProcessIndex, TopologyError};
use tracing::{debug, info, trace};

/// Result of a single scheduler step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The configuration is not yet legal; keep scheduling.
    Progress,
    /// The stability check passed on this step.
    Stable,
}

/// Terminal outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationOutcome {
    /// The ring reached a legal configuration.
    Stable {
        /// Completed synchronous-equivalent rounds at termination.
        rounds: u64,
        /// Scheduler steps taken.
        steps: u64,
    },
    /// The configured step cap was reached before stabilization.
    StepLimitReached {
        /// The configured cap.
        limit: u64,
        /// Completed rounds when the cap was hit.
        rounds: u64,
    },
}

impl SimulationOutcome {
    /// Completed rounds regardless of how the run ended.
    pub fn rounds(&self) -> u64 {
        match self {
            SimulationOutcome::Stable { rounds, .. } => *rounds,
            SimulationOutcome::StepLimitReached { rounds, .. } => *rounds,
        }
    }

    /// Whether the run ended in a legal configuration.
    pub fn is_stable(&self) -> bool {
        matches!(self, SimulationOutcome::Stable { .. })
    }
}

/// Randomized asynchronous scheduler over one ring.
///
/// One uniformly random process acts per step. Selection is with
/// replacement: no fairness is guaranteed within a round except
/// probabilistically.
#[derive(Debug)]
pub struct Scheduler {
    ring: Ring,
    tracker: RoundTracker,
    config: SimulationConfig,
    steps: u64,
}

impl Scheduler {
    /// Create a scheduler over a fresh ring of `ring_size` processes.
    pub fn new(ring_size: usize, config: SimulationConfig) -> Result<Self, TopologyError> {
        Ok(Self::with_ring(Ring::new(ring_size)?, config))
    }

    /// Create a scheduler over an existing ring configuration.
    pub fn with_ring(ring: Ring, config: SimulationConfig) -> Self {
        let tracker = RoundTracker::new(ring.len());
        Self {
            ring,
            tracker,
            config,
            steps: 0,
        }
    }

    /// The ring in its current configuration.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Completed rounds so far.
    pub fn rounds(&self) -> u64 {
        self.tracker.rounds()
    }

    /// Scheduler steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Draw the next process to schedule, uniformly over the ring.
    ///
    /// Memoryless: the same process may be drawn arbitrarily many times
    /// in a row.
    pub fn select(&self, rng: &mut impl Rng) -> ProcessIndex {
        ProcessIndex(rng.gen_range(0..self.ring.len()))
    }

    /// Execute one scheduler step at `index`.
    ///
    /// Records the selection for round accounting, then applies the
    /// process's transition rule. A root reset returns immediately
    /// without polling round completion or stability, so a root step
    /// never terminates the run by itself. Non-root steps poll round
    /// completion first and stability second, in that order.
    pub fn step(&mut self, index: ProcessIndex) -> StepStatus {
        self.steps += 1;
        self.tracker.record(index);

        let action = self.ring.apply(index);
        trace!(step = self.steps, %index, ?action, "scheduled");

        if action == ActionKind::RootReset {
            return StepStatus::Progress;
        }

        if self.tracker.try_complete() {
            debug!(
                rounds = self.tracker.rounds(),
                step = self.steps,
                "round completed"
            );
        }

        if self.ring.is_stable() {
            StepStatus::Stable
        } else {
            StepStatus::Progress
        }
    }

    /// Run until the ring stabilizes or the configured step cap is hit.
    ///
    /// A single-process ring is trivially legal: the run returns
    /// immediately with zero rounds and zero steps, without drawing from
    /// `rng` or consulting the stability predicate.
    pub fn run(&mut self, rng: &mut impl Rng) -> SimulationOutcome {
        if self.ring.is_singleton() {
            return SimulationOutcome::Stable {
                rounds: 0,
                steps: 0,
            };
        }

        loop {
            if let Some(limit) = self.config.max_steps {
                if self.steps >= limit {
                    return SimulationOutcome::StepLimitReached {
                        limit,
                        rounds: self.tracker.rounds(),
                    };
                }
            }

            let index = self.select(rng);
            if self.step(index) == StepStatus::Stable {
                let rounds = self.tracker.rounds();
                info!(rounds, steps = self.steps, "ring stabilized");
                return SimulationOutcome::Stable {
                    rounds,
                    steps: self.steps,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use ringstab_types::Color;

    /// RNG that fails the test if the scheduler draws from it.
    struct PanicRng;

    impl RngCore for PanicRng {
        fn next_u32(&mut self) -> u32 {
            panic!("the random scheduler must not run");
        }

        fn next_u64(&mut self) -> u64 {
            panic!("the random scheduler must not run");
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("the random scheduler must not run");
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            panic!("the random scheduler must not run");
        }
    }

    #[test]
    fn test_singleton_ring_stabilizes_without_scheduling() {
        let mut scheduler = Scheduler::new(1, SimulationConfig::default()).unwrap();
        let outcome = scheduler.run(&mut PanicRng);

        assert_eq!(
            outcome,
            SimulationOutcome::Stable {
                rounds: 0,
                steps: 0
            }
        );
    }

    #[test]
    fn test_two_ring_single_step_scenario() {
        // From all-Blue, scheduling p1 once toggles it to Red, which is
        // legal on a 2-ring; the executed set never covered p0, so no
        // round completed.
        let mut scheduler = Scheduler::new(2, SimulationConfig::default()).unwrap();

        let status = scheduler.step(ProcessIndex(1));
        assert_eq!(status, StepStatus::Stable);
        assert_eq!(scheduler.rounds(), 0);
        assert_eq!(scheduler.ring().colors(), vec![Color::Blue, Color::Red]);
    }

    #[test]
    fn test_root_step_never_terminates_the_run() {
        // [Blue, Red] is already legal, and a root reset keeps it legal,
        // yet the root's early-continue path skips the stability check.
        let ring = Ring::with_colors(vec![Color::Blue, Color::Red]).unwrap();
        let mut scheduler = Scheduler::with_ring(ring, SimulationConfig::default());

        let status = scheduler.step(ProcessIndex::ROOT);
        assert_eq!(status, StepStatus::Progress);
        assert_eq!(
            scheduler.ring().process(ProcessIndex::ROOT).color(),
            Color::Green
        );
    }

    #[test]
    fn test_root_step_defers_round_completion() {
        // Walk a 3-ring so the executed set fills on a root step. The
        // root's early continue skips both polls, so the round (and the
        // stability verdict) land on the next non-root step.
        let mut scheduler = Scheduler::new(3, SimulationConfig::default()).unwrap();

        assert_eq!(scheduler.step(ProcessIndex(1)), StepStatus::Progress);
        assert_eq!(scheduler.step(ProcessIndex(2)), StepStatus::Progress);

        // Executed set now covers {0, 1, 2} and the configuration
        // [Green, Red, Blue] is legal, but a root step polls nothing.
        assert_eq!(scheduler.step(ProcessIndex::ROOT), StepStatus::Progress);
        assert_eq!(scheduler.rounds(), 0);

        // The next non-root step counts the round first, then observes
        // stability.
        assert_eq!(scheduler.step(ProcessIndex(1)), StepStatus::Stable);
        assert_eq!(scheduler.rounds(), 1);
        assert_eq!(
            scheduler.ring().colors(),
            vec![Color::Green, Color::Red, Color::Blue]
        );
    }

    #[test]
    fn test_runs_terminate_for_small_rings() {
        for ring_size in 2..=5 {
            for seed in [1, 2, 3, 42, 12345] {
                let config = SimulationConfig::new().with_max_steps(1_000_000);
                let mut scheduler = Scheduler::new(ring_size, config).unwrap();
                let mut rng = ChaCha8Rng::seed_from_u64(seed);

                let outcome = scheduler.run(&mut rng);
                assert!(
                    outcome.is_stable(),
                    "ring of {} with seed {} did not stabilize: {:?}",
                    ring_size,
                    seed,
                    outcome
                );
                assert!(scheduler.ring().is_stable());
            }
        }
    }

    #[test]
    fn test_rounds_are_monotonic_across_a_run() {
        let mut scheduler = Scheduler::new(4, SimulationConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let mut previous = 0;
        loop {
            let index = scheduler.select(&mut rng);
            let status = scheduler.step(index);

            let rounds = scheduler.rounds();
            assert!(rounds >= previous);
            previous = rounds;

            if status == StepStatus::Stable {
                break;
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_run() {
        let run = |seed: u64| {
            let mut scheduler = Scheduler::new(5, SimulationConfig::default()).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = scheduler.run(&mut rng);
            (outcome, scheduler.ring().colors())
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_step_cap_reports_a_distinct_outcome() {
        let config = SimulationConfig::new().with_max_steps(0);
        let mut scheduler = Scheduler::new(3, config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outcome = scheduler.run(&mut rng);
        assert_eq!(
            outcome,
            SimulationOutcome::StepLimitReached {
                limit: 0,
                rounds: 0
            }
        );
        assert!(!outcome.is_stable());
    }

    #[test]
    fn test_selection_stays_in_range() {
        let scheduler = Scheduler::new(4, SimulationConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..1000 {
            let index = scheduler.select(&mut rng);
            assert!(index.0 < 4);
        }
    }
}
