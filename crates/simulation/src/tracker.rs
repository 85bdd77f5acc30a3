//! Round accounting for the asynchronous scheduler.

use ringstab_types::ProcessIndex;
use std::collections::HashSet;

/// Tracks which processes have acted since the last round boundary.
///
/// A round completes once every index has acted at least once since the
/// previous boundary. Recording an action and completing a round are
/// separate operations: the scheduler records on every step but only
/// polls for completion on steps that run the full rule. The root's
/// reset steps skip the poll, so a completion they make due is observed
/// on the next non-root step.
///
/// This is simulation bookkeeping, not protocol state; it exists to
/// report the round-complexity metric.
#[derive(Debug)]
pub struct RoundTracker {
    executed: HashSet<ProcessIndex>,
    ring_size: usize,
    rounds: u64,
}

impl RoundTracker {
    /// Create a tracker for a ring of `ring_size` processes.
    pub fn new(ring_size: usize) -> Self {
        Self {
            executed: HashSet::with_capacity(ring_size),
            ring_size,
            rounds: 0,
        }
    }

    /// Record that `index` was scheduled.
    pub fn record(&mut self, index: ProcessIndex) {
        self.executed.insert(index);
    }

    /// Complete a round if every index has acted since the last boundary.
    ///
    /// On completion the executed set resets and the round count
    /// increments by one. Returns whether a round completed.
    pub fn try_complete(&mut self) -> bool {
        if self.executed.len() == self.ring_size {
            self.rounds += 1;
            self.executed.clear();
            true
        } else {
            false
        }
    }

    /// Number of completed rounds. Never decreases.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Distinct processes that have acted since the last boundary.
    pub fn executed_len(&self) -> usize {
        self.executed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_completes_only_when_all_indices_acted() {
        let mut tracker = RoundTracker::new(3);

        tracker.record(ProcessIndex(0));
        assert!(!tracker.try_complete());
        tracker.record(ProcessIndex(2));
        assert!(!tracker.try_complete());

        tracker.record(ProcessIndex(1));
        assert!(tracker.try_complete());
        assert_eq!(tracker.rounds(), 1);
    }

    #[test]
    fn test_duplicate_selections_do_not_advance_a_round() {
        let mut tracker = RoundTracker::new(2);

        tracker.record(ProcessIndex(1));
        tracker.record(ProcessIndex(1));
        tracker.record(ProcessIndex(1));
        assert!(!tracker.try_complete());
        assert_eq!(tracker.executed_len(), 1);
    }

    #[test]
    fn test_completion_resets_the_executed_set() {
        let mut tracker = RoundTracker::new(2);

        tracker.record(ProcessIndex(0));
        tracker.record(ProcessIndex(1));
        assert!(tracker.try_complete());
        assert_eq!(tracker.executed_len(), 0);

        // The next round starts from scratch.
        tracker.record(ProcessIndex(0));
        assert!(!tracker.try_complete());
        tracker.record(ProcessIndex(1));
        assert!(tracker.try_complete());
        assert_eq!(tracker.rounds(), 2);
    }

    #[test]
    fn test_completion_is_deferred_until_polled() {
        // A full executed set does not advance the round count on its
        // own; the increment lands on the next poll.
        let mut tracker = RoundTracker::new(2);

        tracker.record(ProcessIndex(0));
        tracker.record(ProcessIndex(1));
        assert_eq!(tracker.rounds(), 0);

        tracker.record(ProcessIndex(1));
        assert!(tracker.try_complete());
        assert_eq!(tracker.rounds(), 1);
    }
}
