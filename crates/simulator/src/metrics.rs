//! Run reports and aggregated batch statistics.

use crate::SimulatorError;
use hdrhistogram::Histogram;
use ringstab_simulation::SimulationOutcome;
use ringstab_types::Color;
use std::fmt;

/// Report for a single simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Ring size simulated.
    pub ring_size: usize,
    /// Seed the run was driven by.
    pub seed: u64,
    /// Terminal outcome.
    pub outcome: SimulationOutcome,
    /// Per-process colors at termination, in index order.
    pub final_colors: Vec<Color>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            SimulationOutcome::Stable { rounds, .. } => {
                write!(f, "Stable in {} rounds", rounds)
            }
            SimulationOutcome::StepLimitReached { limit, rounds } => {
                write!(
                    f,
                    "No stable configuration within {} steps ({} rounds completed)",
                    limit, rounds
                )
            }
        }
    }
}

/// Aggregated statistics across a batch of independent runs.
#[derive(Debug, Clone)]
pub struct BatchReport {
    ring_size: usize,
    runs: u64,
    stabilized: u64,
    rounds: Histogram<u64>,
    steps: Histogram<u64>,
}

impl BatchReport {
    pub(crate) fn new(ring_size: usize) -> Result<Self, SimulatorError> {
        Ok(Self {
            ring_size,
            runs: 0,
            stabilized: 0,
            rounds: new_histogram()?,
            steps: new_histogram()?,
        })
    }

    /// Fold one run outcome into the batch.
    ///
    /// Runs stopped by the step cap count toward the total but
    /// contribute nothing to the round/step distributions.
    pub(crate) fn record(&mut self, outcome: &SimulationOutcome) -> Result<(), SimulatorError> {
        self.runs += 1;
        if let SimulationOutcome::Stable { rounds, steps } = outcome {
            self.stabilized += 1;
            record_value(&mut self.rounds, *rounds)?;
            record_value(&mut self.steps, *steps)?;
        }
        Ok(())
    }

    /// Ring size the batch was run against.
    pub fn ring_size(&self) -> usize {
        self.ring_size
    }

    /// Total runs executed.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Runs that reached a legal configuration.
    pub fn stabilized(&self) -> u64 {
        self.stabilized
    }

    /// Runs stopped by the step cap.
    pub fn capped(&self) -> u64 {
        self.runs - self.stabilized
    }

    /// Median rounds to stabilization.
    pub fn median_rounds(&self) -> u64 {
        self.rounds.value_at_quantile(0.5)
    }

    /// 99th percentile rounds to stabilization.
    pub fn p99_rounds(&self) -> u64 {
        self.rounds.value_at_quantile(0.99)
    }

    /// Worst observed rounds to stabilization.
    pub fn max_rounds(&self) -> u64 {
        self.rounds.max()
    }

    /// Median scheduler steps to stabilization.
    pub fn median_steps(&self) -> u64 {
        self.steps.value_at_quantile(0.5)
    }

    /// Worst observed scheduler steps to stabilization.
    pub fn max_steps(&self) -> u64 {
        self.steps.max()
    }

    /// Print the summary to stdout.
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Batch Report ===")?;
        writeln!(f, "Ring size: {}", self.ring_size)?;
        writeln!(f, "Runs: {}", self.runs)?;
        writeln!(f, "Stabilized: {}", self.stabilized)?;
        if self.capped() > 0 {
            writeln!(f, "Stopped at step cap: {}", self.capped())?;
        }
        writeln!(
            f,
            "Rounds: median {} / p99 {} / max {}",
            self.median_rounds(),
            self.p99_rounds(),
            self.max_rounds()
        )?;
        write!(
            f,
            "Steps:  median {} / max {}",
            self.median_steps(),
            self.max_steps()
        )
    }
}

fn new_histogram() -> Result<Histogram<u64>, SimulatorError> {
    Histogram::new(3).map_err(|e| SimulatorError::Metrics(e.to_string()))
}

fn record_value(histogram: &mut Histogram<u64>, value: u64) -> Result<(), SimulatorError> {
    histogram
        .record(value)
        .map_err(|e| SimulatorError::Metrics(e.to_string()))
}
