//! Ring stabilization simulator CLI.
//!
//! Runs the randomized asynchronous scheduler on a ring of N processes
//! and reports how many rounds it took to reach a legal configuration.

use clap::Parser;
use ringstab_simulator::config::lenient_ring_size;
use ringstab_simulator::{Simulator, SimulatorConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "ringstab-sim")]
#[command(about = "Self-stabilizing ring coloring simulator")]
#[command(version)]
struct Cli {
    /// Ring size; absent or unparsable values fall back to 2
    ring_size: Option<String>,

    /// Random seed (picked at random and logged when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of independent runs; more than one prints a batch summary
    #[arg(long, default_value = "1")]
    runs: u64,

    /// Hard cap on scheduler steps per run
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print the final per-process state, one line per process
    #[arg(long)]
    print_state: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let ring_size = lenient_ring_size(cli.ring_size.as_deref());
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(ring_size, seed, "starting simulation");

    let mut config = SimulatorConfig::new(ring_size)
        .with_seed(seed)
        .with_runs(cli.runs);
    if let Some(max_steps) = cli.max_steps {
        config = config.with_max_steps(max_steps);
    }

    let simulator = Simulator::new(config);

    if cli.runs > 1 {
        let report = simulator.run_batch()?;
        report.print();
        return Ok(());
    }

    let report = simulator.run()?;
    if cli.print_state {
        for (index, color) in report.final_colors.iter().enumerate() {
            println!("p{}: {}", index, color);
        }
    }
    println!("{}", report);

    Ok(())
}
