//! Estimate the percolation threshold of an n×n grid over t trials.
//!
//! ```text
//! percolation-stats 200 100
//! mean                    = 0.5929934999999997
//! stddev                  = 0.00876990421552567
//! 95% confidence interval = [0.5912745987737567, 0.5947124012262428]
//! ```

use clap::Parser;

use percolation_sim::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Grid size n (the grid is n×n)
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Number of independent trials
    #[arg(allow_negative_numbers = true)]
    trials: i64,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> Result<SimConfig> {
        let config = SimConfig::new(self.n, self.trials)?;
        Ok(match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let result = run_experiment(&cli.config()?)?;
    let stats = &result.stats;

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );
    Ok(())
}
