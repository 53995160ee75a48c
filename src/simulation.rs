//! Monte Carlo estimation of the percolation threshold.
//!
//! One trial starts from a fully blocked grid and opens sites in uniformly
//! random order until the system percolates; the open fraction at that moment
//! is the trial's threshold. An experiment repeats this for `trials`
//! independent grids and summarises the thresholds.
//!
//! Every trial owns its grid and its random generator. Generators are derived
//! from the experiment seed and the trial index, so an experiment gives the
//! same thresholds whether its trials run sequentially or in parallel.

use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{PercolationError, Result};
use crate::percolation::Percolation;
use crate::stats::ThresholdStats;

/// Configuration for a threshold experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Grid dimension (n×n sites).
    pub n: usize,
    /// Number of independent trials.
    pub trials: usize,
    /// Base seed. Drawn from the thread generator when absent.
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Validate raw grid size and trial count; both must be positive.
    pub fn new(n: i64, trials: i64) -> Result<Self> {
        Ok(Self {
            n: positive("grid size", n)?,
            trials: positive("trial count", trials)?,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn positive(what: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(PercolationError::InvalidArgument { what, value });
    }
    usize::try_from(value).map_err(|_| PercolationError::InvalidArgument { what, value })
}

/// Result of a threshold experiment.
#[derive(Debug, Clone)]
pub struct SimResult {
    pub n: usize,
    /// Seed the trial generators were derived from.
    pub seed: u64,
    pub stats: ThresholdStats,
}

/// Run a single trial on an n×n grid, returning the open fraction at the
/// moment the system first percolates.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let mut perc = Percolation::new(n)?;

    let mut order: Vec<(usize, usize)> = (1..=n)
        .flat_map(|row| (1..=n).map(move |col| (row, col)))
        .collect();
    order.shuffle(rng);

    for (row, col) in order {
        perc.open(row, col)?;
        if perc.percolates()? {
            break;
        }
    }
    Ok(perc.open_fraction())
}

/// Generator for one trial of an experiment.
pub fn trial_rng(seed: u64, trial: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (trial as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn seeded_trial(n: usize, seed: u64, trial: usize) -> Result<f64> {
    let threshold = run_trial(n, &mut trial_rng(seed, trial))?;
    debug!("trial {}: n={} threshold={:.6}", trial, n, threshold);
    Ok(threshold)
}

/// Thresholds of `trials` trials, run one after another.
pub fn run_trials(n: usize, trials: usize, seed: u64) -> Result<Vec<f64>> {
    (0..trials).map(|t| seeded_trial(n, seed, t)).collect()
}

/// Thresholds of `trials` trials, spread over the rayon pool.
#[cfg(feature = "parallel")]
pub fn run_trials_parallel(n: usize, trials: usize, seed: u64) -> Result<Vec<f64>> {
    use rayon::prelude::*;
    (0..trials)
        .into_par_iter()
        .map(|t| seeded_trial(n, seed, t))
        .collect()
}

/// Run a full threshold experiment.
pub fn run_experiment(config: &SimConfig) -> Result<SimResult> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(
        "starting experiment: n={} trials={} seed={}",
        config.n, config.trials, seed
    );
    let start = Instant::now();

    #[cfg(feature = "parallel")]
    let thresholds = run_trials_parallel(config.n, config.trials, seed)?;
    #[cfg(not(feature = "parallel"))]
    let thresholds = run_trials(config.n, config.trials, seed)?;

    let stats = ThresholdStats::from_samples(&thresholds)?;
    info!(
        "finished experiment in {:.2?}: mean={:.6} stddev={:.6}",
        start.elapsed(),
        stats.mean(),
        stats.stddev()
    );

    Ok(SimResult {
        n: config.n,
        seed,
        stats,
    })
}

/// Run the same experiment across several grid sizes.
pub fn threshold_sweep(sizes: &[usize], trials: usize, seed: Option<u64>) -> Result<Vec<SimResult>> {
    sizes
        .iter()
        .map(|&n| {
            run_experiment(&SimConfig {
                n,
                trials,
                seed,
            })
        })
        .collect()
}
