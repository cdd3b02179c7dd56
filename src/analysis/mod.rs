//! Schedulability analysis over a density sweep.
//!
//! For each density, generates independent random matrices, runs the
//! greedy rescheduler on each, and reports the fraction that were
//! perfectly schedulable.
//!
//! Densities are evaluated on rayon's pool when `parallel` is set. Each
//! density draws from its own random stream, so results do not depend on
//! the execution mode.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SimError;
use crate::models::{CompatibilityMatrix, ProbabilityRange};
use crate::random;
use crate::reschedule::Rescheduler;
use crate::validation::{validate_analyzer_config, validate_density};

/// Configuration of a schedulability analysis.
///
/// Defaults: 20×20 matrices, densities `0.000, 0.003, ..., 0.999`,
/// 100 experiments per density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Matrix dimension N.
    pub matrix_size: usize,
    /// Cell densities to evaluate.
    pub densities: Vec<f64>,
    /// Random matrices generated per density.
    pub experiments_per_density: u32,
    /// Seed for the per-density random streams.
    pub seed: u64,
    /// Evaluate densities in parallel.
    pub parallel: bool,
}

impl AnalyzerConfig {
    /// Sets the matrix dimension.
    pub fn with_matrix_size(mut self, size: usize) -> Self {
        self.matrix_size = size;
        self
    }

    /// Sets explicit densities.
    pub fn with_densities(mut self, densities: Vec<f64>) -> Self {
        self.densities = densities;
        self
    }

    /// Sets densities from a range.
    pub fn with_density_range(mut self, range: ProbabilityRange) -> Self {
        self.densities = range.values();
        self
    }

    /// Sets the number of experiments per density.
    pub fn with_experiments_per_density(mut self, experiments: u32) -> Self {
        self.experiments_per_density = experiments;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            matrix_size: 20,
            densities: ProbabilityRange::new(0.0, 1.0, 0.003).values(),
            experiments_per_density: 100,
            seed: random::DEFAULT_SEED,
            parallel: true,
        }
    }
}

/// Success rate measured at one density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    /// Probability that a cell is 1.
    pub density: f64,
    /// Experiments the heuristic solved.
    pub successes: u32,
    /// Experiments run.
    pub experiments: u32,
    /// `successes / experiments`.
    pub success_rate: f64,
}

/// Monte Carlo estimator of greedy schedulability.
///
/// # Example
///
/// ```
/// use u_schedsim::analysis::{AnalyzerConfig, SchedulabilityAnalyzer};
///
/// let config = AnalyzerConfig::default()
///     .with_matrix_size(5)
///     .with_densities(vec![0.0, 1.0])
///     .with_experiments_per_density(10);
/// let points = SchedulabilityAnalyzer::new(config).unwrap().run().unwrap();
///
/// assert_eq!(points[0].success_rate, 0.0);
/// assert_eq!(points[1].success_rate, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SchedulabilityAnalyzer {
    config: AnalyzerConfig,
    rescheduler: Rescheduler,
}

impl SchedulabilityAnalyzer {
    /// Creates an analyzer after validating the config.
    pub fn new(config: AnalyzerConfig) -> Result<Self, SimError> {
        validate_analyzer_config(&config)?;
        Ok(Self {
            config,
            rescheduler: Rescheduler::new(),
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Generates one matrix and reports whether the heuristic schedules it.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `density` is outside `[0, 1]`.
    pub fn trial<R: Rng>(&self, density: f64, rng: &mut R) -> Result<bool, SimError> {
        let mut matrix = CompatibilityMatrix::generate(self.config.matrix_size, density, rng)?;
        Ok(self.rescheduler.perfectly_schedulable(&mut matrix))
    }

    /// Runs all experiments for one density.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `density` is outside `[0, 1]`.
    pub fn estimate<R: Rng>(&self, density: f64, rng: &mut R) -> Result<DensityPoint, SimError> {
        validate_density(density)?;
        let experiments = self.config.experiments_per_density;
        let mut successes = 0;
        for _ in 0..experiments {
            if self.trial(density, rng)? {
                successes += 1;
            }
        }
        Ok(DensityPoint {
            density,
            successes,
            experiments,
            success_rate: successes as f64 / experiments as f64,
        })
    }

    /// Evaluates every density, in configured order.
    pub fn run(&self) -> Result<Vec<DensityPoint>, SimError> {
        let run_point = |(index, &density): (usize, &f64)| -> Result<DensityPoint, SimError> {
            let mut rng = random::stream(self.config.seed, index as u64);
            let point = self.estimate(density, &mut rng)?;
            info!(
                density,
                success_rate = point.success_rate,
                "swept density"
            );
            Ok(point)
        };

        if self.config.parallel {
            self.config.densities.par_iter().enumerate().map(run_point).collect()
        } else {
            self.config.densities.iter().enumerate().map(run_point).collect()
        }
    }
}
