//! Arrival-intensity sweep driver.
//!
//! Runs the queue simulator once per configured intensity. Each point
//! draws from its own random stream, so points can run on rayon's pool
//! and still reproduce the sequential results exactly.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{QueueRunConfig, QueueRunResult, QueueSimulator};
use crate::error::SimError;
use crate::models::ProbabilityRange;
use crate::random;
use crate::validation::validate_sweep_config;

/// Configuration of an intensity sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Template run; its `arrival_probability` is replaced per point.
    pub base: QueueRunConfig,
    /// Arrival probabilities to evaluate.
    pub intensities: Vec<f64>,
    /// Seed for the per-point random streams.
    pub seed: u64,
    /// Evaluate points in parallel.
    pub parallel: bool,
}

impl SweepConfig {
    /// Sets the template run.
    pub fn with_base(mut self, base: QueueRunConfig) -> Self {
        self.base = base;
        self
    }

    /// Sets explicit intensities.
    pub fn with_intensities(mut self, intensities: Vec<f64>) -> Self {
        self.intensities = intensities;
        self
    }

    /// Sets intensities from a range.
    pub fn with_intensity_range(mut self, range: ProbabilityRange) -> Self {
        self.intensities = range.values();
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

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            base: QueueRunConfig::default(),
            intensities: vec![0.1],
            seed: random::DEFAULT_SEED,
            parallel: true,
        }
    }
}

/// Result of one sweep point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Arrival probability of this run.
    pub arrival_probability: f64,
    /// Metrics of the run.
    pub result: QueueRunResult,
}

/// Runs a queue simulation per intensity.
///
/// # Example
///
/// ```
/// use u_schedsim::queue::{IntensitySweep, SweepConfig};
///
/// let config = SweepConfig::default().with_intensities(vec![0.05, 0.1]);
/// let points = IntensitySweep::new(config).unwrap().run();
/// assert_eq!(points.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct IntensitySweep {
    config: SweepConfig,
}

impl IntensitySweep {
    /// Creates a sweep after validating the config.
    pub fn new(config: SweepConfig) -> Result<Self, SimError> {
        validate_sweep_config(&config)?;
        Ok(Self { config })
    }

    /// Evaluates every intensity, in configured order.
    pub fn run(&self) -> Vec<SweepPoint> {
        let run_point = |(index, &intensity): (usize, &f64)| -> SweepPoint {
            let config = self.config.base.clone().with_arrival_probability(intensity);
            let simulator = QueueSimulator::from_validated(config);
            let mut rng = random::stream(self.config.seed, index as u64);
            let result = simulator.run(&mut rng);
            info!(
                intensity,
                average_waiting = result.average_waiting_steps,
                idle_fraction = result.idle_fraction,
                "swept intensity"
            );
            SweepPoint {
                arrival_probability: intensity,
                result,
            }
        };

        if self.config.parallel {
            self.config.intensities.par_iter().enumerate().map(run_point).collect()
        } else {
            self.config.intensities.iter().enumerate().map(run_point).collect()
        }
    }
}
