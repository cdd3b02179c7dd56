//! Queue run configuration.

use serde::{Deserialize, Serialize};

/// Parameters of one queue simulation run.
///
/// Defaults reproduce the reference experiment: service lengths uniform
/// in `[1, 15]`, 1000 tasks, arrival probability 0.1 per step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueRunConfig {
    /// Per-step probability that a task arrives.
    pub arrival_probability: f64,
    /// Shortest service length (steps, inclusive).
    pub min_service_length: u32,
    /// Longest service length (steps, inclusive).
    pub max_service_length: u32,
    /// Number of tasks that must be fully served before the run ends.
    pub total_task_count: u64,
    /// Record the queue length at every step.
    pub record_trace: bool,
}

impl QueueRunConfig {
    /// Sets the arrival probability.
    pub fn with_arrival_probability(mut self, probability: f64) -> Self {
        self.arrival_probability = probability;
        self
    }

    /// Sets the inclusive service-length range.
    pub fn with_service_range(mut self, min: u32, max: u32) -> Self {
        self.min_service_length = min;
        self.max_service_length = max;
        self
    }

    /// Sets the number of tasks to serve.
    pub fn with_total_task_count(mut self, count: u64) -> Self {
        self.total_task_count = count;
        self
    }

    /// Enables or disables the queue-depth trace.
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }
}

impl Default for QueueRunConfig {
    fn default() -> Self {
        Self {
            arrival_probability: 0.1,
            min_service_length: 1,
            max_service_length: 15,
            total_task_count: 1000,
            record_trace: false,
        }
    }
}
