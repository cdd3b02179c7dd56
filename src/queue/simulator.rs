//! Discrete time-step FIFO queue simulator.
//!
//! # Algorithm
//!
//! Each step, in order:
//! 1. Charge the current queue length to the waiting total.
//! 2. Increment `waited_so_far` of every task behind the head.
//! 3. While tasks remain to be served, a task arrives with probability
//!    `arrival_probability`, its service length uniform in
//!    `[min_service_length, max_service_length]`.
//! 4. If the head has received its full service, it departs.
//! 5. If the queue is non-empty, the server is busy this step.
//! 6. Advance the clock.
//!
//! The run ends once `total_task_count` tasks have departed. Arrivals are
//! gated on tasks still awaiting *service*, not on tasks generated, so a
//! run may generate more tasks than it serves; those are left in the
//! queue when the run stops.
//!
//! # Reference
//! Kleinrock (1975), "Queueing Systems, Volume 1: Theory", Ch. 4

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{QueueRunConfig, WaitStats};
use crate::error::SimError;
use crate::models::PendingTask;
use crate::validation::validate_queue_config;

/// Mutable state of one queue run.
#[derive(Debug, Clone)]
pub struct QueueState {
    config: QueueRunConfig,
    queue: VecDeque<PendingTask>,
    elapsed_service_on_head: u32,
    current_time: u64,
    tasks_remaining: u64,
    tasks_generated: u64,
    total_waiting_steps: u64,
    total_busy_steps: u64,
    completed_waits: Vec<u64>,
}

impl QueueState {
    /// Creates an empty queue for `config` after validating it.
    pub fn new(config: QueueRunConfig) -> Result<Self, SimError> {
        validate_queue_config(&config)?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: QueueRunConfig) -> Self {
        Self {
            tasks_remaining: config.total_task_count,
            config,
            queue: VecDeque::new(),
            elapsed_service_on_head: 0,
            current_time: 0,
            tasks_generated: 0,
            total_waiting_steps: 0,
            total_busy_steps: 0,
            completed_waits: Vec::new(),
        }
    }

    /// Whether every required task has been served.
    pub fn is_finished(&self) -> bool {
        self.tasks_remaining == 0
    }

    /// Tasks currently queued, head first.
    pub fn queue(&self) -> &VecDeque<PendingTask> {
        &self.queue
    }

    /// Steps of service the head task has received.
    pub fn elapsed_service_on_head(&self) -> u32 {
        self.elapsed_service_on_head
    }

    /// Steps simulated so far.
    pub fn current_time(&self) -> u64 {
        self.current_time
    }

    /// Tasks still to be served.
    pub fn tasks_remaining(&self) -> u64 {
        self.tasks_remaining
    }

    /// Steps during which the server was busy.
    pub fn total_busy_steps(&self) -> u64 {
        self.total_busy_steps
    }

    /// Sum of queue lengths over all steps.
    pub fn total_waiting_steps(&self) -> u64 {
        self.total_waiting_steps
    }

    /// Advances the simulation by one time step.
    ///
    /// Returns the queue length sampled at the start of the step.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> usize {
        let config = &self.config;
        let depth = self.queue.len();
        self.total_waiting_steps += depth as u64;

        for task in self.queue.iter_mut().skip(1) {
            task.wait_one_step();
        }

        if self.tasks_remaining > 0 && rng.random_bool(config.arrival_probability) {
            let service_length =
                rng.random_range(config.min_service_length..=config.max_service_length);
            self.queue.push_back(PendingTask::new(service_length));
            self.tasks_generated += 1;
        }

        let head_done = self
            .queue
            .front()
            .is_some_and(|head| head.is_complete_after(self.elapsed_service_on_head));
        if head_done {
            if let Some(done) = self.queue.pop_front() {
                self.completed_waits.push(done.waited_so_far);
            }
            self.elapsed_service_on_head = 0;
            self.tasks_remaining = self.tasks_remaining.saturating_sub(1);
        }

        if !self.queue.is_empty() {
            self.elapsed_service_on_head += 1;
            self.total_busy_steps += 1;
        }

        self.current_time += 1;
        depth
    }
}

/// Aggregate metrics of one finished queue run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueRunResult {
    /// `total_waiting_steps / total_task_count`.
    pub average_waiting_steps: f64,
    /// `1 - busy_steps / total_time`.
    pub idle_fraction: f64,
    /// Steps until the last required task departed.
    pub total_time: u64,
    /// Steps during which the server was busy.
    pub busy_steps: u64,
    /// Sum of queue lengths over all steps.
    pub total_waiting_steps: u64,
    /// Tasks served (equals `total_task_count`).
    pub tasks_served: u64,
    /// Tasks that arrived, served or not.
    pub tasks_generated: u64,
    /// `waited_so_far` of each served task, in departure order.
    pub completed_waits: Vec<u64>,
    /// Queue length at the start of each step (empty unless tracing).
    pub depth_trace: Vec<usize>,
}

impl QueueRunResult {
    /// Distribution summary of per-task waits.
    pub fn wait_stats(&self) -> WaitStats {
        WaitStats::calculate(&self.completed_waits)
    }
}

/// Single-server FIFO queue simulator.
///
/// # Example
///
/// ```
/// use u_schedsim::queue::{QueueRunConfig, QueueSimulator};
/// use u_schedsim::random;
///
/// let config = QueueRunConfig::default()
///     .with_arrival_probability(1.0)
///     .with_service_range(1, 1)
///     .with_total_task_count(5);
/// let simulator = QueueSimulator::new(config).unwrap();
///
/// let result = simulator.run(&mut random::seeded(42));
/// assert_eq!(result.tasks_served, 5);
/// assert_eq!(result.idle_fraction, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct QueueSimulator {
    config: QueueRunConfig,
}

impl QueueSimulator {
    /// Creates a simulator after validating the config.
    pub fn new(config: QueueRunConfig) -> Result<Self, SimError> {
        validate_queue_config(&config)?;
        Ok(Self { config })
    }

    /// Wraps a config already checked by a sweep-level validator.
    pub(super) fn from_validated(config: QueueRunConfig) -> Self {
        Self { config }
    }

    /// The validated configuration.
    pub fn config(&self) -> &QueueRunConfig {
        &self.config
    }

    /// Runs the simulation to completion.
    ///
    /// Terminates because every valid config has a positive arrival
    /// probability and a busy server always makes service progress.
    pub fn run<R: Rng>(&self, rng: &mut R) -> QueueRunResult {
        let total = self.config.total_task_count;
        let mut state = QueueState::from_validated(self.config.clone());
        let mut depth_trace = Vec::new();

        while !state.is_finished() {
            let depth = state.step(rng);
            if self.config.record_trace {
                depth_trace.push(depth);
            }
        }

        let idle_fraction = if state.current_time == 0 {
            0.0
        } else {
            1.0 - state.total_busy_steps as f64 / state.current_time as f64
        };
        let result = QueueRunResult {
            average_waiting_steps: state.total_waiting_steps as f64 / total as f64,
            idle_fraction,
            total_time: state.current_time,
            busy_steps: state.total_busy_steps,
            total_waiting_steps: state.total_waiting_steps,
            tasks_served: total,
            tasks_generated: state.tasks_generated,
            completed_waits: state.completed_waits,
            depth_trace,
        };

        debug!(
            arrival_probability = self.config.arrival_probability,
            total_time = result.total_time,
            average_waiting = result.average_waiting_steps,
            idle_fraction = result.idle_fraction,
            "queue run finished"
        );
        result
    }
}
