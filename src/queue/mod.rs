//! Single-server FIFO queue simulation.
//!
//! Discrete time-step model with Bernoulli arrivals and fixed-length
//! service drawn uniformly per task. Produces average waiting time,
//! server idle fraction, per-task waits and an optional queue-depth trace.
//!
//! # Components
//!
//! - `QueueSimulator` / `QueueState`: one run, step by step
//! - `IntensitySweep`: one run per arrival probability
//! - `WaitStats`: distribution of per-task waits
//!
//! # References
//!
//! - Kleinrock (1975), "Queueing Systems, Volume 1: Theory"
//! - Law (2015), "Simulation Modeling and Analysis", Ch. 1.4

mod config;
mod kpi;
mod simulator;
mod sweep;

pub use config::QueueRunConfig;
pub use kpi::WaitStats;
pub use simulator::{QueueRunResult, QueueSimulator, QueueState};
pub use sweep::{IntensitySweep, SweepConfig, SweepPoint};
