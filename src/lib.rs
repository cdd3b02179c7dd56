//! Scheduling simulators for studying scheduling behavior under randomness.
//!
//! Provides two independent Monte Carlo tools: a single-server FIFO queue
//! simulator and a greedy schedulability analyzer for random 0/1
//! compatibility matrices.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `PendingTask`, `CompatibilityMatrix`, `ProbabilityRange`
//! - **`queue`**: Discrete time-step queue simulation and intensity sweeps
//! - **`reschedule`**: Greedy row/column permutation heuristic
//! - **`analysis`**: Success-rate estimation over a density sweep
//! - **`report`**: Tab-separated and JSON output
//! - **`validation`**: Configuration checks (fail fast on invalid runs)
//! - **`random`**: Seedable per-point random streams
//!
//! # Determinism
//!
//! Every simulation takes an injected generator. Sweeps derive one ChaCha
//! stream per point from a single seed, so a sweep reproduces exactly
//! whether it runs sequentially or in parallel.
//!
//! # References
//!
//! - Kleinrock (1975), "Queueing Systems, Volume 1: Theory"
//! - Erdős & Rényi (1964), "On random matrices"

pub mod analysis;
pub mod error;
pub mod models;
pub mod queue;
pub mod random;
pub mod report;
pub mod reschedule;
pub mod validation;

pub use error::SimError;
