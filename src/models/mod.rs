//! Simulation domain models.
//!
//! Provides the data types shared by the queue simulator and the
//! schedulability analyzer.
//!
//! # Domain Mappings
//!
//! | u-schedsim | Queueing | Assignment |
//! |------------|----------|------------|
//! | PendingTask | Customer | - |
//! | CompatibilityMatrix | - | Bipartite adjacency matrix |
//! | ProbabilityRange | Arrival-rate sweep | Density sweep |

mod matrix;
mod range;
mod task;

pub use matrix::CompatibilityMatrix;
pub use range::ProbabilityRange;
pub use task::PendingTask;
