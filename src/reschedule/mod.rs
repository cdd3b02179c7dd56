//! Greedy schedulability check for compatibility matrices.
//!
//! Decides whether a perfect one-to-one assignment can be read off a
//! 0/1 matrix by permuting rows and columns until the main diagonal
//! holds only 1s, placing the most-constrained row first at each step.
//!
//! # Algorithm
//!
//! `Rescheduler` performs one deterministic pass over the diagonals,
//! selecting rows with `RowSelectionKey` (exhausted-last, then fewest
//! remaining options). It is a heuristic: it may miss assignments that
//! an exact matching algorithm (Hopcroft-Karp) would find.
//!
//! # References
//!
//! - Hall (1935), "On Representatives of Subsets"
//! - Erdős & Rényi (1964), "On random matrices"

mod policy;
mod rescheduler;

pub use policy::{select_row, RowSelectionKey};
pub use rescheduler::{RescheduleOutcome, Rescheduler};
