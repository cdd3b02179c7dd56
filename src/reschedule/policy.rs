//! Row selection policy for the greedy rescheduler.
//!
//! At diagonal `d`, each candidate row `r >= d` is scored on its suffix
//! (columns `d..`). Rows are compared lexicographically:
//!
//! 1. **Exhausted**: a suffix with no 1 sorts last.
//! 2. **Remaining ones**: fewer 1s sorts first (most-constrained row).
//!
//! Ties go to the lowest row index.

use crate::models::CompatibilityMatrix;

/// Two-level selection key. Lower = selected first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RowSelectionKey {
    /// The suffix contains no 1.
    pub exhausted: bool,
    /// Number of 1s in the suffix.
    pub remaining_ones: usize,
}

impl RowSelectionKey {
    /// Scores `row` at diagonal `diagonal`.
    pub fn of(matrix: &CompatibilityMatrix, row: usize, diagonal: usize) -> Self {
        let remaining_ones = matrix.ones_in_row_suffix(row, diagonal);
        Self {
            exhausted: remaining_ones == 0,
            remaining_ones,
        }
    }
}

/// Picks the row in `diagonal..size` with the smallest key.
///
/// Returns `None` only when `diagonal >= size`.
pub fn select_row(
    matrix: &CompatibilityMatrix,
    diagonal: usize,
) -> Option<(usize, RowSelectionKey)> {
    (diagonal..matrix.size())
        .map(|row| (row, RowSelectionKey::of(matrix, row, diagonal)))
        .min_by_key(|&(_, key)| key)
}
