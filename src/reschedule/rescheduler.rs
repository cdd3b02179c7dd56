//! Greedy diagonal rescheduler.
//!
//! # Algorithm
//!
//! For each diagonal `d` in `0..N`:
//! 1. Select the row in `d..N` with the smallest [`RowSelectionKey`].
//! 2. If its suffix has no 1, stop: no perfect schedule was found.
//! 3. Swap it into row `d`.
//! 4. Swap the first column `>= d` holding a 1 in that row into column `d`.
//!
//! A single pass with no backtracking. It can report failure for a
//! matrix that does admit a perfect assignment; success rates measured
//! with it describe this heuristic, not bipartite matching feasibility.
//!
//! # Complexity
//! O(N³): N diagonals, each scanning O(N²) suffix cells.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::policy::select_row;
use crate::models::CompatibilityMatrix;

/// What a rescheduling pass achieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescheduleOutcome {
    /// Every diagonal cell holds a 1.
    pub schedulable: bool,
    /// Diagonal cells filled before the pass ended.
    pub placed: usize,
    /// Row swaps that moved a row.
    pub row_swaps: usize,
    /// Column swaps that moved a column.
    pub column_swaps: usize,
    /// `row_order[i]`: original index of the row now at position `i`.
    pub row_order: Vec<usize>,
    /// `column_order[j]`: original index of the column now at position `j`.
    pub column_order: Vec<usize>,
}

impl RescheduleOutcome {
    /// Total swaps that changed the matrix.
    pub fn effective_swaps(&self) -> usize {
        self.row_swaps + self.column_swaps
    }

    /// The assignment found, as `(original_row, original_column)` pairs
    /// sorted by row. `None` if the pass failed.
    pub fn assignment(&self) -> Option<Vec<(usize, usize)>> {
        if !self.schedulable {
            return None;
        }
        let mut pairs: Vec<(usize, usize)> = self
            .row_order
            .iter()
            .copied()
            .zip(self.column_order.iter().copied())
            .collect();
        pairs.sort_unstable();
        Some(pairs)
    }
}

/// Greedy in-place row/column permutation heuristic.
///
/// # Example
///
/// ```
/// use u_schedsim::models::CompatibilityMatrix;
/// use u_schedsim::reschedule::Rescheduler;
///
/// let mut matrix = CompatibilityMatrix::from_rows(vec![
///     vec![0, 1, 0],
///     vec![1, 0, 0],
///     vec![0, 0, 1],
/// ])
/// .unwrap();
///
/// let outcome = Rescheduler::new().reschedule(&mut matrix);
/// assert!(outcome.schedulable);
/// assert!(matrix.has_full_diagonal());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rescheduler;

impl Rescheduler {
    /// Creates a rescheduler.
    pub fn new() -> Self {
        Self
    }

    /// Permutes `matrix` in place, trying to put a 1 on every diagonal cell.
    pub fn reschedule(&self, matrix: &mut CompatibilityMatrix) -> RescheduleOutcome {
        let size = matrix.size();
        let mut row_order: Vec<usize> = (0..size).collect();
        let mut column_order: Vec<usize> = (0..size).collect();
        let mut row_swaps = 0;
        let mut column_swaps = 0;
        let mut placed = 0;

        for d in 0..size {
            let Some((row, key)) = select_row(matrix, d) else {
                break;
            };
            if key.exhausted {
                trace!(diagonal = d, "no row has a 1 left in the sub-matrix");
                break;
            }

            if matrix.swap_rows(d, row) {
                row_order.swap(d, row);
                row_swaps += 1;
            }

            let Some(column) = matrix.first_one_in_row_suffix(d, d) else {
                break;
            };
            if matrix.swap_columns(d, column) {
                column_order.swap(d, column);
                column_swaps += 1;
            }

            trace!(
                diagonal = d,
                row = row,
                column = column,
                options = key.remaining_ones,
                "placed diagonal cell"
            );
            placed += 1;
        }

        let schedulable = placed == size && size > 0 && matrix.is_one(size - 1, size - 1);
        debug!(size, placed, schedulable, "reschedule finished");

        RescheduleOutcome {
            schedulable,
            placed,
            row_swaps,
            column_swaps,
            row_order,
            column_order,
        }
    }

    /// Whether the heuristic finds a perfect schedule for `matrix`.
    pub fn perfectly_schedulable(&self, matrix: &mut CompatibilityMatrix) -> bool {
        self.reschedule(matrix).schedulable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random;

    fn matrix(rows: Vec<Vec<u8>>) -> CompatibilityMatrix {
        CompatibilityMatrix::from_rows(rows).unwrap()
    }

    fn sorted(mut values: Vec<usize>) -> Vec<usize> {
        values.sort_unstable();
        values
    }

    #[test]
    fn test_anti_diagonal_pair_is_schedulable() {
        let mut m = matrix(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 1]]);
        let outcome = Rescheduler::new().reschedule(&mut m);

        assert!(outcome.schedulable);
        assert_eq!(outcome.placed, 3);
        assert_eq!(outcome.row_swaps, 0);
        assert_eq!(outcome.column_swaps, 1);
        assert_eq!(m, CompatibilityMatrix::identity(3));
        assert_eq!(outcome.assignment(), Some(vec![(0, 1), (1, 0), (2, 2)]));
    }

    #[test]
    fn test_all_zero_fails_at_first_diagonal() {
        let mut m = CompatibilityMatrix::zeros(2);
        let outcome = Rescheduler::new().reschedule(&mut m);

        assert!(!outcome.schedulable);
        assert_eq!(outcome.placed, 0);
        assert_eq!(outcome.effective_swaps(), 0);
        assert!(outcome.assignment().is_none());
    }

    #[test]
    fn test_single_cell() {
        let rescheduler = Rescheduler::new();
        assert!(rescheduler.perfectly_schedulable(&mut matrix(vec![vec![1]])));
        assert!(!rescheduler.perfectly_schedulable(&mut matrix(vec![vec![0]])));
    }

    #[test]
    fn test_identity_needs_no_swaps() {
        let mut m = CompatibilityMatrix::identity(5);
        let outcome = Rescheduler::new().reschedule(&mut m);
        assert!(outcome.schedulable);
        assert_eq!(outcome.effective_swaps(), 0);
        assert_eq!(m, CompatibilityMatrix::identity(5));
    }

    #[test]
    fn test_rerun_on_result_needs_no_swaps() {
        let rescheduler = Rescheduler::new();
        let mut rng = random::seeded(42);
        for _ in 0..200 {
            let mut m = CompatibilityMatrix::generate(6, 0.6, &mut rng).unwrap();
            if rescheduler.perfectly_schedulable(&mut m) {
                let before = m.clone();
                let rerun = rescheduler.reschedule(&mut m);
                assert!(rerun.schedulable);
                assert_eq!(rerun.effective_swaps(), 0);
                assert_eq!(m, before);
                assert!(m.has_full_diagonal());
            }
        }
    }

    #[test]
    fn test_most_constrained_row_goes_first() {
        // Row 2 has a single option, so it claims diagonal 0 before row 0 can.
        let mut m = matrix(vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 0, 0]]);
        let outcome = Rescheduler::new().reschedule(&mut m);

        assert!(outcome.schedulable);
        assert_eq!(outcome.row_order[0], 2);
        assert_eq!(outcome.assignment(), Some(vec![(0, 1), (1, 2), (2, 0)]));
    }

    #[test]
    fn test_greedy_false_negative_is_preserved() {
        // Perfect assignment exists (0→1, 1→0, 2→2) but the greedy pass gives
        // row 0 column 0 and strands row 2.
        let mut m = matrix(vec![vec![1, 1, 0], vec![1, 0, 1], vec![1, 0, 1]]);
        let outcome = Rescheduler::new().reschedule(&mut m);

        assert!(!outcome.schedulable);
        assert_eq!(outcome.placed, 2);
        assert!(!m.is_one(2, 2));
    }

    #[test]
    fn test_swaps_preserve_row_and_column_contents() {
        let rescheduler = Rescheduler::new();
        let mut rng = random::seeded(7);
        for density in [0.1, 0.3, 0.5, 0.9] {
            for _ in 0..50 {
                let original = CompatibilityMatrix::generate(8, density, &mut rng).unwrap();
                let mut m = original.clone();
                rescheduler.reschedule(&mut m);

                assert_eq!(m.count_ones(), original.count_ones());
                assert_eq!(sorted(m.row_sums()), sorted(original.row_sums()));
                assert_eq!(sorted(m.column_sums()), sorted(original.column_sums()));
            }
        }
    }

    #[test]
    fn test_orders_track_the_permutation() {
        let rescheduler = Rescheduler::new();
        let mut rng = random::seeded(3);
        for _ in 0..100 {
            let original = CompatibilityMatrix::generate(7, 0.5, &mut rng).unwrap();
            let mut m = original.clone();
            let outcome = rescheduler.reschedule(&mut m);

            for i in 0..7 {
                for j in 0..7 {
                    assert_eq!(
                        m.get(i, j),
                        original.get(outcome.row_order[i], outcome.column_order[j])
                    );
                }
            }
            if let Some(pairs) = outcome.assignment() {
                assert!(pairs.iter().all(|&(r, c)| original.is_one(r, c)));
            }
        }
    }

    #[test]
    fn test_placed_prefix_has_ones_on_diagonal() {
        let rescheduler = Rescheduler::new();
        let mut rng = random::seeded(11);
        for _ in 0..100 {
            let mut m = CompatibilityMatrix::generate(9, 0.2, &mut rng).unwrap();
            let outcome = rescheduler.reschedule(&mut m);
            assert!((0..outcome.placed).all(|d| m.is_one(d, d)));
            if !outcome.schedulable {
                assert!(!m.is_one(8, 8));
            }
        }
    }
}
