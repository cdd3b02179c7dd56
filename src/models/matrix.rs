//! Binary compatibility matrix.
//!
//! Cell `(r, c)` is 1 when row-entity `r` may be assigned to
//! column-entity `c`. A perfect assignment picks exactly one 1-valued
//! cell in every row and every column.
//!
//! The matrix is mutated only through whole-row and whole-column swaps,
//! so the multiset of row contents and column contents never changes.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::error::SimError;
use crate::validation::validate_density;

/// Square 0/1 compatibility matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityMatrix {
    size: usize,
    cells: Vec<Vec<u8>>,
}

impl CompatibilityMatrix {
    /// Creates an all-zero `size × size` matrix.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![0; size]; size],
        }
    }

    /// Creates the `size × size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size);
        for d in 0..size {
            matrix.cells[d][d] = 1;
        }
        matrix
    }

    /// Builds a matrix from explicit rows.
    ///
    /// Returns `None` if the rows do not form a square or a cell is not 0/1.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Option<Self> {
        let size = rows.len();
        let square = rows.iter().all(|row| row.len() == size);
        let binary = rows.iter().flatten().all(|&v| v <= 1);
        if !square || !binary {
            return None;
        }
        Some(Self { size, cells: rows })
    }

    /// Samples a random matrix where each cell is 1 with probability `density`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `density` is outside `[0, 1]`.
    pub fn generate<R: Rng>(size: usize, density: f64, rng: &mut R) -> Result<Self, SimError> {
        validate_density(density)?;
        let cells: Vec<Vec<u8>> = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| u8::from(rng.random_bool(density)))
                    .collect::<Vec<u8>>()
            })
            .collect();
        Ok(Self { size, cells })
    }

    /// Matrix dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Whether cell `(row, col)` holds a 1.
    pub fn is_one(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == 1
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row]
    }

    /// Swaps two whole rows. Returns whether anything moved.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        self.cells.swap(a, b);
        true
    }

    /// Swaps two whole columns. Returns whether anything moved.
    pub fn swap_columns(&mut self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        for row in &mut self.cells {
            row.swap(a, b);
        }
        true
    }

    /// Number of 1s in `row`, restricted to columns `from..`.
    pub fn ones_in_row_suffix(&self, row: usize, from: usize) -> usize {
        self.cells[row][from..].iter().filter(|&&v| v == 1).count()
    }

    /// First column `>= from` holding a 1 in `row`.
    pub fn first_one_in_row_suffix(&self, row: usize, from: usize) -> Option<usize> {
        self.cells[row][from..]
            .iter()
            .position(|&v| v == 1)
            .map(|offset| from + offset)
    }

    /// Number of 1s per row.
    pub fn row_sums(&self) -> Vec<usize> {
        (0..self.size)
            .map(|r| self.ones_in_row_suffix(r, 0))
            .collect()
    }

    /// Number of 1s per column.
    pub fn column_sums(&self) -> Vec<usize> {
        (0..self.size)
            .map(|c| self.cells.iter().filter(|row| row[c] == 1).count())
            .collect()
    }

    /// Total number of 1s.
    pub fn count_ones(&self) -> usize {
        self.row_sums().iter().sum()
    }

    /// Whether every diagonal cell holds a 1.
    pub fn has_full_diagonal(&self) -> bool {
        (0..self.size).all(|d| self.is_one(d, d))
    }
}

impl fmt::Display for CompatibilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
