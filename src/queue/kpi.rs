//! Per-task waiting statistics.
//!
//! Summarises the `waited_so_far` counters of served tasks.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Count | Number of served tasks |
//! | Mean | Average steps spent behind the head |
//! | Max | Longest single wait |
//! | P50 / P95 | Nearest-rank percentiles |

use serde::{Deserialize, Serialize};

/// Distribution summary of per-task waits, in steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitStats {
    /// Number of samples.
    pub count: usize,
    /// Mean wait.
    pub mean: f64,
    /// Longest wait.
    pub max: u64,
    /// Median wait (nearest rank).
    pub p50: u64,
    /// 95th percentile wait (nearest rank).
    pub p95: u64,
}

impl WaitStats {
    /// Computes statistics from raw per-task waits.
    pub fn calculate(waits: &[u64]) -> Self {
        if waits.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                max: 0,
                p50: 0,
                p95: 0,
            };
        }

        let mut sorted = waits.to_vec();
        sorted.sort_unstable();
        let total: u64 = sorted.iter().sum();

        Self {
            count: sorted.len(),
            mean: total as f64 / sorted.len() as f64,
            max: sorted[sorted.len() - 1],
            p50: nearest_rank(&sorted, 0.50),
            p95: nearest_rank(&sorted, 0.95),
        }
    }
}

fn nearest_rank(sorted: &[u64], quantile: f64) -> u64 {
    let rank = (quantile * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let stats = WaitStats::calculate(&[]);
        assert_eq!(stats.count, 0);
        assert!((stats.mean - 0.0).abs() < 1e-10);
        assert_eq!(stats.max, 0);
    }

    #[test]
    fn test_basic_distribution() {
        let waits: Vec<u64> = (1..=20).collect();
        let stats = WaitStats::calculate(&waits);
        assert_eq!(stats.count, 20);
        assert!((stats.mean - 10.5).abs() < 1e-10);
        assert_eq!(stats.max, 20);
        assert_eq!(stats.p50, 10);
        assert_eq!(stats.p95, 19);
    }

    #[test]
    fn test_unsorted_input() {
        let stats = WaitStats::calculate(&[5, 0, 3]);
        assert_eq!(stats.max, 5);
        assert_eq!(stats.p50, 3);
        assert!((stats.mean - 8.0 / 3.0).abs() < 1e-10);
    }
}
