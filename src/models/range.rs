//! Probability sweep ranges.

use serde::{Deserialize, Serialize};

const SNAP: f64 = 1e12;

/// Half-open range of probabilities `[start, end)` walked in `step` increments.
///
/// Values are computed as `start + k * step` rather than by repeated
/// addition, so long sweeps do not drift, then snapped to 12 decimal
/// places so `0.003 * 3` prints as `0.009`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityRange {
    /// First value (inclusive).
    pub start: f64,
    /// Upper bound (exclusive).
    pub end: f64,
    /// Increment between consecutive values.
    pub step: f64,
}

impl ProbabilityRange {
    /// Creates a range.
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Number of values in the range. Zero for a non-positive step or an empty span.
    pub fn len(&self) -> usize {
        if !(self.step > 0.0) || !(self.end > self.start) {
            return 0;
        }
        let span = (self.end - self.start) / self.step;
        if !span.is_finite() {
            return 0;
        }
        (span - 1e-9).ceil().max(0.0) as usize
    }

    /// Whether the range yields no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes the values.
    pub fn values(&self) -> Vec<f64> {
        (0..self.len())
            .map(|k| ((self.start + k as f64 * self.step) * SNAP).round() / SNAP)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_density_sweep_shape() {
        let values = ProbabilityRange::new(0.0, 1.0, 0.003).values();
        assert_eq!(values.len(), 334);
        assert!((values[0] - 0.0).abs() < 1e-10);
        assert!((values[1] - 0.003).abs() < 1e-10);
        assert!((values[333] - 0.999).abs() < 1e-10);
    }

    #[test]
    fn test_values_carry_no_float_noise() {
        let values = ProbabilityRange::new(0.0, 1.0, 0.003).values();
        assert_eq!(values[3], 0.009);
        assert_eq!(values[6], 0.018);
        assert_eq!(values[333], 0.999);

        let values = ProbabilityRange::new(0.001, 0.1, 0.002).values();
        assert_eq!(values[4], 0.009);
        assert_eq!(values[49], 0.099);
    }

    #[test]
    fn test_end_is_exclusive() {
        let values = ProbabilityRange::new(0.0, 1.0, 0.25).values();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_intensity_sweep_shape() {
        // 0.001, 0.003, ..., 0.099
        let values = ProbabilityRange::new(0.001, 0.1, 0.002).values();
        assert_eq!(values.len(), 50);
        assert!((values[49] - 0.099).abs() < 1e-10);
    }

    #[test]
    fn test_degenerate_ranges() {
        assert!(ProbabilityRange::new(0.0, 1.0, 0.0).is_empty());
        assert!(ProbabilityRange::new(0.0, 1.0, -0.1).is_empty());
        assert!(ProbabilityRange::new(0.5, 0.5, 0.1).is_empty());
        assert!(ProbabilityRange::new(0.0, 1.0, f64::NAN).is_empty());
    }
}
