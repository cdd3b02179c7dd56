//! Configuration validation for both simulators.
//!
//! Checks run parameters before any simulation starts, so that an
//! invalid run fails fast instead of hanging or panicking mid-sweep.
//! Detects:
//! - Empty or inverted service-length ranges
//! - Probabilities outside `[0, 1]` (including NaN)
//! - Zero arrival probability (the queue would never fill)
//! - Zero task counts, matrix sizes, or experiment counts
//! - Empty sweeps
//!
//! All detected issues are reported together.

use crate::analysis::AnalyzerConfig;
use crate::queue::{QueueRunConfig, SweepConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A service length bound is zero.
    NonPositiveServiceLength,
    /// `min_service_length > max_service_length`.
    InvertedServiceRange,
    /// A probability or density is outside `[0, 1]` or not a number.
    ProbabilityOutOfRange,
    /// Arrival probability is zero, so no task would ever arrive.
    NoArrivals,
    /// `total_task_count` is zero.
    NonPositiveTaskCount,
    /// `matrix_size` is zero.
    NonPositiveMatrixSize,
    /// `experiments_per_density` is zero.
    NonPositiveExperiments,
    /// A sweep has no points to evaluate.
    EmptySweep,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_probability(name: &str, value: f64, errors: &mut Vec<ValidationError>) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ProbabilityOutOfRange,
            format!("{name} must be within [0, 1], got {value}"),
        ));
    }
}

fn check_arrival_probability(value: f64, errors: &mut Vec<ValidationError>) {
    check_probability("arrival_probability", value, errors);
    if value == 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoArrivals,
            "arrival_probability is 0: no task would ever arrive and the run could not finish",
        ));
    }
}

fn check_service_and_tasks(config: &QueueRunConfig, errors: &mut Vec<ValidationError>) {
    if config.min_service_length == 0 || config.max_service_length == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveServiceLength,
            format!(
                "service lengths must be positive, got [{}, {}]",
                config.min_service_length, config.max_service_length
            ),
        ));
    }
    if config.min_service_length > config.max_service_length {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedServiceRange,
            format!(
                "min_service_length ({}) exceeds max_service_length ({})",
                config.min_service_length, config.max_service_length
            ),
        ));
    }
    if config.total_task_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveTaskCount,
            "total_task_count must be positive",
        ));
    }
}

/// Validates a single queue run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_queue_config(config: &QueueRunConfig) -> ValidationResult {
    let mut errors = Vec::new();
    check_service_and_tasks(config, &mut errors);
    check_arrival_probability(config.arrival_probability, &mut errors);
    into_result(errors)
}

/// Validates an intensity sweep.
///
/// The base run's own `arrival_probability` is ignored; every swept
/// intensity is checked in its place.
pub fn validate_sweep_config(config: &SweepConfig) -> ValidationResult {
    let mut errors = Vec::new();
    check_service_and_tasks(&config.base, &mut errors);
    if config.intensities.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySweep,
            "intensity sweep has no values",
        ));
    }
    for &intensity in &config.intensities {
        check_arrival_probability(intensity, &mut errors);
    }
    into_result(errors)
}

/// Validates a single matrix density.
pub fn validate_density(density: f64) -> ValidationResult {
    let mut errors = Vec::new();
    check_probability("density", density, &mut errors);
    into_result(errors)
}

/// Validates a schedulability analysis.
pub fn validate_analyzer_config(config: &AnalyzerConfig) -> ValidationResult {
    let mut errors = Vec::new();
    if config.matrix_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveMatrixSize,
            "matrix_size must be positive",
        ));
    }
    if config.experiments_per_density == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveExperiments,
            "experiments_per_density must be positive",
        ));
    }
    if config.densities.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySweep,
            "density sweep has no values",
        ));
    }
    for &density in &config.densities {
        check_probability("density", density, &mut errors);
    }
    into_result(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_default_configs_are_valid() {
        assert!(validate_queue_config(&QueueRunConfig::default()).is_ok());
        assert!(validate_sweep_config(&SweepConfig::default()).is_ok());
        assert!(validate_analyzer_config(&AnalyzerConfig::default()).is_ok());
    }

    #[test]
    fn test_inverted_service_range() {
        let config = QueueRunConfig::default().with_service_range(5, 2);
        assert_eq!(
            kinds(validate_queue_config(&config)),
            vec![ValidationErrorKind::InvertedServiceRange]
        );
    }

    #[test]
    fn test_zero_service_length() {
        let config = QueueRunConfig::default().with_service_range(0, 3);
        assert!(kinds(validate_queue_config(&config))
            .contains(&ValidationErrorKind::NonPositiveServiceLength));
    }

    #[test]
    fn test_probability_out_of_range() {
        for p in [-0.1, 1.5, f64::NAN] {
            let config = QueueRunConfig::default().with_arrival_probability(p);
            assert!(kinds(validate_queue_config(&config))
                .contains(&ValidationErrorKind::ProbabilityOutOfRange));
        }
    }

    #[test]
    fn test_zero_arrival_probability_fails_fast() {
        let config = QueueRunConfig::default().with_arrival_probability(0.0);
        assert_eq!(
            kinds(validate_queue_config(&config)),
            vec![ValidationErrorKind::NoArrivals]
        );
    }

    #[test]
    fn test_zero_task_count() {
        let config = QueueRunConfig::default().with_total_task_count(0);
        assert!(kinds(validate_queue_config(&config))
            .contains(&ValidationErrorKind::NonPositiveTaskCount));
    }

    #[test]
    fn test_sweep_checks_every_intensity() {
        let config = SweepConfig::default().with_intensities(vec![0.2, 0.0, 2.0]);
        let found = kinds(validate_sweep_config(&config));
        assert!(found.contains(&ValidationErrorKind::NoArrivals));
        assert!(found.contains(&ValidationErrorKind::ProbabilityOutOfRange));
    }

    #[test]
    fn test_empty_sweeps() {
        let sweep = SweepConfig::default().with_intensities(Vec::new());
        assert!(kinds(validate_sweep_config(&sweep)).contains(&ValidationErrorKind::EmptySweep));

        let analysis = AnalyzerConfig::default().with_densities(Vec::new());
        assert!(
            kinds(validate_analyzer_config(&analysis)).contains(&ValidationErrorKind::EmptySweep)
        );
    }

    #[test]
    fn test_analyzer_multiple_errors() {
        let config = AnalyzerConfig::default()
            .with_matrix_size(0)
            .with_experiments_per_density(0)
            .with_densities(vec![0.5, 1.2]);

        let found = kinds(validate_analyzer_config(&config));
        assert_eq!(found.len(), 3);
        assert!(found.contains(&ValidationErrorKind::NonPositiveMatrixSize));
        assert!(found.contains(&ValidationErrorKind::NonPositiveExperiments));
        assert!(found.contains(&ValidationErrorKind::ProbabilityOutOfRange));
    }

    #[test]
    fn test_single_density() {
        assert!(validate_density(0.3).is_ok());
        assert_eq!(
            kinds(validate_density(1.5)),
            vec![ValidationErrorKind::ProbabilityOutOfRange]
        );
    }

    #[test]
    fn test_density_bounds_are_inclusive() {
        let config = AnalyzerConfig::default().with_densities(vec![0.0, 1.0]);
        assert!(validate_analyzer_config(&config).is_ok());
    }
}
