//! Results reporting.
//!
//! Text output is tab-separated with one line per sweep point, ready for
//! plotting tools. JSON output serializes the full result structs.

use serde::Serialize;

use crate::analysis::DensityPoint;
use crate::error::SimError;
use crate::queue::SweepPoint;

/// `intensity\taverage_waiting\tidle_fraction` per sweep point.
pub fn queue_lines(points: &[SweepPoint]) -> String {
    points
        .iter()
        .map(|point| {
            format!(
                "{}\t{}\t{}\n",
                point.arrival_probability,
                point.result.average_waiting_steps,
                point.result.idle_fraction
            )
        })
        .collect()
}

/// `step\tdepth` for every recorded step of a run.
pub fn depth_trace_lines(point: &SweepPoint) -> String {
    point
        .result
        .depth_trace
        .iter()
        .enumerate()
        .map(|(step, depth)| format!("{step}\t{depth}\n"))
        .collect()
}

/// `density\tsuccess_rate` per density.
pub fn density_lines(points: &[DensityPoint]) -> String {
    points
        .iter()
        .map(|point| format!("{}\t{}\n", point.density, point.success_rate))
        .collect()
}

/// Pretty-printed JSON of any result.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, SimError> {
    Ok(serde_json::to_string_pretty(value)?)
}
