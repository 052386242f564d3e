//! Simulation error types.
//!
//! Two failure kinds exist: bad input caught before any simulation work
//! starts, and the runaway guard tripping mid-run. Everything else
//! (idle CPU, empty ready queue, simultaneous arrivals) is normal
//! control flow.

use thiserror::Error;

use crate::engine::SimulationResult;
use crate::validation::ValidationError;

/// Why a simulation run failed.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The input was rejected before the run started.
    #[error("invalid simulation input: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),

    /// The run exceeded the configured time ceiling and was aborted.
    ///
    /// Carries whatever partial results were produced; processes that
    /// never completed are flagged in the partial metrics.
    #[error("simulation aborted: clock exceeded the configured ceiling of {limit}")]
    Aborted {
        /// The ceiling that was exceeded.
        limit: i64,
        /// Results up to the abort point.
        partial: Box<SimulationResult>,
    },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
