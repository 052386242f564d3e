//! Discrete-time simulation driver.
//!
//! # Algorithm
//!
//! One whole time unit per step. At each tick the engine admits arrivals,
//! checks for preemption, dispatches the head of the ordered ready queue
//! if the CPU is idle, and executes one unit. When nothing is runnable
//! the clock jumps straight to the next pending arrival, so sparse
//! workloads do not tick through empty gaps one unit at a time.
//!
//! The whole run is synchronous and pure: the result depends only on the
//! request, and the caller's process records are never touched.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::context::{Advance, SimContext};
use crate::error::SimulationError;
use crate::metrics::{ProcessReport, SimulationMetrics};
use crate::models::{Algorithm, Process, Timeline};
use crate::validation::validate_input;

/// Ceiling on the simulated clock; a run that passes it is aborted.
/// Unreachable with well-formed finite-burst input, kept as a safety net.
pub const DEFAULT_TIME_LIMIT: i64 = 10_000;

/// Input container for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Selected scheduling algorithm.
    pub algorithm: Algorithm,
    /// Time quantum; required (>= 1) for round-robin, ignored otherwise.
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request for the given processes and algorithm.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the round-robin time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// CPU allocation intervals in non-decreasing start order.
    pub timeline: Timeline,
    /// Per-process outcomes, in process ID order.
    pub processes: Vec<ProcessReport>,
    /// Aggregate run metrics.
    pub metrics: SimulationMetrics,
}

impl SimulationResult {
    /// Mean turnaround time over completed processes.
    pub fn avg_turnaround(&self) -> f64 {
        self.metrics.avg_turnaround
    }

    /// Mean waiting time over completed processes.
    pub fn avg_waiting(&self) -> f64 {
        self.metrics.avg_waiting
    }
}

/// Discrete-time CPU scheduling simulator.
///
/// Validates its input, runs the selected algorithm over an isolated
/// snapshot of the submitted processes, and returns the execution
/// timeline with per-process and aggregate metrics.
///
/// # Example
///
/// ```
/// use cpu_sched::engine::{SimulationRequest, Simulator};
/// use cpu_sched::models::{Algorithm, Process};
///
/// let request = SimulationRequest::new(
///     vec![
///         Process::new(1).with_arrival(0).with_burst(8),
///         Process::new(2).with_arrival(1).with_burst(4),
///     ],
///     Algorithm::Fcfs,
/// );
/// let result = Simulator::new().run(&request).unwrap();
/// assert_eq!(result.timeline.makespan(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    time_limit: i64,
}

impl Simulator {
    /// Creates a simulator with the default time ceiling.
    pub fn new() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }

    /// Overrides the runaway-guard ceiling.
    pub fn with_time_limit(mut self, time_limit: i64) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Runs one simulation to completion.
    ///
    /// # Errors
    /// [`SimulationError::Invalid`] if the input fails validation;
    /// [`SimulationError::Aborted`] if the clock passes the ceiling.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        validate_input(&request.processes, request.algorithm, request.quantum)
            .map_err(SimulationError::Invalid)?;

        debug!(
            "starting {} run: {} processes, time limit {}",
            request.algorithm,
            request.processes.len(),
            self.time_limit
        );

        let quantum = request.quantum.unwrap_or(0);
        let mut ctx = SimContext::new(&request.processes, request.algorithm, quantum);

        loop {
            ctx.admit_arrivals();
            ctx.preempt_if_better();
            ctx.dispatch_next();
            ctx.execute_unit();

            match ctx.advance() {
                Advance::Finished => break,
                Advance::Continue if ctx.clock > self.time_limit => {
                    warn!(
                        "aborting run at t={}: time limit {} exceeded with {}/{} completed",
                        ctx.clock,
                        self.time_limit,
                        ctx.completed_count(),
                        request.processes.len()
                    );
                    return Err(SimulationError::Aborted {
                        limit: self.time_limit,
                        partial: Box::new(assemble(ctx)),
                    });
                }
                Advance::Continue => {}
            }
        }

        let result = assemble(ctx);
        debug!(
            "run finished: makespan {}, avg turnaround {:.2}, avg waiting {:.2}",
            result.metrics.makespan, result.metrics.avg_turnaround, result.metrics.avg_waiting
        );
        Ok(result)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts final context state into the caller-facing result,
/// reporting processes in ID order regardless of completion order.
fn assemble(ctx: SimContext) -> SimulationResult {
    let mut processes: Vec<ProcessReport> = ctx
        .procs
        .iter()
        .map(|p| {
            ProcessReport::new(
                p.id,
                p.arrival,
                p.original_burst,
                p.priority,
                p.start_time,
                p.completion,
            )
        })
        .collect();
    processes.sort_by_key(|r| r.id);

    let metrics = SimulationMetrics::calculate(&ctx.timeline, &processes);
    SimulationResult {
        timeline: ctx.timeline,
        processes,
        metrics,
    }
}
