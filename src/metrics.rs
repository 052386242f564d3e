//! Per-process results and run-level metrics.
//!
//! Derives the standard single-CPU scheduling measures from a finished
//! (or aborted) run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | max(0, turnaround - burst) |
//! | Avg Turnaround / Waiting | mean over completed processes |
//! | Makespan | latest timeline end |
//! | CPU Utilization | busy time / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::Timeline;

/// Final outcome for one process.
///
/// Carries the input attributes alongside the engine-assigned results.
/// The result fields stay `None` for a process the run never finished
/// (possible only when the run was aborted by the time ceiling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub id: u32,
    pub arrival: i64,
    /// Burst as submitted, frozen at run start.
    pub burst: i64,
    pub priority: Option<i64>,
    /// Time of first dispatch.
    pub start_time: Option<i64>,
    /// End of the final time unit the process executed.
    pub completion: Option<i64>,
    /// `completion - arrival`.
    pub turnaround: Option<i64>,
    /// `max(0, turnaround - burst)`: time spent ready but not running.
    pub waiting: Option<i64>,
}

impl ProcessReport {
    /// Builds a report from a process's final run state, deriving
    /// turnaround and waiting time when the process completed.
    pub fn new(
        id: u32,
        arrival: i64,
        burst: i64,
        priority: Option<i64>,
        start_time: Option<i64>,
        completion: Option<i64>,
    ) -> Self {
        let turnaround = completion.map(|c| c - arrival);
        // Floor at zero guards against anomalies; under correct
        // execution turnaround >= burst always holds.
        let waiting = turnaround.map(|t| (t - burst).max(0));
        Self {
            id,
            arrival,
            burst,
            priority,
            start_time,
            completion,
            turnaround,
            waiting,
        }
    }

    /// Whether the process ran to completion.
    pub fn completed(&self) -> bool {
        self.completion.is_some()
    }
}

/// Aggregate metrics for one run.
///
/// Averages count completed processes only; processes cut off by an
/// aborted run are reported in `incomplete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Mean turnaround time over completed processes.
    pub avg_turnaround: f64,
    /// Mean waiting time over completed processes.
    pub avg_waiting: f64,
    /// Latest timeline end, 0 for an empty timeline.
    pub makespan: i64,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Number of processes that completed.
    pub completed: usize,
    /// IDs of processes that did not complete, in ID order.
    pub incomplete: Vec<u32>,
}

impl SimulationMetrics {
    /// Computes aggregate metrics from a timeline and per-process reports.
    pub fn calculate(timeline: &Timeline, processes: &[ProcessReport]) -> Self {
        let mut total_turnaround: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut completed: usize = 0;
        let mut incomplete: Vec<u32> = Vec::new();

        for p in processes {
            match (p.turnaround, p.waiting) {
                (Some(turnaround), Some(waiting)) => {
                    total_turnaround += turnaround;
                    total_waiting += waiting;
                    completed += 1;
                }
                _ => incomplete.push(p.id),
            }
        }
        incomplete.sort_unstable();

        let (avg_turnaround, avg_waiting) = if completed == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / completed as f64,
                total_waiting as f64 / completed as f64,
            )
        };

        let makespan = timeline.makespan();
        let cpu_utilization = if makespan > 0 {
            timeline.busy_time() as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            avg_turnaround,
            avg_waiting,
            makespan,
            cpu_utilization,
            completed,
            incomplete,
        }
    }
}
