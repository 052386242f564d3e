//! Process model.
//!
//! A process is the unit of work submitted to the simulator: it becomes
//! eligible at its arrival time and needs `burst` units of CPU to finish.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process submitted for scheduling.
///
/// Holds only caller-supplied attributes. Run state (remaining burst,
/// quantum, completion) lives in the engine's private snapshot so the
/// caller's records are never mutated by a simulation run.
///
/// # Time Representation
/// All times are whole simulated time units starting at t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier, stable for the record's lifetime.
    pub id: u32,
    /// Time unit at which the process becomes eligible to run (>= 0).
    pub arrival: i64,
    /// Total CPU time required (>= 1).
    pub burst: i64,
    /// Scheduling priority; lower value = higher priority.
    /// `None` for algorithms that do not use priorities.
    pub priority: Option<i64>,
}

impl Process {
    /// Creates a process with the given ID, arriving at t=0 with burst 1.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            arrival: 0,
            burst: 1,
            priority: None,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst: i64) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Lifecycle state of a process during a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// Submitted but not yet arrived.
    New,
    /// Arrived and waiting in the ready queue.
    Ready,
    /// Currently holding the CPU.
    Running,
    /// Finished all required CPU time.
    Terminated,
}

/// A small mixed workload useful for demos and tests.
///
/// Five processes with staggered arrivals, bursts from 1 to 9, and
/// priorities covering the full range.
pub fn sample_processes() -> Vec<Process> {
    vec![
        Process::new(1).with_arrival(0).with_burst(8).with_priority(3),
        Process::new(2).with_arrival(1).with_burst(4).with_priority(1),
        Process::new(3).with_arrival(2).with_burst(9).with_priority(4),
        Process::new(4).with_arrival(3).with_burst(5).with_priority(2),
        Process::new(5).with_arrival(4).with_burst(1).with_priority(5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7).with_arrival(3).with_burst(10).with_priority(2);
        assert_eq!(p.id, 7);
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 10);
        assert_eq!(p.priority, Some(2));
    }

    #[test]
    fn test_process_defaults() {
        let p = Process::new(1);
        assert_eq!(p.arrival, 0);
        assert_eq!(p.burst, 1);
        assert_eq!(p.priority, None);
    }

    #[test]
    fn test_sample_workload() {
        let procs = sample_processes();
        assert_eq!(procs.len(), 5);
        assert!(procs.iter().all(|p| p.burst >= 1 && p.arrival >= 0));
        assert!(procs.iter().all(|p| p.priority.is_some()));
    }

    #[test]
    fn test_process_serde_round_trip() {
        let p = Process::new(2).with_arrival(1).with_burst(4).with_priority(0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
