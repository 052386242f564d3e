//! Discrete-time CPU scheduling simulator.
//!
//! Simulates the classic single-CPU scheduling algorithms — FCFS, SJF,
//! SRTF, priority (preemptive and not), and round-robin — over an
//! integer time axis, producing an execution timeline, per-process
//! metrics, and replayable per-tick frames.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Process`, `Algorithm`, `Timeline`
//! - **`validation`**: input integrity checks, collected before a run starts
//! - **`engine`**: the simulation loop — `Simulator`, `SimulationRequest`,
//!   `SimulationResult`
//! - **`metrics`**: turnaround/waiting derivation and run aggregates
//! - **`replay`**: pure `(result, tick) -> Frame` playback support
//!
//! # Example
//!
//! ```
//! use cpu_sched::engine::{SimulationRequest, Simulator};
//! use cpu_sched::models::{Algorithm, Process};
//!
//! let request = SimulationRequest::new(
//!     vec![
//!         Process::new(1).with_arrival(0).with_burst(5),
//!         Process::new(2).with_arrival(1).with_burst(3),
//!     ],
//!     Algorithm::RoundRobin,
//! )
//! .with_quantum(2);
//!
//! let result = Simulator::new().run(&request).unwrap();
//! assert_eq!(result.timeline.busy_time_for(1), 5);
//! ```
//!
//! A run is a pure function of its request: inputs are snapshotted at
//! run start, no state survives between runs, and identical requests
//! yield identical results.

pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod replay;
pub mod validation;

pub use engine::{SimulationRequest, SimulationResult, Simulator};
pub use error::SimulationError;
pub use metrics::{ProcessReport, SimulationMetrics};
pub use models::{Algorithm, Process, Timeline, TimelineEntry};
