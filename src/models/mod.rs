//! Simulation domain models.
//!
//! Core data types for describing a scheduling problem and its outcome:
//! the processes submitted by the caller, the algorithm selection, and
//! the execution timeline the engine produces.

mod algorithm;
mod process;
mod timeline;

pub use algorithm::Algorithm;
pub use process::{sample_processes, Process, ProcessState};
pub use timeline::{Timeline, TimelineEntry};
