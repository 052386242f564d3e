//! Discrete-time scheduling engine.
//!
//! Drives simulated time forward in whole-unit steps over an isolated
//! snapshot of the submitted processes, producing an execution timeline
//! and final per-process results.
//!
//! # Structure
//!
//! - `context`: the per-run state machine (clock, pool, ready queue,
//!   running slot) with one method per simulation step
//! - `dispatch`: pure ready-queue ordering and preemption comparisons
//! - `simulator`: validation, the driver loop, and result assembly

pub(crate) mod context;
pub(crate) mod dispatch;
mod simulator;

pub use simulator::{SimulationRequest, SimulationResult, Simulator, DEFAULT_TIME_LIMIT};
