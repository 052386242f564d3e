//! Pure timeline replay.
//!
//! Turns a finished run into per-tick frames for animated playback.
//! The engine has already terminated by the time a replay exists, so a
//! frame is a pure function of `(result, tick)`: no timer is owned here,
//! and the externally owned clock that drives playback can stop at any
//! tick without affecting anything. A replay borrows its result, so
//! results from a superseded run cannot outlive their data.

use serde::{Deserialize, Serialize};

use crate::engine::SimulationResult;

/// What a renderer needs to draw one tick of playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// The tick this frame describes.
    pub tick: i64,
    /// Process holding the CPU at this tick, if any.
    pub running: Option<u32>,
    /// Arrived, unfinished processes not currently running, in ID order.
    pub ready: Vec<u32>,
    /// Processes that have completed at or before this tick, in ID order.
    pub terminated: Vec<u32>,
}

/// Computes the frame for a single tick.
///
/// A process counts as ready when it has arrived, has not completed,
/// and does not hold the CPU. Completion at tick T means the process is
/// terminated in the frame for T.
pub fn frame_at(result: &SimulationResult, tick: i64) -> Frame {
    let running = result.timeline.active_at(tick);
    let mut ready = Vec::new();
    let mut terminated = Vec::new();

    for p in &result.processes {
        match p.completion {
            Some(completion) if completion <= tick => terminated.push(p.id),
            _ => {
                if p.arrival <= tick && Some(p.id) != running {
                    ready.push(p.id);
                }
            }
        }
    }
    // `result.processes` is already in ID order.

    Frame {
        tick,
        running,
        ready,
        terminated,
    }
}

/// Iterator over the frames of a finished run, one per tick from 0
/// through the makespan.
///
/// Playback pacing belongs to the caller: drive this from any clock and
/// drop it to cancel.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    result: &'a SimulationResult,
    cursor: i64,
}

impl<'a> Replay<'a> {
    /// Creates a replay positioned at tick 0.
    pub fn new(result: &'a SimulationResult) -> Self {
        Self { result, cursor: 0 }
    }

    /// Last tick this replay will yield.
    pub fn final_tick(&self) -> i64 {
        self.result.timeline.makespan()
    }

    /// Moves the cursor to an arbitrary tick.
    pub fn seek(&mut self, tick: i64) {
        self.cursor = tick.max(0);
    }
}

impl Iterator for Replay<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.cursor > self.final_tick() {
            return None;
        }
        let frame = frame_at(self.result, self.cursor);
        self.cursor += 1;
        Some(frame)
    }
}
