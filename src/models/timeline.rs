//! Execution timeline (Gantt data) model.
//!
//! The timeline is the engine's record of who held the CPU when: a list of
//! maximal contiguous intervals in non-decreasing start order. A preempted
//! process that later resumes gets a fresh entry; entries are never merged
//! across a preemption boundary.

use serde::{Deserialize, Serialize};

/// One uninterrupted stretch of CPU time for a single process.
///
/// Half-open interval `[start, end)` with `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Process that held the CPU.
    pub process_id: u32,
    /// First time unit of the interval.
    pub start: i64,
    /// One past the last time unit of the interval.
    pub end: i64,
}

impl TimelineEntry {
    /// Creates an entry for the given process and interval.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Interval length in time units.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the given tick falls inside this interval.
    #[inline]
    pub fn contains(&self, tick: i64) -> bool {
        tick >= self.start && tick < self.end
    }
}

/// A complete execution timeline produced by one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in non-decreasing start order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Latest end time across all entries, 0 when empty.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Total CPU time granted to the given process.
    pub fn busy_time_for(&self, process_id: u32) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.process_id == process_id)
            .map(|e| e.duration())
            .sum()
    }

    /// All entries for the given process, in execution order.
    pub fn entries_for(&self, process_id: u32) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id == process_id)
            .collect()
    }

    /// Which process held the CPU at the given tick, if any.
    pub fn active_at(&self, tick: i64) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.contains(tick))
            .map(|e| e.process_id)
    }

    /// Total busy time across all processes (makespan minus idle gaps).
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(|e| e.duration()).sum()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks the structural invariant: every entry is non-empty and no
    /// two entries overlap (each starts at or after the previous end).
    pub fn is_well_formed(&self) -> bool {
        self.entries.iter().all(|e| e.end > e.start)
            && self
                .entries
                .windows(2)
                .all(|w| w[1].start >= w[0].end)
    }
}
