//! Simulation context: the explicit state of one run.
//!
//! All mutable run state (clock, arrival pool, ready queue, running slot,
//! timeline under construction) lives in one `SimContext` value threaded
//! through the per-tick step methods. Nothing survives between runs, so
//! repeated or interleaved invocations cannot observe each other.

use std::collections::VecDeque;

use log::trace;

use super::dispatch;
use crate::models::{Algorithm, Process, ProcessState, Timeline, TimelineEntry};

/// Engine-private snapshot of one process.
///
/// Created by deep-copying the caller's `Process` at run start; the
/// original burst is frozen here so later edits to the caller's record
/// cannot affect an in-flight or finished run.
#[derive(Debug, Clone)]
pub(crate) struct SimProcess {
    pub id: u32,
    pub arrival: i64,
    pub priority: Option<i64>,
    /// Burst as submitted, frozen at run start.
    pub original_burst: i64,
    /// CPU time still required; 0 at completion.
    pub remaining: i64,
    /// Remaining allotment in the current round-robin slice.
    pub quantum_left: i64,
    pub state: ProcessState,
    /// Time of first dispatch.
    pub start_time: Option<i64>,
    /// End of the final time unit the process executed.
    pub completion: Option<i64>,
}

impl SimProcess {
    /// Freezes a caller-supplied process into run state.
    pub fn snapshot(p: &Process) -> Self {
        Self {
            id: p.id,
            arrival: p.arrival,
            priority: p.priority,
            original_burst: p.burst,
            remaining: p.burst,
            quantum_left: 0,
            state: ProcessState::New,
            start_time: None,
            completion: None,
        }
    }
}

/// What the clock step decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
    /// Every process has terminated; the run is over.
    Finished,
    /// The clock moved forward; keep stepping.
    Continue,
}

/// State of a single simulation run.
pub(crate) struct SimContext {
    pub algorithm: Algorithm,
    /// Round-robin slice length; 0 for other algorithms.
    pub quantum: i64,
    /// Current simulated time.
    pub clock: i64,
    /// All process snapshots, in submission order.
    pub procs: Vec<SimProcess>,
    /// Indices of processes that have not arrived yet,
    /// sorted by (arrival, id).
    pool: Vec<usize>,
    /// Indices of ready processes. FIFO for round-robin; re-ordered
    /// through the dispatch policy before every other selection.
    pub ready: VecDeque<usize>,
    /// Index of the process holding the CPU.
    pub running: Option<usize>,
    pub timeline: Timeline,
    /// Index into `timeline.entries` of the entry being extended.
    open_entry: Option<usize>,
    completed: usize,
}

impl SimContext {
    pub fn new(processes: &[Process], algorithm: Algorithm, quantum: i64) -> Self {
        let procs: Vec<SimProcess> = processes.iter().map(SimProcess::snapshot).collect();
        let mut pool: Vec<usize> = (0..procs.len()).collect();
        pool.sort_by_key(|&i| (procs[i].arrival, procs[i].id));
        Self {
            algorithm,
            quantum,
            clock: 0,
            procs,
            pool,
            ready: VecDeque::new(),
            running: None,
            timeline: Timeline::new(),
            open_entry: None,
            completed: 0,
        }
    }

    /// Step 1: move every process with `arrival <= clock` from the pool
    /// into the ready queue. The pool is sorted by (arrival, id), so
    /// simultaneous arrivals enter in ID order.
    pub fn admit_arrivals(&mut self) {
        while let Some(&idx) = self.pool.first() {
            if self.procs[idx].arrival > self.clock {
                break;
            }
            self.pool.remove(0);
            self.procs[idx].state = ProcessState::Ready;
            trace!("t={}: process {} arrived", self.clock, self.procs[idx].id);
            self.ready.push_back(idx);
        }
    }

    /// Step 2: for preemptive policies, hand the CPU back if the best
    /// ready candidate strictly beats the running process.
    pub fn preempt_if_better(&mut self) {
        if !self.algorithm.is_preemptive() {
            return;
        }
        let Some(run_idx) = self.running else { return };
        if self.ready.is_empty() {
            return;
        }

        let ordered = dispatch::order(self.algorithm, &self.procs, &self.ready);
        let best = ordered[0];
        if dispatch::preempts(self.algorithm, &self.procs[best], &self.procs[run_idx]) {
            trace!(
                "t={}: process {} preempted by {}",
                self.clock,
                self.procs[run_idx].id,
                self.procs[best].id
            );
            // The open timeline entry already ends at the current clock.
            self.open_entry = None;
            self.procs[run_idx].state = ProcessState::Ready;
            self.ready = ordered;
            self.ready.push_back(run_idx);
            self.running = None;
        }
    }

    /// Step 3: if the CPU is idle, pick the head of the ordered ready
    /// queue, open its timeline entry, and start its quantum if needed.
    pub fn dispatch_next(&mut self) {
        if self.running.is_some() || self.ready.is_empty() {
            return;
        }

        if !self.algorithm.is_round_robin() {
            self.ready = dispatch::order(self.algorithm, &self.procs, &self.ready);
        }
        let Some(idx) = self.ready.pop_front() else {
            return;
        };

        let p = &mut self.procs[idx];
        p.state = ProcessState::Running;
        if p.start_time.is_none() {
            p.start_time = Some(self.clock);
        }
        if self.algorithm.is_round_robin() {
            p.quantum_left = self.quantum;
        }
        trace!("t={}: dispatched process {}", self.clock, p.id);

        self.timeline
            .push(TimelineEntry::new(p.id, self.clock, self.clock + 1));
        self.open_entry = Some(self.timeline.len() - 1);
        self.running = Some(idx);
    }

    /// Steps 4-5: run the current process for one time unit, then handle
    /// completion or round-robin quantum expiry.
    pub fn execute_unit(&mut self) {
        let Some(idx) = self.running else { return };

        self.procs[idx].remaining -= 1;
        if self.algorithm.is_round_robin() {
            self.procs[idx].quantum_left -= 1;
        }
        if let Some(entry) = self.open_entry {
            self.timeline.entries[entry].end = self.clock + 1;
        }

        if self.procs[idx].remaining <= 0 {
            let p = &mut self.procs[idx];
            p.state = ProcessState::Terminated;
            p.completion = Some(self.clock + 1);
            trace!("t={}: process {} completed", self.clock + 1, p.id);
            self.completed += 1;
            self.running = None;
            self.open_entry = None;
        } else if self.algorithm.is_round_robin() && self.procs[idx].quantum_left <= 0 {
            self.procs[idx].state = ProcessState::Ready;
            trace!(
                "t={}: process {} quantum expired, requeued",
                self.clock + 1,
                self.procs[idx].id
            );
            self.ready.push_back(idx);
            self.running = None;
            self.open_entry = None;
        }
    }

    /// Step 6: advance the clock, jumping over idle gaps straight to the
    /// next pending arrival when nothing is runnable.
    pub fn advance(&mut self) -> Advance {
        if self.completed == self.procs.len() {
            return Advance::Finished;
        }

        if self.running.is_none() && self.ready.is_empty() && !self.pool.is_empty() {
            // Everything still pending arrives strictly later than now,
            // so the jump only elides idle CPU time.
            let next_arrival = self
                .pool
                .iter()
                .map(|&i| self.procs[i].arrival)
                .min()
                .unwrap_or(self.clock + 1);
            self.clock = next_arrival.max(self.clock + 1);
        } else {
            self.clock += 1;
        }
        Advance::Continue
    }

    /// Number of processes that have terminated so far.
    pub fn completed_count(&self) -> usize {
        self.completed
    }
}
