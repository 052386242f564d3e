//! Ready-queue ordering policy.
//!
//! Pure functions that define, per algorithm, a total order over waiting
//! processes. Tie-breaks always end at the process ID, so the resulting
//! order is deterministic and a run is reproducible from its input alone.
//!
//! Round-robin is the exception: its queue is strict FIFO, maintained by
//! push/pop discipline in the engine, and must never be re-sorted here.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::context::SimProcess;
use crate::models::Algorithm;

/// Compares two waiting processes under the given algorithm.
///
/// Lower = scheduled first. Keys per algorithm:
/// - `Fcfs`: arrival, then ID
/// - `Sjf`: original burst, then arrival, then ID
/// - `Srtf`: remaining burst, then arrival, then ID
/// - `Priority` / `PreemptivePriority`: priority (lower = more urgent),
///   then arrival, then ID
///
/// Must not be called for `RoundRobin`.
pub(crate) fn compare(algorithm: Algorithm, a: &SimProcess, b: &SimProcess) -> Ordering {
    debug_assert!(!algorithm.is_round_robin());
    let tail = (a.arrival, a.id).cmp(&(b.arrival, b.id));
    match algorithm {
        Algorithm::Fcfs | Algorithm::RoundRobin => tail,
        Algorithm::Sjf => a.original_burst.cmp(&b.original_burst).then(tail),
        Algorithm::Srtf => a.remaining.cmp(&b.remaining).then(tail),
        Algorithm::Priority | Algorithm::PreemptivePriority => {
            priority_key(a).cmp(&priority_key(b)).then(tail)
        }
    }
}

/// Returns a freshly ordered view of the ready queue.
///
/// The input queue is not touched; selection takes the head of the
/// returned queue. For round-robin the queue is already in dispatch
/// order and is returned as-is.
pub(crate) fn order(
    algorithm: Algorithm,
    procs: &[SimProcess],
    ready: &VecDeque<usize>,
) -> VecDeque<usize> {
    let mut ordered: VecDeque<usize> = ready.clone();
    if !algorithm.is_round_robin() {
        ordered
            .make_contiguous()
            .sort_by(|&a, &b| compare(algorithm, &procs[a], &procs[b]));
    }
    ordered
}

/// Whether `candidate` should take the CPU from `running`.
///
/// Preemption demands a strictly better primary key: equal remaining
/// time or equal priority never preempts.
pub(crate) fn preempts(
    algorithm: Algorithm,
    candidate: &SimProcess,
    running: &SimProcess,
) -> bool {
    match algorithm {
        Algorithm::Srtf => candidate.remaining < running.remaining,
        Algorithm::PreemptivePriority => priority_key(candidate) < priority_key(running),
        _ => false,
    }
}

/// Priority sort key. Validation guarantees a priority is present for
/// priority algorithms; a missing one sorts last rather than panicking.
fn priority_key(p: &SimProcess) -> i64 {
    p.priority.unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sim(id: u32, arrival: i64, burst: i64, priority: Option<i64>) -> SimProcess {
        let mut p = Process::new(id).with_arrival(arrival).with_burst(burst);
        if let Some(prio) = priority {
            p = p.with_priority(prio);
        }
        SimProcess::snapshot(&p)
    }

    fn ids(ordered: &VecDeque<usize>, procs: &[SimProcess]) -> Vec<u32> {
        ordered.iter().map(|&i| procs[i].id).collect()
    }

    #[test]
    fn test_fcfs_order() {
        let procs = vec![
            sim(3, 2, 5, None),
            sim(1, 0, 9, None),
            sim(2, 0, 1, None),
        ];
        let ready: VecDeque<usize> = (0..3).collect();
        let ordered = order(Algorithm::Fcfs, &procs, &ready);
        assert_eq!(ids(&ordered, &procs), vec![1, 2, 3]);
    }

    #[test]
    fn test_sjf_uses_original_burst() {
        let mut procs = vec![sim(1, 0, 6, None), sim(2, 0, 4, None)];
        // Process 1 has already run down to 2 remaining; SJF still ranks
        // by the frozen original burst, not remaining time.
        procs[0].remaining = 2;
        let ready: VecDeque<usize> = (0..2).collect();
        let ordered = order(Algorithm::Sjf, &procs, &ready);
        assert_eq!(ids(&ordered, &procs), vec![2, 1]);
    }

    #[test]
    fn test_srtf_uses_remaining() {
        let mut procs = vec![sim(1, 0, 6, None), sim(2, 0, 4, None)];
        procs[0].remaining = 2;
        let ready: VecDeque<usize> = (0..2).collect();
        let ordered = order(Algorithm::Srtf, &procs, &ready);
        assert_eq!(ids(&ordered, &procs), vec![1, 2]);
    }

    #[test]
    fn test_priority_lower_number_wins() {
        let procs = vec![
            sim(1, 0, 5, Some(4)),
            sim(2, 0, 5, Some(1)),
            sim(3, 0, 5, Some(2)),
        ];
        let ready: VecDeque<usize> = (0..3).collect();
        let ordered = order(Algorithm::Priority, &procs, &ready);
        assert_eq!(ids(&ordered, &procs), vec![2, 3, 1]);
    }

    #[test]
    fn test_tie_breaks_by_arrival_then_id() {
        let procs = vec![
            sim(2, 1, 5, None),
            sim(1, 1, 5, None),
            sim(3, 0, 5, None),
        ];
        let ready: VecDeque<usize> = (0..3).collect();
        let ordered = order(Algorithm::Sjf, &procs, &ready);
        // Equal bursts: arrival first, then ID.
        assert_eq!(ids(&ordered, &procs), vec![3, 1, 2]);
    }

    #[test]
    fn test_round_robin_never_reordered() {
        let procs = vec![sim(2, 0, 9, None), sim(1, 0, 1, None)];
        let ready: VecDeque<usize> = (0..2).collect();
        let ordered = order(Algorithm::RoundRobin, &procs, &ready);
        assert_eq!(ids(&ordered, &procs), vec![2, 1]);
    }

    #[test]
    fn test_order_leaves_input_untouched() {
        let procs = vec![sim(2, 1, 5, None), sim(1, 0, 5, None)];
        let ready: VecDeque<usize> = (0..2).collect();
        let _ = order(Algorithm::Fcfs, &procs, &ready);
        assert_eq!(ready, VecDeque::from(vec![0, 1]));
    }

    #[test]
    fn test_preemption_is_strict() {
        let shorter = sim(2, 1, 4, Some(1));
        let running = sim(1, 0, 8, Some(2));
        assert!(preempts(Algorithm::Srtf, &shorter, &running));
        assert!(preempts(Algorithm::PreemptivePriority, &shorter, &running));

        let equal = sim(3, 1, 8, Some(2));
        assert!(!preempts(Algorithm::Srtf, &equal, &running));
        assert!(!preempts(Algorithm::PreemptivePriority, &equal, &running));

        // Non-preemptive policies never preempt.
        assert!(!preempts(Algorithm::Sjf, &shorter, &running));
        assert!(!preempts(Algorithm::Fcfs, &shorter, &running));
    }
}
