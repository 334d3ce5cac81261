// Parallel execution over partitioned offset ranges
//
// One worker per partition range. Each worker rebuilds its own RangeWalker
// from the range bounds alone and mutates its own disjoint store view, so the
// workers share nothing and never block each other; the only synchronization
// point is the final join. Storage and threading stay separate components —
// the executor borrows views from the store rather than extending it.

use std::ops::Range;
use std::thread;

use crate::error::{Error, Result};
use crate::store::{PairStore, StoreView};
use crate::triangular::TriangularIndex;
use crate::walker::{PairVisit, RangeWalker};

/// How the per-range workers are scheduled.
///
/// `Simulated` runs every range sequentially on the calling thread; the pairs
/// visited and the offsets assigned are identical to `Threaded`, only the
/// scheduling differs. Used for deterministic testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Threaded,
    Simulated,
}

/// Resolve the number of workers to run.
///
/// A positive request is taken as-is; otherwise size from hardware
/// parallelism, keeping one core free, never below one worker.
pub fn effective_worker_count(requested: i64) -> usize {
    if requested > 0 {
        requested as usize
    } else {
        num_cpus::get().saturating_sub(1).max(1)
    }
}

/// Dispatch one worker per range and block until all of them finish.
///
/// Every yielded pair is handed to `process` together with the worker's own
/// store view. All workers are joined before returning, success or failure;
/// the first worker error is reported. Errors here are deterministic
/// indexing defects, so nothing is retried.
pub fn run_all<F>(
    index: &TriangularIndex,
    store: &mut PairStore,
    ranges: &[Range<usize>],
    mode: ExecutionMode,
    process: F,
) -> Result<()>
where
    F: Fn(&PairVisit, &mut StoreView<'_>) -> Result<()> + Sync,
{
    let views = store.disjoint_views(ranges);
    match mode {
        ExecutionMode::Simulated => {
            for (range, mut view) in ranges.iter().cloned().zip(views) {
                run_range(index, range, &mut view, &process)?;
            }
            Ok(())
        }
        ExecutionMode::Threaded => thread::scope(|scope| {
            let process = &process;
            let mut handles = Vec::with_capacity(ranges.len());
            for (range, mut view) in ranges.iter().cloned().zip(views) {
                handles.push(scope.spawn(move || run_range(index, range, &mut view, process)));
            }
            let mut outcome = Ok(());
            for handle in handles {
                match handle.join() {
                    Ok(result) => {
                        if outcome.is_ok() {
                            outcome = result;
                        }
                    }
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
            outcome
        }),
    }
}

fn run_range<F>(
    index: &TriangularIndex,
    range: Range<usize>,
    view: &mut StoreView<'_>,
    process: &F,
) -> Result<()>
where
    F: Fn(&PairVisit, &mut StoreView<'_>) -> Result<()>,
{
    if range.start < range.end.min(index.pair_count()) {
        log::debug!(
            "worker range [{}, {}) starts at row {}",
            range.start,
            range.end,
            index.first_row_of_offset(range.start)
        );
    } else {
        log::debug!("worker range [{}, {}) is empty", range.start, range.end);
    }
    for visit in RangeWalker::new(index, range) {
        process(&visit, view)?;
    }
    Ok(())
}

/// Reference workload: bump every element of every pair's vector once.
///
/// Before touching the store, each pair's walker-derived offset is checked
/// against an independent `linear_offset` recomputation. A disagreement means
/// the partitioning or indexing is silently corrupting data, so it surfaces
/// as `ConsistencyMismatch` and fails the whole run.
pub fn process_all_pairs(
    index: &TriangularIndex,
    store: &mut PairStore,
    ranges: &[Range<usize>],
    mode: ExecutionMode,
) -> Result<()> {
    run_all(index, store, ranges, mode, |visit, view| {
        let recomputed = index.linear_offset(visit.row, visit.col)?;
        if recomputed != visit.offset {
            return Err(Error::ConsistencyMismatch {
                row: visit.row,
                col: visit.col,
                walker_offset: visit.offset,
                recomputed,
            });
        }
        for element in 0..view.vector_len() {
            view.increment(visit.offset, element)?;
        }
        Ok(())
    })
}

#[path = "executor_test.rs"]
mod executor_test;
