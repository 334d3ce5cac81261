// Offset-space partitioning
//
// Splits the linear offset space [0, pair_count) into one contiguous
// half-open range per worker. Range length is the ceiling of
// pair_count / worker_count, so the union always covers the whole space;
// the remainder is absorbed entirely by the tail — the last nonempty range
// is shortened and, when workers outnumber pairs, trailing ranges are empty.
// Empty ranges are valid no-op assignments, not errors.

use std::ops::Range;

use crate::error::{Error, Result};

/// Compute one contiguous offset range per worker, covering [0, pair_count)
/// exactly once.
pub fn partition_offsets(pair_count: usize, worker_count: usize) -> Result<Vec<Range<usize>>> {
    if worker_count == 0 {
        return Err(Error::InvalidWorkerCount { requested: 0 });
    }
    let base_len = range_length(pair_count, worker_count);
    let mut ranges = Vec::with_capacity(worker_count);
    let mut start = 0;
    for _ in 0..worker_count {
        let end = (start + base_len).min(pair_count);
        ranges.push(start..end);
        start = end;
    }
    Ok(ranges)
}

/// Ceiling division via increment, so `length * worker_count >= pair_count`
/// always holds and the ranges cannot fall short of full coverage.
fn range_length(pair_count: usize, worker_count: usize) -> usize {
    let mut length = pair_count / worker_count;
    while length * worker_count < pair_count {
        length += 1;
    }
    length
}

#[path = "partition_test.rs"]
mod partition_test;
