// Per-range pair enumeration
//
// Reconstructs, from nothing but a linear-offset range, exactly the (row, col)
// pairs whose offsets fall inside it. Each worker builds its own walker from
// scratch; there is no shared cursor between workers.

use std::ops::Range;

use crate::triangular::TriangularIndex;

/// One pair visited by a walker: the canonical (row < col) indices and the
/// linear offset the walker derived for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairVisit {
    pub row: usize,
    pub col: usize,
    pub offset: usize,
}

/// Lazy row-major enumeration of the pairs in one offset range.
///
/// The starting row is found by accumulating row lengths up to the range
/// start; columns before the range on that row are skipped. Offsets grow
/// monotonically in row-major order, so the first offset at or past the range
/// end terminates the whole walk — no later row can produce an in-range
/// offset, and a worker never scans the rest of the matrix.
pub struct RangeWalker<'a> {
    index: &'a TriangularIndex,
    range: Range<usize>,
    row: usize,
    col: usize,
    done: bool,
}

impl<'a> RangeWalker<'a> {
    pub fn new(index: &'a TriangularIndex, range: Range<usize>) -> Self {
        let end = range.end.min(index.pair_count());
        if range.start >= end {
            return RangeWalker {
                index,
                range: range.start..end,
                row: 0,
                col: 0,
                done: true,
            };
        }
        let row = index.first_row_of_offset(range.start);
        RangeWalker {
            index,
            range: range.start..end,
            row,
            col: row + 1,
            done: false,
        }
    }
}

impl Iterator for RangeWalker<'_> {
    type Item = PairVisit;

    fn next(&mut self) -> Option<PairVisit> {
        if self.done {
            return None;
        }
        let n = self.index.dimension();
        while self.row < n {
            while self.col < n {
                let offset = self.index.offset_unchecked(self.row, self.col);
                if offset >= self.range.end {
                    self.done = true;
                    return None;
                }
                let visit = PairVisit {
                    row: self.row,
                    col: self.col,
                    offset,
                };
                self.col += 1;
                if offset >= self.range.start {
                    return Some(visit);
                }
                // Still before the range start on the first row; keep skipping.
            }
            self.row += 1;
            self.col = self.row + 1;
        }
        self.done = true;
        None
    }
}

#[path = "walker_test.rs"]
mod walker_test;
