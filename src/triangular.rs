// Upper-triangular pair indexing
//
// Associates every unordered pair of distinct indices drawn from 0..n-1 with a
// dense linear offset into a packed 1D array. Only the strict upper triangle
// of the n x n matrix is represented, so the offset space has exactly
// n*(n-1)/2 cells with no gaps for the diagonal or the lower triangle.

use crate::error::{Error, Result};

/// Bijection between unordered index pairs and dense linear offsets.
///
/// Pure arithmetic over a fixed dimension; holds no other state and is shared
/// freely across worker threads by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangularIndex {
    nrows: usize,
    npairs: usize,
}

impl TriangularIndex {
    /// Create an index over pairs drawn from `0..nrows`.
    ///
    /// Dimensions below 2 are accepted and simply yield an empty pair space.
    pub fn new(nrows: usize) -> Self {
        let npairs = if nrows < 2 { 0 } else { nrows * (nrows - 1) / 2 };
        TriangularIndex { nrows, npairs }
    }

    pub fn dimension(&self) -> usize {
        self.nrows
    }

    /// Total number of unordered pairs, n*(n-1)/2
    pub fn pair_count(&self) -> usize {
        self.npairs
    }

    /// Compute the linear offset for the unordered pair `(i, j)`.
    ///
    /// The pair is canonicalized so the smaller index becomes the row. Fails
    /// with `InvalidPair` when `i == j` and `IndexOutOfRange` when either
    /// index is outside `0..n`. An offset outside `0..pair_count()` cannot be
    /// produced from in-range indices; the final check exists to catch a
    /// dimension misconfiguration, and callers treat it as fatal.
    pub fn linear_offset(&self, i: usize, j: usize) -> Result<usize> {
        if i == j {
            return Err(Error::InvalidPair(i));
        }
        let (row, col) = if i < j { (i, j) } else { (j, i) };
        if col >= self.nrows {
            return Err(Error::col_out_of_range(col, self.nrows));
        }
        // row < col < nrows, so the row is in range by construction.
        let offset = self.offset_unchecked(row, col);
        if offset >= self.npairs {
            return Err(Error::offset_out_of_range(offset, self.npairs));
        }
        Ok(offset)
    }

    /// Row-major upper-triangular packing for `row < col < nrows`.
    ///
    /// Equivalent to `row*(n-1) - (row-1)*row/2 + col - row - 1`: the rows
    /// above `row` contribute (n-1) + (n-2) + ... + (n-row) cells, rearranged
    /// here so the subtraction stays in unsigned arithmetic. The product
    /// `row * (2n - 1 - row)` is always even.
    pub(crate) fn offset_unchecked(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < col && col < self.nrows);
        row * (2 * self.nrows - 1 - row) / 2 + col - row - 1
    }

    /// Find the row whose span of offsets contains `start`.
    ///
    /// Row r holds exactly n-1-r pairs (columns r+1..n-1). Accumulates the
    /// row lengths n-1, n-2, ... until the running total exceeds `start`,
    /// which lets a worker begin enumeration mid-matrix without having walked
    /// any earlier row. Precondition: `start < pair_count()`.
    pub fn first_row_of_offset(&self, start: usize) -> usize {
        debug_assert!(start < self.npairs);
        let mut row = 0;
        let mut row_len = self.nrows - 1;
        let mut total = row_len;
        while total <= start {
            row += 1;
            row_len -= 1;
            total += row_len;
        }
        row
    }
}

#[path = "triangular_test.rs"]
mod triangular_test;
