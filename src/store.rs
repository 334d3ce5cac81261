// Packed per-pair vector storage
//
// One contiguous buffer of pair_count * vector_len integers; the vector for
// linear offset k occupies cells [k*vlen, (k+1)*vlen). Parallel mutation is
// coordinated purely by offset-range disjointness: `disjoint_views` splits the
// buffer into non-overlapping mutable views, one per partition range, so
// workers need no locks or atomics.

use std::ops::Range;

use crate::error::{Error, Result};

/// Dense store of one fixed-length integer vector per unordered pair.
#[derive(Debug)]
pub struct PairStore {
    npairs: usize,
    vlen: usize,
    cells: Vec<i32>,
}

impl PairStore {
    /// Allocate and zero-initialize `npairs` vectors of length `vlen`.
    pub fn new(npairs: usize, vlen: usize) -> Self {
        PairStore {
            npairs,
            vlen,
            cells: vec![0; npairs * vlen],
        }
    }

    pub fn pair_count(&self) -> usize {
        self.npairs
    }

    pub fn vector_len(&self) -> usize {
        self.vlen
    }

    /// Read the vector stored at a linear offset.
    pub fn get(&self, offset: usize) -> Result<&[i32]> {
        if offset >= self.npairs {
            return Err(Error::offset_out_of_range(offset, self.npairs));
        }
        let base = offset * self.vlen;
        Ok(&self.cells[base..base + self.vlen])
    }

    /// Increment one element of the vector stored at a linear offset.
    pub fn increment(&mut self, offset: usize, element: usize) -> Result<()> {
        if offset >= self.npairs {
            return Err(Error::offset_out_of_range(offset, self.npairs));
        }
        if element >= self.vlen {
            return Err(Error::IndexOutOfRange {
                what: "vector element",
                value: element,
                limit: self.vlen,
            });
        }
        self.cells[offset * self.vlen + element] += 1;
        Ok(())
    }

    /// Split the store into one mutable view per partition range.
    ///
    /// The ranges must be contiguous and ascending from offset 0, which is
    /// exactly what the partitioner produces; the borrow checker then makes
    /// the no-lock concurrency contract structural — two workers cannot hold
    /// the same cell.
    pub fn disjoint_views(&mut self, ranges: &[Range<usize>]) -> Vec<StoreView<'_>> {
        let vlen = self.vlen;
        let mut views = Vec::with_capacity(ranges.len());
        let mut rest = self.cells.as_mut_slice();
        let mut consumed = 0;
        for range in ranges {
            assert_eq!(
                range.start, consumed,
                "partition ranges must be contiguous from offset 0"
            );
            let (cells, tail) = rest.split_at_mut((range.end - range.start) * vlen);
            views.push(StoreView {
                base: range.start,
                vlen,
                cells,
            });
            rest = tail;
            consumed = range.end;
        }
        views
    }
}

/// Exclusive window over one worker's slice of the pair store.
///
/// Offsets passed in are global linear offsets; the view translates them to
/// its own base.
#[derive(Debug)]
pub struct StoreView<'a> {
    base: usize,
    vlen: usize,
    cells: &'a mut [i32],
}

impl StoreView<'_> {
    /// First linear offset owned by this view
    pub fn start_offset(&self) -> usize {
        self.base
    }

    /// Number of pair vectors owned by this view
    pub fn pair_count(&self) -> usize {
        self.cells.len() / self.vlen.max(1)
    }

    pub fn vector_len(&self) -> usize {
        self.vlen
    }

    /// Increment one element of the vector at a global linear offset.
    pub fn increment(&mut self, offset: usize, element: usize) -> Result<()> {
        if element >= self.vlen {
            return Err(Error::IndexOutOfRange {
                what: "vector element",
                value: element,
                limit: self.vlen,
            });
        }
        let end = self.base + self.pair_count();
        let local = offset
            .checked_sub(self.base)
            .ok_or_else(|| Error::offset_out_of_range(offset, end))?;
        let cell = local * self.vlen + element;
        if cell >= self.cells.len() {
            return Err(Error::offset_out_of_range(offset, end));
        }
        self.cells[cell] += 1;
        Ok(())
    }
}

#[path = "store_test.rs"]
mod store_test;
