// Post-run verification
//
// Walks every pair (i < j) after processing and checks each element of its
// vector against the expected value. Reads go through the same indexer the
// workers used, so a packing defect shows up here even if processing raced
// past it.

use crate::error::Result;
use crate::store::PairStore;
use crate::triangular::TriangularIndex;

/// The first element found to differ from the expected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deviation {
    pub row: usize,
    pub col: usize,
    pub element: usize,
    pub value: i32,
}

/// Scan the whole store and report the first deviating element, if any.
pub fn find_first_deviation(
    index: &TriangularIndex,
    store: &PairStore,
    expected: i32,
) -> Result<Option<Deviation>> {
    for row in 0..index.dimension() {
        for col in (row + 1)..index.dimension() {
            let offset = index.linear_offset(row, col)?;
            let vector = store.get(offset)?;
            for (element, &value) in vector.iter().enumerate() {
                if value != expected {
                    return Ok(Some(Deviation {
                        row,
                        col,
                        element,
                        value,
                    }));
                }
            }
        }
    }
    Ok(None)
}

#[path = "verify_test.rs"]
mod verify_test;
