// pairspace/src/walker_test.rs

#[cfg(test)]
mod tests {
    use crate::partition::partition_offsets;
    use crate::triangular::TriangularIndex;
    use crate::walker::{PairVisit, RangeWalker};

    #[test]
    fn test_full_range_yields_all_pairs_in_row_major_order() {
        let idx = TriangularIndex::new(4);
        let visits: Vec<PairVisit> = RangeWalker::new(&idx, 0..idx.pair_count()).collect();
        let expected = [
            (0, 1, 0),
            (0, 2, 1),
            (0, 3, 2),
            (1, 2, 3),
            (1, 3, 4),
            (2, 3, 5),
        ];
        assert_eq!(visits.len(), expected.len());
        for (visit, &(row, col, offset)) in visits.iter().zip(expected.iter()) {
            assert_eq!((visit.row, visit.col, visit.offset), (row, col, offset));
        }
    }

    #[test]
    fn test_mid_matrix_range_starts_on_the_right_pair() {
        // n=5: row spans are [0,4) [4,7) [7,9) [9,10). Range [5,8) starts
        // mid-row at (1,3) and crosses into row 2.
        let idx = TriangularIndex::new(5);
        let visits: Vec<(usize, usize, usize)> = RangeWalker::new(&idx, 5..8)
            .map(|v| (v.row, v.col, v.offset))
            .collect();
        assert_eq!(visits, vec![(1, 3, 5), (1, 4, 6), (2, 3, 7)]);
    }

    #[test]
    fn test_empty_range_yields_nothing() {
        let idx = TriangularIndex::new(5);
        assert_eq!(RangeWalker::new(&idx, 4..4).count(), 0);
        // Ranges past the end of the pair space are also no-ops.
        assert_eq!(RangeWalker::new(&idx, 10..10).count(), 0);
        assert_eq!(RangeWalker::new(&idx, 12..16).count(), 0);
    }

    #[test]
    fn test_range_end_clamped_to_pair_space() {
        let idx = TriangularIndex::new(4);
        // end overshoots p=6; the walker must stop at the last real pair.
        let visits: Vec<usize> = RangeWalker::new(&idx, 4..8).map(|v| v.offset).collect();
        assert_eq!(visits, vec![4, 5]);
    }

    #[test]
    fn test_partition_union_covers_every_pair_exactly_once() {
        for n in 2..=10usize {
            let idx = TriangularIndex::new(n);
            let p = idx.pair_count();
            for workers in 1..=7 {
                let ranges = partition_offsets(p, workers).unwrap();
                let mut counts = vec![0usize; p];
                for range in ranges {
                    for visit in RangeWalker::new(&idx, range.clone()) {
                        assert!(range.contains(&visit.offset));
                        counts[visit.offset] += 1;
                    }
                }
                assert!(
                    counts.iter().all(|&c| c == 1),
                    "n={n} workers={workers}: duplicated or missing pair"
                );
            }
        }
    }

    #[test]
    fn test_round_trip_offsets_match_indexer() {
        // Recomputing the offset from the walker-yielded pair must reproduce
        // the offset the walker assigned.
        let idx = TriangularIndex::new(8);
        for visit in RangeWalker::new(&idx, 0..idx.pair_count()) {
            assert_eq!(
                idx.linear_offset(visit.row, visit.col).unwrap(),
                visit.offset
            );
            assert_eq!(
                idx.linear_offset(visit.col, visit.row).unwrap(),
                visit.offset
            );
        }
    }

    #[test]
    fn test_walker_is_restartable() {
        let idx = TriangularIndex::new(6);
        let first: Vec<PairVisit> = RangeWalker::new(&idx, 3..9).collect();
        let second: Vec<PairVisit> = RangeWalker::new(&idx, 3..9).collect();
        assert_eq!(first, second);
    }
}
