// pairspace/src/verify_test.rs

#[cfg(test)]
mod tests {
    use crate::store::PairStore;
    use crate::triangular::TriangularIndex;
    use crate::verify::{find_first_deviation, Deviation};

    #[test]
    fn test_fresh_store_deviates_from_one() {
        let index = TriangularIndex::new(4);
        let store = PairStore::new(index.pair_count(), 2);
        let deviation = find_first_deviation(&index, &store, 1).unwrap();
        assert_eq!(
            deviation,
            Some(Deviation {
                row: 0,
                col: 1,
                element: 0,
                value: 0,
            })
        );
    }

    #[test]
    fn test_fully_processed_store_passes() {
        let index = TriangularIndex::new(4);
        let mut store = PairStore::new(index.pair_count(), 2);
        for offset in 0..index.pair_count() {
            store.increment(offset, 0).unwrap();
            store.increment(offset, 1).unwrap();
        }
        assert_eq!(find_first_deviation(&index, &store, 1).unwrap(), None);
    }

    #[test]
    fn test_double_increment_is_caught() {
        let index = TriangularIndex::new(4);
        let mut store = PairStore::new(index.pair_count(), 1);
        for offset in 0..index.pair_count() {
            store.increment(offset, 0).unwrap();
        }
        // Pair (1,3) sits at offset 4; bump it a second time.
        store.increment(4, 0).unwrap();
        let deviation = find_first_deviation(&index, &store, 1).unwrap().unwrap();
        assert_eq!((deviation.row, deviation.col), (1, 3));
        assert_eq!(deviation.value, 2);
    }

    #[test]
    fn test_empty_pair_space_passes() {
        let index = TriangularIndex::new(1);
        let store = PairStore::new(index.pair_count(), 3);
        assert_eq!(find_first_deviation(&index, &store, 1).unwrap(), None);
    }
}
