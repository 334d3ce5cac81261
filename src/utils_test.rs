// pairspace/src/utils_test.rs

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_realtime_is_monotonic_enough() {
        let t1 = realtime();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let t2 = realtime();
        assert!(t2 > t1);
        assert!(t2 - t1 >= 0.009);
    }

    #[test]
    fn test_cputime_is_nonnegative_and_grows() {
        let c1 = cputime();
        assert!(c1 >= 0.0);
        // Burn a little CPU; cputime must not go backwards.
        let mut acc = 0u64;
        for i in 0..2_000_000u64 {
            acc = acc.wrapping_add(i ^ (i << 3));
        }
        assert!(acc != 42); // Keep the loop from being optimized out.
        let c2 = cputime();
        assert!(c2 >= c1);
    }
}
