// src/defaults.rs

// Workload Constants
pub const EXPECTED_ELEMENT_VALUE: i32 = 1;

// Input Constraints
pub const MIN_DIMENSION: usize = 2;
pub const MIN_VECTOR_LENGTH: usize = 1;

// Other Constants
pub const VERBOSITY: i32 = 3;
