pub mod defaults;
pub mod error;
pub mod executor; // Threaded/simulated dispatch over partition ranges
pub mod partition; // Offset-space partitioning, one range per worker
pub mod store; // Packed per-pair vector storage
pub mod triangular; // Pair <-> linear offset bijection
pub mod utils;
pub mod verify; // Post-run verification pass
pub mod walker; // Per-range pair enumeration

pub use error::{Error, Result};
