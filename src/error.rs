//! Errors raised while building a map

use thiserror::Error;

/// Rejected construction parameters.
///
/// Lookup misses are never errors: they surface as `None` or `false`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MapError {
    /// A map needs at least one bucket to hash into
    #[error("initial capacity must be at least 1, got {capacity}")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },
    /// The growth threshold must lie in (0, 1]
    #[error("load factor must be in (0, 1], got {load_factor}")]
    InvalidLoadFactor {
        /// The rejected load factor
        load_factor: f64,
    },
}
