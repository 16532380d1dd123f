//! Construction parameters for `ChainedHashMap`

use crate::MapError;
use log::warn;

/// Number of buckets a map starts with when none is given.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Ratio of `len / capacity` at which the map doubles its bucket count.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Bucket count and growth threshold of a new map.
///
/// ```rust
/// use chainmap::{ChainedHashMap, MapConfig};
///
/// let config = MapConfig::default().with_initial_capacity(4).with_load_factor(0.5);
/// let map: ChainedHashMap<u32> = ChainedHashMap::with_config(config).unwrap();
/// assert_eq!(map.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Bucket count before any growth
    pub initial_capacity: usize,
    /// Growth threshold in (0, 1]
    pub load_factor: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { initial_capacity: DEFAULT_INITIAL_CAPACITY, load_factor: DEFAULT_LOAD_FACTOR }
    }
}

impl MapConfig {
    /// Sets the initial bucket count
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth threshold
    #[must_use]
    pub const fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks that the parameters describe a usable map.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidCapacity`] for a zero capacity and
    /// [`MapError::InvalidLoadFactor`] for a load factor outside (0, 1], NaN included.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.initial_capacity == 0 {
            warn!("rejecting map config: capacity {}", self.initial_capacity);
            return Err(MapError::InvalidCapacity { capacity: self.initial_capacity });
        }

        if self.load_factor.is_nan() || self.load_factor <= 0.0 || self.load_factor > 1.0 {
            warn!("rejecting map config: load factor {}", self.load_factor);
            return Err(MapError::InvalidLoadFactor { load_factor: self.load_factor });
        }

        Ok(())
    }
}
