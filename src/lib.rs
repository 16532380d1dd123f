//! # Chained Hash Map
//!
//! A string-keyed hash table that resolves collisions by separate chaining.
//!
//! Keys are placed with a polynomial rolling hash (base 31) reduced modulo the bucket
//! count at every step. Each bucket is a chain of key-value pairs, allocated on first use.
//! When an insertion brings the ratio of entries to buckets up to the load factor, the
//! bucket count doubles and every entry is rehashed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map with 16 buckets and a 0.75 load factor
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.set("apple", "red");
//! map.set("banana", "yellow");
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&"red"));
//! assert!(map.has("banana"));
//! assert!(!map.has("carrot"));
//!
//! // Remove values
//! assert!(map.remove("banana"));
//! assert_eq!(map.get("banana"), None);
//! assert_eq!(map.len(), 1);
//! ```
//!
//! ## Custom Parameters
//!
//! ```rust
//! use chainmap::{ChainedHashMap, MapConfig, MapError};
//!
//! let config = MapConfig::default().with_initial_capacity(4).with_load_factor(0.5);
//! let mut map = ChainedHashMap::with_config(config)?;
//!
//! map.set("one", 1);
//! map.set("two", 2); // 2 / 4 reaches the load factor
//! assert_eq!(map.capacity(), 8);
//!
//! assert!(ChainedHashMap::<i32>::with_capacity(0).is_err());
//! # Ok::<(), MapError>(())
//! ```

/// Module implementing the separate-chaining hash map
mod chained_map;
/// Construction parameters
mod config;
/// Error type for rejected parameters
mod error;
/// Rolling hash mapping keys to bucket indices
mod hash;
/// Bucket distribution statistics
mod stats;
#[cfg(test)]
mod test_utils;

pub use chained_map::{ChainedHashMap, Iter};
pub use config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, MapConfig};
pub use error::MapError;
pub use hash::bucket_index;
pub use stats::BucketStats;
