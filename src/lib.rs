//! # Chained Hash Map
//!
//! A Rust implementation of a hash table built from first principles,
//! resolving collisions by separate chaining.
//!
//! This crate provides two hash map implementations:
//!
//! - `ChainedHashMap`: a single-threaded table with cursor-style iterators
//! - `ConcurrentChainedMap`: a thread-safe variant guarding the table with
//!   a single reader-writer lock
//!
//! Both slot keys with `hash(key) % capacity` and keep all colliding
//! entries in an ordered per-slot chain. When the load factor crosses 0.7
//! the bucket array doubles and every entry is redistributed, so chains
//! stay short and operations stay amortized O(1).
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values; the old value comes back
//! assert_eq!(map.insert("apple".to_string(), 10), Some(1));
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Cursors
//!
//! `find` returns an iterator positioned at the matching entry; a miss is
//! the end sentinel rather than an error:
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! map.insert(7, "seven");
//!
//! let mut cursor = map.find(&7);
//! assert_eq!(cursor.next(), Some((&7, &"seven")));
//! assert!(map.find(&8) == map.end());
//! ```
//!
//! ## Concurrent Usage
//!
//! ```rust
//! use chainmap::ConcurrentChainedMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! // Create a shared hash map
//! let map = Arc::new(ConcurrentChainedMap::new());
//!
//! // Clone references for different threads
//! let map1 = Arc::clone(&map);
//! let map2 = Arc::clone(&map);
//!
//! // Spawn threads that modify the map concurrently
//! let t1 = thread::spawn(move || {
//!     for i in 0..100 {
//!         map1.insert(format!("key-{}", i), i);
//!     }
//! });
//!
//! let t2 = thread::spawn(move || {
//!     for i in 100..200 {
//!         map2.insert(format!("key-{}", i), i);
//!     }
//! });
//!
//! // Wait for threads to complete
//! t1.join().unwrap();
//! t2.join().unwrap();
//!
//! // Writers are serialized by the exclusive lock, so no insert is lost
//! assert_eq!(map.len(), 200);
//! ```

/// Module implementing the single-threaded separate-chaining hash table
mod chained_map;
/// Module implementing the reader-writer-locked concurrent variant
mod concurrent_chained_map;
/// Utility traits shared by the map implementations
mod utils;

pub use chained_map::{ChainedHashMap, IntoIter, Iter, IterMut};
pub use concurrent_chained_map::{ConcurrentChainedMap, Iter as ConcurrentIter};
pub use utils::MapExtensions;
