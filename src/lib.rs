//! Insertion-ordered hash map for Rust.
//!
//! This crate provides [`OrderedDict`], a dictionary with unique keys and expected O(1)
//! lookup that also remembers the order in which keys were inserted. That order is
//! observable through iteration, positional access, and positional mutation:
//!
//! - [`position_of`](OrderedDict::position_of) - Get the position of a key
//! - [`entry_at`](OrderedDict::entry_at) - Get the entry at a given position
//! - [`insert_at`](OrderedDict::insert_at), [`remove_at`](OrderedDict::remove_at),
//!   [`replace_range`](OrderedDict::replace_range) - Edit the sequence positionally
//! - Indexing by [`Position`] - e.g., `dict[Position(0)]` for the first value
//!
//! # Example
//!
//! ```
//! use ordered_dict::{OrderedDict, Position};
//!
//! let mut settings = OrderedDict::new();
//! settings.insert("width", 80);
//! settings.insert("height", 24);
//! settings.insert("depth", 8);
//!
//! // Dictionary operations work as expected
//! assert_eq!(settings.get("height"), Some(&24));
//! assert_eq!(settings.len(), 3);
//!
//! // Iteration follows insertion order
//! let keys: Vec<_> = settings.keys().copied().collect();
//! assert_eq!(keys, ["width", "height", "depth"]);
//!
//! // Positional operations
//! assert_eq!(settings.position_of("depth"), Some(2));
//! assert_eq!(settings[Position(0)], 80);
//!
//! assert_eq!(settings.to_string(), "[width: 80, height: 24, depth: 8]");
//! ```
//!
//! # Duplicate keys
//!
//! [`insert`](OrderedDict::insert) overwrites the value of an existing key and leaves its
//! position alone. [`append`](OrderedDict::append) and [`insert_at`](OrderedDict::insert_at)
//! instead ignore a key that is already present, leaving both its value and its position
//! unchanged.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Familiar API** - Key-based operations mirror `std::collections::HashMap`
//! - **Pluggable hashing** - Any [`BuildHasher`](core::hash::BuildHasher), defaulting to
//!   [`hashbrown::DefaultHashBuilder`]
//!
//! # Implementation
//!
//! Each map owns two structures: a vector of keys defining the order, and a
//! [`hashbrown::HashMap`] from key to value. Every mutating operation updates both before
//! returning. Key lookups go through the hash map; finding a key's position scans the key
//! vector and is O(n).

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod position;
mod raw;

pub mod ordered_dict;

pub use ordered_dict::OrderedDict;
pub use position::Position;
