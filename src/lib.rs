//! # vecset: generic vector and fixed-bucket hash set
//!
//! This crate provides two transient, process-local containers with
//! client-supplied policy hooks:
//!
//! - **`FlexVec<T>`** - Growable contiguous vector with doubling growth,
//!   shift-based insert/delete, client-comparator sort and search, and an
//!   optional per-element dispose hook
//! - **`BucketSet<T, H, C>`** - Hash set with a fixed bucket count, built
//!   as an array of `FlexVec` collision chains, with upsert semantics
//!   (at most one element per key)
//!
//! Allocation failure is reported through [`ContainerError`]; every other
//! misuse (out-of-range positions, zero capacities or bucket counts, a
//! hash function escaping its range) is a documented panic. The containers
//! are single-threaded: callers sharing one across threads must provide
//! their own synchronization.
//!
//! ## Quick Start
//!
//! ```rust
//! use vecset::{BucketSet, FlexVec};
//!
//! // Growable vector with an initial capacity hint
//! let mut vec: FlexVec<u64> = FlexVec::with_capacity(4)?;
//! vec.push(42)?;
//! vec.push(7)?;
//! vec.sort_unstable_by(|a, b| a.cmp(b));
//! assert_eq!(vec.as_slice(), &[7, 42]);
//!
//! // Hash set routing keys through a client hash function
//! let mut set = BucketSet::new(
//!     8,
//!     |k: &u64, buckets: usize| (*k as usize) % buckets,
//!     |a: &u64, b: &u64| a.cmp(b),
//! )?;
//! set.insert(5)?;
//! set.insert(13)?; // collides with 5 in bucket 5
//! set.insert(5)?;  // upsert: replaces, count unchanged
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.get(&13), Some(&13));
//! # Ok::<(), vecset::ContainerError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod containers;
pub mod error;
pub mod hash_set;

pub use containers::{DisposeFn, FlexVec};
pub use error::{ContainerError, Result};
pub use hash_set::BucketSet;
