//! Hash set implementation
//!
//! - **`BucketSet<T, H, C>`** - Fixed-bucket hash set chaining collisions
//!   through per-bucket [`FlexVec`](crate::FlexVec)s, with client-supplied
//!   hash and three-way compare functions

mod bucket_set;

pub use bucket_set::BucketSet;
