//! Contiguous container types
//!
//! - **`FlexVec<T>`** - Growable vector with doubling growth and an
//!   optional per-element dispose hook, used standalone and as the bucket
//!   storage underneath [`BucketSet`](crate::BucketSet)

mod flex_vec;

pub use flex_vec::{DisposeFn, FlexVec};
