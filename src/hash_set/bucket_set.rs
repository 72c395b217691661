//! BucketSet: fixed-bucket hash set with client-supplied hash and compare
//!
//! Each bucket is a [`FlexVec`] holding the elements that collide there, so
//! collision chains stay contiguous and cache-friendly. The bucket count is
//! fixed for the lifetime of the set: there is no rehashing, and a skewed
//! hash function degrades the affected bucket to a linear scan. Callers who
//! need scalability under growth should size the bucket count for the
//! expected population up front.

use crate::containers::{DisposeFn, FlexVec};
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// Hash set with a fixed bucket count and per-bucket vector chaining
///
/// The hash function receives the element and the bucket count and must
/// return an index in `[0, bucket_count)`; the comparator is a three-way
/// ordering whose `Equal` defines key identity. Inserting an element whose
/// key is already present replaces the stored payload in place, so the set
/// holds at most one element per key.
///
/// # Examples
///
/// ```rust
/// use vecset::BucketSet;
///
/// let mut set = BucketSet::new(
///     4,
///     |k: &i32, buckets: usize| k.rem_euclid(buckets as i32) as usize,
///     |a: &i32, b: &i32| a.cmp(b),
/// )?;
///
/// set.insert(5)?;
/// set.insert(9)?;
/// set.insert(5)?;
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(&9), Some(&9));
/// # Ok::<(), vecset::ContainerError>(())
/// ```
pub struct BucketSet<T, H, C> {
    buckets: Box<[FlexVec<T>]>,
    hash: H,
    cmp: C,
    len: usize,
}

impl<T, H, C> BucketSet<T, H, C>
where
    H: Fn(&T, usize) -> usize,
    C: Fn(&T, &T) -> Ordering,
{
    /// Create a set with `bucket_count` buckets
    ///
    /// Every bucket vector is built eagerly with capacity 1, so no bucket
    /// is ever in an uninitialized state.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero or `T` is zero-sized.
    pub fn new(bucket_count: usize, hash: H, cmp: C) -> Result<Self> {
        Self::build(bucket_count, hash, cmp, None)
    }

    /// Create a set whose elements are retired through `dispose`
    ///
    /// The hook is shared by every bucket and runs on each stored element
    /// displaced by an equal-key insert or still present at drop.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero or `T` is zero-sized.
    pub fn with_dispose(
        bucket_count: usize,
        hash: H,
        cmp: C,
        dispose: DisposeFn<T>,
    ) -> Result<Self> {
        Self::build(bucket_count, hash, cmp, Some(dispose))
    }

    fn build(
        bucket_count: usize,
        hash: H,
        cmp: C,
        dispose: Option<DisposeFn<T>>,
    ) -> Result<Self> {
        assert!(
            mem::size_of::<T>() > 0,
            "BucketSet requires a non-zero-sized element type"
        );
        assert!(bucket_count > 0, "BucketSet bucket count must be positive");

        let mut buckets = Vec::with_capacity(bucket_count);
        for _ in 0..bucket_count {
            buckets.push(match dispose {
                Some(hook) => FlexVec::with_capacity_and_dispose(1, hook)?,
                None => FlexVec::with_capacity(1)?,
            });
        }

        Ok(Self {
            buckets: buckets.into_boxed_slice(),
            hash,
            cmp,
            len: 0,
        })
    }

    /// Number of distinct keys stored, maintained incrementally
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at construction
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of elements chained in bucket `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= bucket_count()`.
    pub fn bucket_len(&self, index: usize) -> usize {
        self.buckets[index].len()
    }

    /// Route an element to its bucket, enforcing the hash range contract
    fn bucket_for(&self, value: &T) -> usize {
        let index = (self.hash)(value, self.buckets.len());
        assert!(
            index < self.buckets.len(),
            "hash function returned bucket {} out of range for {} buckets",
            index,
            self.buckets.len()
        );
        index
    }

    /// Insert `value`, replacing any stored element with an equal key
    ///
    /// On replacement the stale payload is retired (dispose hook, then
    /// drop) and the count is unchanged; otherwise the value is appended
    /// to its bucket and the count grows by one.
    ///
    /// # Panics
    ///
    /// Panics if the hash function returns an index `>= bucket_count()`.
    pub fn insert(&mut self, value: T) -> Result<()> {
        let slot = self.bucket_for(&value);
        let Self { buckets, cmp, len, .. } = self;
        let bucket = &mut buckets[slot];

        match bucket.search(&value, &*cmp, false) {
            Some(pos) => bucket.replace(value, pos),
            None => {
                bucket.push(value)?;
                *len += 1;
            }
        }
        Ok(())
    }

    /// Look up the stored element whose key equals `probe`'s
    ///
    /// Returns a reference into the bucket without copying; the reference
    /// is invalidated by the next mutating call, which the borrow checker
    /// enforces.
    ///
    /// # Panics
    ///
    /// Panics if the hash function returns an index `>= bucket_count()`.
    pub fn get(&self, probe: &T) -> Option<&T> {
        let slot = self.bucket_for(probe);
        let bucket = &self.buckets[slot];
        let pos = bucket.search(probe, &self.cmp, false)?;
        Some(&bucket[pos])
    }

    /// Whether an element with `probe`'s key is stored
    pub fn contains(&self, probe: &T) -> bool {
        self.get(probe).is_some()
    }

    /// Visit every stored element, bucket-index order first, insertion
    /// order within a bucket
    ///
    /// The callback may mutate element contents in place, but must not
    /// change any field the hash or compare functions read, or the element
    /// becomes unfindable.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        for bucket in self.buckets.iter_mut() {
            bucket.for_each_mut(&mut f);
        }
    }
}

impl<T, H, C> fmt::Debug for BucketSet<T, H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketSet")
            .field("len", &self.len)
            .field("bucket_count", &self.buckets.len())
            .finish()
    }
}
