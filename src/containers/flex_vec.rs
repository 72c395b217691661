//! FlexVec: growable contiguous vector with a per-element dispose hook
//!
//! FlexVec manages its own buffer with `alloc`/`realloc` and doubles the
//! capacity whenever an insertion finds the buffer full, so the initial
//! capacity acts as a sizing hint rather than a limit. An optional dispose
//! hook runs on each outgoing element (replace, remove, clear, drop) before
//! the element itself is dropped, covering resources that `Drop` cannot
//! reach, such as raw handles or indices into external tables.

use crate::error::{ContainerError, Result};
use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

/// Per-element cleanup hook, invoked on an element immediately before it is
/// dropped by the container
pub type DisposeFn<T> = fn(&mut T);

/// Growable contiguous vector of elements with doubling growth
///
/// The buffer is allocated eagerly at construction, so the capacity is
/// always positive and the data pointer is always valid. Element access
/// goes through `Deref<Target = [T]>`, which also provides iteration and
/// slice search for free.
///
/// # Examples
///
/// ```rust
/// use vecset::FlexVec;
///
/// let mut vec: FlexVec<i32> = FlexVec::with_capacity(2)?;
/// vec.push(1)?;
/// vec.push(3)?;
/// vec.insert(2, 1)?;
/// assert_eq!(vec.as_slice(), &[1, 2, 3]);
/// # Ok::<(), vecset::ContainerError>(())
/// ```
pub struct FlexVec<T> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    dispose: Option<DisposeFn<T>>,
}

impl<T> FlexVec<T> {
    /// Create an empty vector with the given initial capacity
    ///
    /// The capacity is a hint: the vector doubles it whenever an insertion
    /// finds the buffer full.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` is zero or `T` is zero-sized.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        Self::build(initial_capacity, None)
    }

    /// Create an empty vector whose elements are retired through `dispose`
    ///
    /// The hook runs on each element as it leaves the container (replace,
    /// remove, clear, drop), before the element's own `Drop`.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity` is zero or `T` is zero-sized.
    pub fn with_capacity_and_dispose(
        initial_capacity: usize,
        dispose: DisposeFn<T>,
    ) -> Result<Self> {
        Self::build(initial_capacity, Some(dispose))
    }

    fn build(initial_capacity: usize, dispose: Option<DisposeFn<T>>) -> Result<Self> {
        assert!(
            mem::size_of::<T>() > 0,
            "FlexVec requires a non-zero-sized element type"
        );
        assert!(
            initial_capacity > 0,
            "FlexVec initial capacity must be positive"
        );

        let layout = Layout::array::<T>(initial_capacity).map_err(|_| {
            ContainerError::out_of_memory(initial_capacity.saturating_mul(mem::size_of::<T>()))
        })?;

        let ptr = unsafe { alloc::alloc(layout) as *mut T };
        if ptr.is_null() {
            return Err(ContainerError::out_of_memory(layout.size()));
        }

        Ok(Self {
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            len: 0,
            cap: initial_capacity,
            dispose,
        })
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated capacity in elements, always `>= len()`
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// View the live elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// View the live elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Double the capacity, moving the buffer with realloc
    fn grow(&mut self) -> Result<()> {
        let new_cap = self
            .cap
            .checked_mul(2)
            .ok_or_else(|| ContainerError::out_of_memory(usize::MAX))?;

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| {
            ContainerError::out_of_memory(new_cap.saturating_mul(mem::size_of::<T>()))
        })?;
        let old_layout = Layout::array::<T>(self.cap).unwrap();

        let new_ptr = unsafe {
            alloc::realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) as *mut T
        };
        if new_ptr.is_null() {
            return Err(ContainerError::out_of_memory(new_layout.size()));
        }

        self.ptr = unsafe { NonNull::new_unchecked(new_ptr) };
        self.cap = new_cap;
        Ok(())
    }

    /// Run the dispose hook (if any) on the element at `index`, then drop it
    ///
    /// # Safety
    ///
    /// `index` must refer to an initialized slot; the slot is left
    /// logically dead and must be overwritten or shifted over before the
    /// next read.
    unsafe fn retire(&mut self, index: usize) {
        let slot = unsafe { self.ptr.as_ptr().add(index) };
        if let Some(hook) = self.dispose {
            hook(unsafe { &mut *slot });
        }
        unsafe { ptr::drop_in_place(slot) };
    }

    /// Insert an element at `position`, shifting `[position, len)` one slot
    /// toward the tail
    ///
    /// Relative order of all other elements is preserved. O(n) for the
    /// shift, amortized O(1) for growth.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    pub fn insert(&mut self, value: T, position: usize) -> Result<()> {
        assert!(
            position <= self.len,
            "insert position {} out of range for length {}",
            position,
            self.len
        );

        if self.len == self.cap {
            self.grow()?;
        }

        unsafe {
            let slot = self.ptr.as_ptr().add(position);
            ptr::copy(slot, slot.add(1), self.len - position);
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Append an element at the tail
    pub fn push(&mut self, value: T) -> Result<()> {
        self.insert(value, self.len)
    }

    /// Retire the element at `position` and write `value` in its place
    ///
    /// The logical length is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn replace(&mut self, value: T, position: usize) {
        assert!(
            position < self.len,
            "replace position {} out of range for length {}",
            position,
            self.len
        );

        unsafe {
            self.retire(position);
            ptr::write(self.ptr.as_ptr().add(position), value);
        }
    }

    /// Retire the element at `position` and close the gap
    ///
    /// Trailing elements shift one slot toward the head, so relative order
    /// of the survivors is preserved.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    pub fn remove(&mut self, position: usize) {
        assert!(
            position < self.len,
            "remove position {} out of range for length {}",
            position,
            self.len
        );

        unsafe {
            self.retire(position);
            let slot = self.ptr.as_ptr().add(position);
            ptr::copy(slot.add(1), slot, self.len - position - 1);
        }
        self.len -= 1;
    }

    /// Retire every element in index order, leaving the vector empty
    ///
    /// The buffer is kept at its current capacity.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            unsafe {
                self.retire(i);
            }
        }
        self.len = 0;
    }

    /// Sort the full logical range with a three-way comparator
    ///
    /// The sort is comparison-based and unstable.
    pub fn sort_unstable_by<C>(&mut self, cmp: C)
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(cmp);
    }

    /// Visit every element in index order
    ///
    /// The callback may mutate element contents in place. Structural
    /// mutation during traversal is impossible: the vector stays mutably
    /// borrowed for the duration.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        for item in self.as_mut_slice() {
            f(item);
        }
    }

    /// Search `[start_index, len)` for an element comparing equal to `key`
    ///
    /// With `sorted` set, the range is assumed ascending under `cmp` and a
    /// binary search runs in O(log n); otherwise a linear scan runs in
    /// O(n). Either way the result is the smallest matching index, or
    /// `None` when no element compares equal.
    ///
    /// # Panics
    ///
    /// Panics if `start_index >= len()`.
    pub fn search_from<C>(&self, key: &T, cmp: C, start_index: usize, sorted: bool) -> Option<usize>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        assert!(
            start_index < self.len,
            "search start index {} out of range for length {}",
            start_index,
            self.len
        );

        let range = &self.as_slice()[start_index..];
        let found = if sorted {
            match range.binary_search_by(|elem| cmp(elem, key)) {
                Ok(mut pos) => {
                    // binary search lands on an arbitrary match; walk back
                    // to the first one
                    while pos > 0 && cmp(&range[pos - 1], key) == Ordering::Equal {
                        pos -= 1;
                    }
                    Some(pos)
                }
                Err(_) => None,
            }
        } else {
            range.iter().position(|elem| cmp(elem, key) == Ordering::Equal)
        };

        found.map(|pos| start_index + pos)
    }

    /// Search the whole vector, tolerating emptiness
    ///
    /// Same contract as [`search_from`](Self::search_from) with
    /// `start_index = 0`, except an empty vector yields `None` instead of
    /// violating the start-index precondition.
    pub fn search<C>(&self, key: &T, cmp: C, sorted: bool) -> Option<usize>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        if self.len == 0 {
            return None;
        }
        self.search_from(key, cmp, 0, sorted)
    }
}

impl<T> Drop for FlexVec<T> {
    fn drop(&mut self) {
        self.clear();
        unsafe {
            let layout = Layout::array::<T>(self.cap).unwrap();
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}

impl<T> Deref for FlexVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for FlexVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for FlexVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for FlexVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for FlexVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for FlexVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for FlexVec<T> {}

// Safety: FlexVec<T> owns its buffer exclusively; the dispose hook is a
// plain fn pointer
unsafe impl<T: Send> Send for FlexVec<T> {}
unsafe impl<T: Sync> Sync for FlexVec<T> {}
