// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray<T>` owns one contiguous heap allocation of `capacity` slots
//! and tracks how many of them (`len`) hold live values. Operations are split
//! across the submodules below, one file per family; this file holds the type,
//! the cheap accessors, and the trait impls that simply forward to the slice.

mod access;
mod clone;
mod default;
mod erase;
mod extend;
mod from;
mod push;
mod reserve;
mod resize;
mod shrink;
mod slice;

// Crate imports
use crate::raw::RawBuffer;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, contiguous, heap-allocated array.
///
/// `DynamicArray<T>` maintains:
///
/// - a single owned allocation of [`capacity`](Self::capacity) slots (no
///   allocation at all while the capacity is `0`), and
/// - a logical length `len` with `0 <= len <= capacity <= MAX_CAPACITY`.
///
/// Only the prefix `[0, len)` holds initialized values and is visible through
/// slices, indexing, cursors and iteration. The tail `[len, capacity)` is
/// spare room for future growth.
///
/// # Growth and capacity
///
/// - [`push`](Self::push) on a full array grows the capacity to
///   `max(1, 2 * capacity)`, so a run of `n` pushes costs amortized `O(1)`
///   each. From empty the capacity sequence is `1, 2, 4, 8, ...`.
/// - [`reserve`](Self::reserve) takes an **absolute** capacity and is a
///   monotonic floor: it never shrinks and allocates exactly what was asked.
/// - [`resize`](Self::resize) growing past the capacity reserves exactly the
///   new length (no doubling).
/// - Shrinking the length ([`resize`](Self::resize), [`truncate`](Self::truncate),
///   [`erase`](Self::erase), [`clear`](Self::clear)) never releases memory.
///   Only [`shrink_to_fit`](Self::shrink_to_fit) and
///   [`shrink_to`](Self::shrink_to) give capacity back.
///
/// Every reallocation relocates the live elements into the new buffer and
/// releases the old one immediately, which invalidates any raw pointer into
/// the array. Cursors and slices borrow the array, so the compiler rules out
/// holding one across a reallocation.
///
/// # Checked and unchecked access
///
/// - [`at`](Self::at) / [`at_mut`](Self::at_mut) return
///   [`Error::OutOfRange`](crate::Error::OutOfRange) for `pos >= len`.
/// - `array[pos]` panics for `pos >= len`, exactly like slices.
/// - [`get_unchecked`](Self::get_unchecked) performs no validation at all;
///   calling it out of range is undefined behavior.
///
/// # Ownership
///
/// Cloning produces an independent array with the same length, the same
/// capacity and element-wise clones. Moving an array moves the handle only:
/// element addresses are unchanged, and [`core::mem::take`] leaves the
/// source empty.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::DynamicArray;
///
/// let mut v = DynamicArray::new();
/// v.push(30);
/// v.push(10);
/// assert_eq!(v.capacity(), 2);
/// v.reserve(10).unwrap();
/// assert_eq!((v.len(), v.capacity()), (2, 10));
/// assert_eq!(v.at(1), Ok(&10));
/// assert!(v.at(2).is_err());
/// ```
pub struct DynamicArray<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// The largest length or capacity any `DynamicArray<T>` can have.
    ///
    /// This is the largest element count whose allocation still fits in
    /// `isize::MAX` bytes, or `usize::MAX` for zero-sized `T`.
    pub const MAX_CAPACITY: usize = RawBuffer::<T>::MAX_CAPACITY;

    /// Constructs an empty array. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Constructs an empty array with exactly `capacity` slots allocated.
    ///
    /// # Panics
    ///
    /// Panics if `capacity > MAX_CAPACITY`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns [`MAX_CAPACITY`](Self::MAX_CAPACITY).
    #[inline]
    pub const fn max_capacity(&self) -> usize {
        Self::MAX_CAPACITY
    }

    /// Returns `capacity - len`, the number of pushes that will not reallocate.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len);
        // SAFETY: `[0, len)` holds initialized values owned by `self`.
        // The allocation itself is released by `RawBuffer`'s destructor.
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Equality and ordering look at the live elements only; capacity is ignored.
impl<T: PartialEq<U>, U> PartialEq<DynamicArray<U>> for DynamicArray<T> {
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq<U>, U> PartialEq<[U]> for DynamicArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U> PartialEq<&[U]> for DynamicArray<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq> Eq for DynamicArray<T> {}
impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    // Imports
    use super::DynamicArray;
    use crate::Error;
    use alloc::{format, rc::Rc, vec::Vec};
    use core::cell::Cell;

    /// The four-element array every behavioral test starts from.
    pub(crate) fn seeded() -> DynamicArray<i32> {
        let mut v = DynamicArray::new();
        v.push(30);
        v.push(10432042);
        v.push(-4325325);
        v.push(0);
        v
    }

    /// Counts how many times values carrying the same counter are dropped.
    pub(crate) struct DropCounter(pub(crate) Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_access_returns_values_in_push_order() {
        let v = seeded();
        assert_eq!(v[0], 30);
        assert_eq!(v[1], 10432042);
        assert_eq!(v[2], -4325325);
        assert_eq!(v[3], 0);
    }

    #[test]
    fn test_four_pushes_fill_capacity_four() {
        let v = seeded();
        assert_eq!(v.len(), 4);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_fifth_push_doubles_capacity() {
        let mut v = seeded();
        v.push(1430254);
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v, [30, 10432042, -4325325, 0, 1430254]);
    }

    #[test]
    fn test_reserve_ten_keeps_size() {
        let mut v = seeded();
        v.reserve(10).unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v, [30, 10432042, -4325325, 0]);
    }

    #[test]
    fn test_resize_ten_grows_size_and_capacity() {
        let mut v = seeded();
        v.resize(10).unwrap();
        assert_eq!(v.len(), 10);
        assert_eq!(v.capacity(), 10);
        assert_eq!(&v[..4], &[30, 10432042, -4325325, 0]);
        assert!(v[4..].iter().all(|&x| x == 0));
    }

    #[test]
    fn test_reserve_zero_is_noop() {
        let mut v = seeded();
        v.reserve(0).unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_resize_zero_keeps_capacity() {
        let mut v = seeded();
        v.resize(0).unwrap();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_shrink_to_fit_after_resize_zero_releases() {
        let mut v = seeded();
        v.resize(0).unwrap();
        v.shrink_to_fit();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_erase_front_then_push() {
        let mut v = seeded();
        let c = v.erase(0).unwrap();
        assert_eq!(*c, 10432042);
        assert_eq!(v, [10432042, -4325325, 0]);
        assert_eq!(v.capacity(), 4);
        v.push(1024);
        assert_eq!(v, [10432042, -4325325, 0, 1024]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_at_out_of_range_after_mutation_and_when_empty() {
        let mut v = seeded();
        assert_eq!(v.at(4), Err(Error::OutOfRange));
        v.resize(2).unwrap();
        assert_eq!(v.at(2), Err(Error::OutOfRange));
        assert_eq!(v.at(1), Ok(&10432042));

        let empty: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(empty.at(0), Err(Error::OutOfRange));
    }

    #[test]
    fn test_new_is_empty_and_unallocated() {
        let v: DynamicArray<u64> = DynamicArray::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert_eq!(v.spare_capacity(), 0);
        assert_eq!(v.begin(), v.end());
    }

    #[test]
    fn test_with_capacity_is_exact_and_empty() {
        let v: DynamicArray<u8> = DynamicArray::with_capacity(5);
        assert_eq!(v.capacity(), 5);
        assert!(v.is_empty());
        assert_eq!(v.spare_capacity(), 5);
    }

    #[test]
    fn test_max_capacity_bounds_allocation_size() {
        assert_eq!(DynamicArray::<u8>::MAX_CAPACITY, isize::MAX as usize);
        assert_eq!(DynamicArray::<u32>::MAX_CAPACITY, isize::MAX as usize / 4);
        assert_eq!(DynamicArray::<()>::MAX_CAPACITY, usize::MAX);
        let v: DynamicArray<u64> = DynamicArray::new();
        assert_eq!(v.max_capacity(), DynamicArray::<u64>::MAX_CAPACITY);
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let a = seeded();
        let mut b = seeded();
        b.reserve(64).unwrap();
        assert_eq!(a, b);
        b.push(1);
        assert_ne!(a, b);
        b.resize(4).unwrap();
        assert_eq!(a, b);
        b[3] = 9;
        assert_ne!(a, b);
    }

    #[test]
    fn test_ord_and_hash_follow_slice() {
        use core::cmp::Ordering;
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let a: DynamicArray<i32> = [1, 2, 3].into();
        let b: DynamicArray<i32> = [1, 2, 4].into();
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        [1, 2, 3][..].hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_debug_shows_len_capacity_and_elements() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(5);
        v.push(1);
        v.push(2);
        let dbg = format!("{v:?}");
        assert!(dbg.contains("DynamicArray"));
        assert!(dbg.contains("len: 2"));
        assert!(dbg.contains("capacity: 5"));
        assert!(dbg.contains("[1, 2]"));
    }

    #[test]
    fn test_deref_as_ref_and_borrow() {
        use core::borrow::{Borrow, BorrowMut};

        let mut v = seeded();
        let s: &[i32] = &v;
        assert_eq!(s.len(), 4);
        assert_eq!(v.first(), Some(&30));
        assert_eq!(v.last(), Some(&0));
        assert!(v.contains(&-4325325));

        let b: &[i32] = Borrow::<[i32]>::borrow(&v);
        assert_eq!(b, v.as_slice());
        BorrowMut::<[i32]>::borrow_mut(&mut v)[3] = 7;
        v.as_mut()[0] = 31;
        assert_eq!(v.as_ref(), &[31, 10432042, -4325325, 7]);
    }

    #[test]
    fn test_iter_and_iter_mut() {
        let mut v = seeded();
        let collected: Vec<_> = v.iter().copied().collect();
        assert_eq!(collected, [30, 10432042, -4325325, 0]);
        for x in v.iter_mut() {
            *x = x.wrapping_mul(2);
        }
        assert_eq!(v[0], 60);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_drop_releases_every_live_element_once() {
        let counter = Rc::new(Cell::new(0));
        {
            let mut v = DynamicArray::new();
            for _ in 0..10 {
                v.push(DropCounter(counter.clone()));
            }
            assert_eq!(counter.get(), 0);
        }
        assert_eq!(counter.get(), 10);
    }

    #[test]
    fn test_move_keeps_element_addresses() {
        let v = seeded();
        let before: Vec<*const i32> = v.iter().map(|x| x as *const i32).collect();
        let moved = v;
        let after: Vec<*const i32> = moved.iter().map(|x| x as *const i32).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_take_transfers_storage_and_empties_source() {
        let mut v = seeded();
        let ptr = v.as_ptr();
        let capacity = v.capacity();
        let taken = core::mem::take(&mut v);
        assert_eq!(taken.as_ptr(), ptr);
        assert_eq!(taken.capacity(), capacity);
        assert_eq!(taken, [30, 10432042, -4325325, 0]);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_move_assignment_releases_destination() {
        let counter = Rc::new(Cell::new(0));
        let mut dst = DynamicArray::new();
        dst.push(DropCounter(counter.clone()));
        dst.push(DropCounter(counter.clone()));

        let mut src = DynamicArray::new();
        src.push(DropCounter(counter.clone()));
        let src_ptr = src.as_ptr();

        dst = core::mem::take(&mut src);
        // The destination's two prior elements are gone, the moved one is not.
        assert_eq!(counter.get(), 2);
        assert_eq!(dst.len(), 1);
        assert_eq!(dst.as_ptr(), src_ptr);
        assert!(src.is_empty());
        drop(dst);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut v: DynamicArray<()> = DynamicArray::new();
        for _ in 0..5 {
            v.push(());
        }
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 8);
        v.erase(1).unwrap();
        assert_eq!(v.len(), 4);
        v.shrink_to_fit();
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.pop(), Some(()));
    }

    #[test]
    fn test_send_and_sync_follow_element_type() {
        fn assert_send_sync<X: Send + Sync>() {}
        assert_send_sync::<DynamicArray<i32>>();
        assert_send_sync::<DynamicArray<alloc::string::String>>();
    }
}

#[cfg(test)]
mod proptests {
    // Imports
    use super::DynamicArray;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    const MAX_LEN: usize = 200;

    proptest! {
        /// Element `i` after `n` pushes is the `i`-th pushed value.
        #[test]
        fn push_preserves_order(values in prop::collection::vec(any::<i32>(), 0..MAX_LEN)) {
            let mut v = DynamicArray::new();
            for &x in &values {
                v.push(x);
            }
            prop_assert_eq!(v.len(), values.len());
            for (i, &x) in values.iter().enumerate() {
                prop_assert_eq!(v[i], x);
            }
        }

        /// From empty, capacity is the smallest power of two holding `len`.
        #[test]
        fn push_capacity_doubles(n in 0..MAX_LEN) {
            let mut v = DynamicArray::new();
            for i in 0..n {
                v.push(i);
                prop_assert!(v.len() <= v.capacity());
            }
            let expected = if n == 0 { 0 } else { n.next_power_of_two() };
            prop_assert_eq!(v.capacity(), expected);
        }

        /// `reserve` is a monotonic floor that never touches len or elements.
        #[test]
        fn reserve_is_monotonic_floor(
            values in prop::collection::vec(any::<u16>(), 0..64),
            request in 0usize..256,
        ) {
            let mut v: DynamicArray<u16> = values.iter().copied().collect();
            let before_cap = v.capacity();
            v.reserve(request).unwrap();
            prop_assert_eq!(v.capacity(), before_cap.max(request));
            prop_assert_eq!(v.as_slice(), values.as_slice());
        }

        /// `resize` keeps the common prefix, default-fills growth, and only
        /// reallocates (exactly) when the new length exceeds the capacity.
        #[test]
        fn resize_keeps_prefix(
            values in prop::collection::vec(any::<i64>(), 0..64),
            new_len in 0usize..128,
        ) {
            let mut v: DynamicArray<i64> = values.iter().copied().collect();
            let before_cap = v.capacity();
            v.resize(new_len).unwrap();
            prop_assert_eq!(v.len(), new_len);
            prop_assert_eq!(v.capacity(), before_cap.max(new_len));
            let keep = new_len.min(values.len());
            prop_assert_eq!(&v[..keep], &values[..keep]);
            prop_assert!(v[keep..].iter().all(|&x| x == 0));
        }

        /// `erase(i)` behaves like `Vec::remove(i)` and leaves capacity alone.
        #[test]
        fn erase_matches_vec_remove(
            values in prop::collection::vec(any::<i32>(), 1..64),
            pick in any::<prop::sample::Index>(),
        ) {
            let i = pick.index(values.len());
            let mut v: DynamicArray<i32> = values.iter().copied().collect();
            let cap = v.capacity();
            let mut expected: Vec<i32> = values.clone();
            expected.remove(i);

            let next = v.erase(i).unwrap();
            prop_assert_eq!(next.position(), i);
            prop_assert_eq!(v.as_slice(), expected.as_slice());
            prop_assert_eq!(v.capacity(), cap);
        }

        /// Mutating a clone never shows up in the original.
        #[test]
        fn clone_is_independent(values in prop::collection::vec(any::<i32>(), 1..64)) {
            let original: DynamicArray<i32> = values.iter().copied().collect();
            let mut copy = original.clone();
            prop_assert_eq!(&copy, &original);
            prop_assert_eq!(copy.capacity(), original.capacity());
            copy[0] = copy[0].wrapping_add(1);
            copy.push(7);
            prop_assert_eq!(original.as_slice(), values.as_slice());
        }
    }
}
