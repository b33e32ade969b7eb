// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynamicArray`](crate::DynamicArray).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with it, and the buffer is released afterwards.
//! - `&DynamicArray` and `&mut DynamicArray` iterate as slices.

// Crate imports
use crate::{array::DynamicArray, raw::RawBuffer};

// Core imports
use core::{fmt, iter::FusedIterator, mem, ptr};

/// Owned iterator returned by `DynamicArray::into_iter()`.
///
/// Owns the array's former allocation; the slots in `[front, back)` are the
/// ones not yet yielded.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded, front to back.
    pub fn as_slice(&self) -> &[T] {
        let rem = self.back - self.front;
        // SAFETY: `[front, back)` is initialized and still owned by `self`.
        unsafe { core::slice::from_raw_parts(self.buf.ptr().add(self.front), rem) }
    }

    /// Drops the `n` slots starting at `from`. The caller has already moved
    /// `front`/`back` past them.
    ///
    /// # Safety
    ///
    /// The slots must be initialized and no longer reachable through
    /// `[front, back)`.
    unsafe fn drop_range(&mut self, from: usize, n: usize) {
        // SAFETY: per the caller's contract.
        unsafe {
            let doomed = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(from), n);
            ptr::drop_in_place(doomed);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside `[front, back)`; ownership moves out.
            Some(unsafe { self.buf.ptr().add(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        let from = self.front;
        self.front += skip;
        // SAFETY: the skipped slots were live and are now outside the window.
        unsafe { self.drop_range(from, skip) };
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` was the last slot of `[front, back)`.
            Some(unsafe { self.buf.ptr().add(self.back).read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        self.back -= skip;
        // SAFETY: as in `nth`.
        unsafe { self.drop_range(self.back, skip) };
        self.next_back()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (from, n) = (self.front, self.back - self.front);
        self.front = self.back;
        // SAFETY: the remaining window is live; the buffer frees itself next.
        unsafe { self.drop_range(from, n) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        // Leave `self` empty and unallocated so its destructor is a no-op.
        let back = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: self.buf.take(),
            front: 0,
            back,
        }
    }
}
