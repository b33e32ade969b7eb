// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error, raw::capacity_overflow};

impl<T> DynamicArray<T> {
    /// Makes room for `lower` more elements before pushing.
    ///
    /// Growth follows the push rule: the new capacity is at least double the
    /// old one, so a run of small extends stays amortized `O(1)` per element.
    fn reserve_for_hint(&mut self, lower: usize) {
        let needed = self.len.saturating_add(lower);
        if needed <= self.buf.capacity() {
            return;
        }
        let target = match self.buf.next_capacity() {
            Some(doubled) => needed.max(doubled),
            None => needed,
        };
        if self.reserve(target).is_err() {
            capacity_overflow(Error::LengthExceeded);
        }
    }

    /// Appends clones of every element of `src`, in order.
    ///
    /// # Panics
    ///
    /// Panics if the resulting length would exceed
    /// [`MAX_CAPACITY`](Self::MAX_CAPACITY).
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        self.reserve_for_hint(src.len());
        for item in src {
            self.push(item.clone());
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_for_hint(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    /// Collects every item; the capacity starts at the iterator's lower size
    /// bound and doubles from there as needed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
