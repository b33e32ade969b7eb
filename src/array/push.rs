// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error, raw::capacity_overflow};

impl<T> DynamicArray<T> {
    /// Appends `value` as the new last element.
    ///
    /// If the array is full, the capacity first grows to
    /// `max(1, 2 * capacity)`.
    ///
    /// # Panics
    ///
    /// Panics if the array is already at [`MAX_CAPACITY`](Self::MAX_CAPACITY).
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.capacity() {
            self.grow();
        }

        // SAFETY: `len < capacity` after the check above, so the slot is
        // allocated and currently holds no live value.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// The capacity is left unchanged.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: before the decrement `[0, len + 1)` was initialized, so
            // the old last slot still holds a value we now own.
            Some(unsafe { self.buf.ptr().add(self.len).read() })
        }
    }

    #[cold]
    fn grow(&mut self) {
        let Some(new_cap) = self.buf.next_capacity() else {
            capacity_overflow(Error::LengthExceeded);
        };
        if let Err(e) = self.buf.reallocate(new_cap) {
            capacity_overflow(e);
        }
    }
}
