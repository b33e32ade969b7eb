// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, raw::capacity_overflow};

impl<T> DynamicArray<T> {
    /// Reduces the capacity to exactly `len()`.
    ///
    /// An empty array gives its allocation back entirely. No-op when there is
    /// no spare capacity. Never changes the length or any element.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.shrink_to(self.len);
    }

    /// Reduces the capacity to `max(len(), min_capacity)`.
    ///
    /// No-op if the capacity is already at or below that bound.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        let target = self.len.max(min_capacity);
        if target >= self.buf.capacity() {
            return;
        }
        // A shrink never exceeds MAX_CAPACITY, so this cannot fail.
        if let Err(e) = self.buf.reallocate(target) {
            capacity_overflow(e);
        }
    }
}
