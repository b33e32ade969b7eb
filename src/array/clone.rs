// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::DynamicArray;

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep copy: same length, same capacity, element-wise clones in a new buffer.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        out.extend_from_slice(self.as_slice());
        out
    }

    /// Copy assignment: releases the current buffer, then allocates one
    /// matching `source`'s capacity and clones its elements into it.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        drop(self.buf.take());
        *self = source.clone();
    }
}
