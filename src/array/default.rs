// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::DynamicArray;

impl<T> Default for DynamicArray<T> {
    /// An empty, unallocated array; what a moved-from array is left as by
    /// [`core::mem::take`].
    fn default() -> Self {
        Self::new()
    }
}
