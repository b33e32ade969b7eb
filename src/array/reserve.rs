// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error};

impl<T> DynamicArray<T> {
    /// Ensures `capacity() >= new_capacity`.
    ///
    /// Unlike `Vec::reserve`, the argument is the **total** capacity wanted,
    /// not an additional amount.
    ///
    /// - If `new_capacity <= capacity()`, nothing happens.
    /// - Otherwise a buffer of exactly `new_capacity` slots replaces the
    ///   current one; the live elements move over in order and the length is
    ///   unchanged.
    ///
    /// Returns [`Error::LengthExceeded`] if `new_capacity > MAX_CAPACITY`, in
    /// which case the array is left unchanged.
    #[inline]
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity > Self::MAX_CAPACITY {
            log::debug!(
                "reserve({new_capacity}) rejected: max capacity is {}",
                Self::MAX_CAPACITY
            );
            return Err(Error::LengthExceeded);
        }
        if new_capacity <= self.buf.capacity() {
            return Ok(());
        }
        self.buf.reallocate(new_capacity)
    }
}
