// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error};

// Core imports
use core::ptr;

impl<T> DynamicArray<T> {
    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// - Shrinking drops the trailing elements; capacity is unchanged.
    /// - Growing past the capacity first reserves exactly `new_len` slots
    ///   (no doubling).
    /// - `new_len == len()` is a no-op.
    ///
    /// Returns [`Error::LengthExceeded`] if `new_len > MAX_CAPACITY`; the
    /// array is left unchanged.
    #[inline]
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Like [`resize`](Self::resize), but new slots are produced by `f`.
    ///
    /// `f` is called once per new slot, in order.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) -> Result<(), Error> {
        if new_len > Self::MAX_CAPACITY {
            log::debug!(
                "resize({new_len}) rejected: max capacity is {}",
                Self::MAX_CAPACITY
            );
            return Err(Error::LengthExceeded);
        }
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > self.buf.capacity() {
            self.buf.reallocate(new_len)?;
        }

        let base = self.buf.ptr();
        while self.len < new_len {
            // SAFETY: `len < new_len <= capacity`, so the slot is allocated and free.
            unsafe { base.add(self.len).write(f()) };
            self.len += 1;
        }
        Ok(())
    }

    /// Shortens the array to `new_len`, dropping the trailing elements.
    ///
    /// No-op if `new_len >= len()`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        // SAFETY: `new_len < len`, so the tail lies within the live prefix.
        let tail = unsafe {
            ptr::slice_from_raw_parts_mut(self.buf.ptr().add(new_len), self.len - new_len)
        };
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: the tail was initialized and is no longer reachable via `len`.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}
