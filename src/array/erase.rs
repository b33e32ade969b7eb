// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    array::{access::out_of_range, DynamicArray},
    cursor::CursorMut,
    error::Error,
};

impl<T> DynamicArray<T> {
    /// Removes and drops the element at `pos`, shifting everything after it
    /// one slot to the left.
    ///
    /// Returns a cursor addressing the element that now occupies `pos`, which
    /// is the end position if the last element was removed. The relative
    /// order of the remaining elements is preserved and the capacity is
    /// unchanged. `O(len - pos)`.
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= len()`; the array is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut v: DynamicArray<i32> = [1, 2, 3].into();
    /// let next = v.erase(1).unwrap();
    /// assert_eq!(*next, 3);
    /// assert_eq!(v, [1, 3]);
    /// ```
    pub fn erase(&mut self, pos: usize) -> Result<CursorMut<'_, T>, Error> {
        drop(self.remove(pos)?);
        Ok(CursorMut::new(self, pos))
    }

    /// Removes and returns the element at `pos`, shifting everything after it
    /// one slot to the left.
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= len()`; the array is left
    /// unchanged.
    pub fn remove(&mut self, pos: usize) -> Result<T, Error> {
        let len = self.len;
        if pos >= len {
            return Err(out_of_range(pos, len));
        }

        // SAFETY: `pos < len`, so the slot is live; we take ownership of it.
        let out = unsafe { self.buf.ptr().add(pos).read() };
        // SAFETY: `pos + 1 >= 1` and `(pos + 1) + (len - pos - 1) == len <= capacity`.
        unsafe { self.buf.shift_left(pos + 1, len - pos - 1) };
        self.len = len - 1;
        Ok(out)
    }
}
