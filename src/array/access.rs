// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::DynamicArray, error::Error};

impl<T> DynamicArray<T> {
    /// Bounds-checked access to the element at `pos`.
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= len()`.
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(pos)
            .ok_or_else(|| out_of_range(pos, len))
    }

    /// Bounds-checked mutable access to the element at `pos`.
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= len()`.
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(pos)
            .ok_or_else(|| out_of_range(pos, len))
    }

    /// Returns a reference to the element at `pos` without any bounds check.
    ///
    /// # Safety
    ///
    /// `pos < len()`. Calling this with an out-of-range position is
    /// undefined behavior even if the slot is allocated.
    #[inline]
    pub unsafe fn get_unchecked(&self, pos: usize) -> &T {
        debug_assert!(pos < self.len);
        // SAFETY: the caller guarantees `pos < len`, so the slot is live.
        unsafe { &*self.buf.ptr().add(pos) }
    }

    /// Returns a mutable reference to the element at `pos` without any bounds check.
    ///
    /// # Safety
    ///
    /// `pos < len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, pos: usize) -> &mut T {
        debug_assert!(pos < self.len);
        // SAFETY: the caller guarantees `pos < len`, and `&mut self` makes
        // the access exclusive.
        unsafe { &mut *self.buf.ptr().add(pos) }
    }
}

#[cold]
pub(crate) fn out_of_range(pos: usize, len: usize) -> Error {
    log::debug!("position {pos} rejected: length is {len}");
    Error::OutOfRange
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::array::{tests::seeded, DynamicArray};
    use crate::Error;

    #[test]
    fn test_at_in_range() {
        let v = seeded();
        assert_eq!(v.at(0), Ok(&30));
        assert_eq!(v.at(3), Ok(&0));
    }

    #[test]
    fn test_at_mut_writes_through() {
        let mut v = seeded();
        *v.at_mut(2).unwrap() = 99;
        assert_eq!(v[2], 99);
        assert_eq!(v.at_mut(4), Err(Error::OutOfRange));
    }

    #[test]
    fn test_at_ignores_spare_capacity() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(8);
        v.push(1);
        assert_eq!(v.at(1), Err(Error::OutOfRange));
        assert_eq!(v.at(7), Err(Error::OutOfRange));
    }

    #[test]
    fn test_get_unchecked_in_range() {
        let mut v = seeded();
        // SAFETY: 1 and 3 are below len == 4.
        unsafe {
            assert_eq!(*v.get_unchecked(1), 10432042);
            *v.get_unchecked_mut(3) = 8;
        }
        assert_eq!(v[3], 8);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_range_panics() {
        let v = seeded();
        let _ = v[4];
    }
}
