// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::DynamicArray;

impl<T> DynamicArray<T> {
    /// Returns the live prefix `[0, len)` as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized and the pointer is non-null and
        // aligned even when nothing is allocated.
        unsafe { core::slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// Returns the live prefix `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above; `&mut self` makes the borrow exclusive.
        unsafe { core::slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the buffer.
    ///
    /// The pointer is dangling (but non-null and aligned) while the capacity
    /// is `0`. Only the first `len` slots may be read as `T`. Any
    /// reallocation (growth past the capacity, `reserve`, exact `resize`
    /// growth, `shrink_to_fit`) invalidates it; moving the array does not.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns a mutable raw pointer to the start of the buffer.
    ///
    /// Same validity rules as [`as_ptr`](Self::as_ptr). Writing beyond `len`
    /// does not change the logical contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::array::tests::seeded;

    #[test]
    fn test_as_ptr_matches_slice() {
        let mut v = seeded();
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
        let p = v.as_mut_ptr();
        assert_eq!(p, v.as_mut_slice().as_mut_ptr());
        v.as_mut_slice()[1] = 21;
        assert_eq!(v[1], 21);
    }

    #[test]
    fn test_empty_pointer_is_aligned() {
        let v: crate::array::DynamicArray<u64> = crate::array::DynamicArray::new();
        assert!(!v.as_ptr().is_null());
        assert_eq!(v.as_ptr() as usize % core::mem::align_of::<u64>(), 0);
        assert!(v.as_slice().is_empty());
    }
}
