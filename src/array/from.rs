// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::DynamicArray;

// Alloc imports
use alloc::vec::Vec;

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(src: &[T]) -> Self {
        let mut v = Self::with_capacity(src.len());
        v.extend_from_slice(src);
        v
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        v.extend(src);
        v
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for DynamicArray<T> {
    fn from(src: &[T; N]) -> Self {
        Self::from(&src[..])
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(src: Vec<T>) -> Self {
        let mut v = Self::with_capacity(src.len());
        v.extend(src);
        v
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(src: DynamicArray<T>) -> Self {
        src.into_vec()
    }
}

impl<T> DynamicArray<T> {
    /// Moves every element, in order, into a new `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}
