// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynamicArray`](crate::DynamicArray).
//!
//! `Index` and `IndexMut` forward to the live slice, so they mirror slice
//! behavior:
//! - panic on out-of-bounds;
//! - support every standard range form, including inclusive ranges;
//! - never reach the spare capacity `[len, capacity)`.
//!
//! For a non-panicking lookup use [`DynamicArray::at`](crate::DynamicArray::at).

// Crate imports
use crate::array::DynamicArray;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;
    #[inline]
    #[track_caller]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
