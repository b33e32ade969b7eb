// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dynamic-array`
//!
//! A `no_std` + `alloc`, growable, heap-backed array with explicit control
//! over capacity.
//!
//! The core type, [`DynamicArray<T>`], owns one contiguous allocation of
//! `capacity` slots and tracks a logical length `len ∈ 0..=capacity`. It
//! behaves much like `Vec<T>`, but its capacity rules are fixed and
//! documented rather than left unspecified:
//!
//! - a push into a full array grows the capacity to `max(1, 2 * capacity)`;
//! - [`DynamicArray::reserve`] takes an **absolute** capacity, allocates
//!   exactly that much, and never shrinks;
//! - [`DynamicArray::resize`] growing past the capacity reserves exactly the
//!   new length, and shrinking the length never releases memory;
//! - only [`DynamicArray::shrink_to_fit`] gives capacity back.
//!
//! ## Errors and panics
//!
//! Fallible operations return [`Error`] and leave the array unchanged:
//!
//! - [`Error::OutOfRange`]: [`DynamicArray::at`] / [`DynamicArray::erase`]
//!   with `pos >= len`.
//! - [`Error::LengthExceeded`]: [`DynamicArray::reserve`] /
//!   [`DynamicArray::resize`] beyond [`DynamicArray::MAX_CAPACITY`].
//!
//! Indexing (`v[i]`, `v[a..b]`) follows slice semantics and **panics** when
//! out of range. [`DynamicArray::get_unchecked`] skips the check entirely and
//! is `unsafe`.
//!
//! ## Cursors
//!
//! [`Cursor`] and [`CursorMut`] are random-access positions in `[0, len]`
//! with pointer-like arithmetic, comparison and dereference. They borrow
//! the array, so a cursor can never observe a reallocation or a shift.
//! [`DynamicArray::erase`] returns a [`CursorMut`] to the element that
//! followed the erased one.
//!
//! ## Logging
//!
//! Reallocations are reported through the [`log`](https://docs.rs/log)
//! facade at `trace` level, rejected requests at `debug`. The crate never
//! installs a logger.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `DynamicArray<T>` as a plain
//!   sequence.
//!
//! ## Example
//!
//! ```rust
//! use dynamic_array::{DynamicArray, Error};
//!
//! let mut v = DynamicArray::new();
//! v.push(2);
//! v.push(3);
//! v.push(6);
//! assert_eq!(v.capacity(), 4);
//! assert_eq!(v.at(2), Ok(&6));
//!
//! let next = v.erase(0).unwrap();
//! assert_eq!(*next, 3);
//! assert_eq!(v, [3, 6]);
//!
//! v.resize(1).unwrap();
//! assert_eq!(v.capacity(), 4);
//! assert_eq!(v.at(1), Err(Error::OutOfRange));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod array;
mod cursor;
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use array::DynamicArray;
pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use iter::IntoIter;
