// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random-access positions into a [`DynamicArray`].
//!
//! - [`Cursor`] is a read-only, `Copy` position over the live slice.
//! - [`CursorMut`] holds the array exclusively and can write through, or
//!   erase at, its position.
//!
//! A cursor's position is always in `[0, len]`, where `len` is the end
//! position. Moving outside that range panics, and so does dereferencing
//! the end position; use [`Cursor::get`] for a non-panicking read.
//!
//! Cursors borrow the array, so the array cannot reallocate, shift, or move
//! while one is alive.

// Crate imports
use crate::{array::DynamicArray, error::Error};

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign},
};

#[cold]
#[track_caller]
fn out_of_bounds() -> ! {
    panic!("cursor moved out of bounds")
}

#[cold]
#[track_caller]
fn deref_end() -> ! {
    panic!("cursor dereferenced at end")
}

#[cold]
#[track_caller]
fn distance_overflow() -> ! {
    panic!("cursor distance overflows isize")
}

/// `pos + n`, panicking unless the result lies in `[0, len]`.
#[inline]
#[track_caller]
fn offset(pos: usize, len: usize, n: isize) -> usize {
    match pos.checked_add_signed(n) {
        Some(p) if p <= len => p,
        _ => out_of_bounds(),
    }
}

/// `pos + n`, panicking unless the result addresses a live element.
#[inline]
#[track_caller]
fn element(pos: usize, len: usize, n: isize) -> usize {
    match pos.checked_add_signed(n) {
        Some(p) if p < len => p,
        _ => out_of_bounds(),
    }
}

/// A read-only position in a [`DynamicArray`].
///
/// Two cursors are equal when they address the same slot of the same array;
/// ordering compares the array's base address first and the position second.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::DynamicArray;
///
/// let v: DynamicArray<i32> = [2, 3, 6].into();
/// let mut c = v.begin();
/// assert_eq!(*c, 2);
/// c += 2;
/// assert_eq!(*c, 6);
/// assert_eq!(c[-1], 3);
/// c.move_next();
/// assert_eq!(c, v.end());
/// assert_eq!(v.end() - v.begin(), 3);
/// ```
pub struct Cursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(slice: &'a [T], pos: usize) -> Self {
        debug_assert!(pos <= slice.len());
        Self { slice, pos }
    }

    /// The index this cursor addresses; `len` at the end position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` at the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos == self.slice.len()
    }

    /// Returns the addressed element, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.slice.get(self.pos)
    }

    /// The elements from this position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        &self.slice[self.pos..]
    }

    /// Advances by one (pre-increment).
    #[inline]
    #[track_caller]
    pub fn move_next(&mut self) {
        self.pos = offset(self.pos, self.slice.len(), 1);
    }

    /// Steps back by one (pre-decrement).
    #[inline]
    #[track_caller]
    pub fn move_prev(&mut self) {
        self.pos = offset(self.pos, self.slice.len(), -1);
    }

    /// Advances by one and returns the cursor as it was (post-increment).
    #[inline]
    #[track_caller]
    pub fn post_next(&mut self) -> Self {
        let prev = *self;
        self.move_next();
        prev
    }

    /// Steps back by one and returns the cursor as it was (post-decrement).
    #[inline]
    #[track_caller]
    pub fn post_prev(&mut self) -> Self {
        let prev = *self;
        self.move_prev();
        prev
    }

    #[inline]
    fn addr(&self) -> usize {
        self.slice.as_ptr() as usize
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;
    #[track_caller]
    fn deref(&self) -> &T {
        match self.slice.get(self.pos) {
            Some(x) => x,
            None => deref_end(),
        }
    }
}

impl<T> Index<isize> for Cursor<'_, T> {
    type Output = T;
    #[track_caller]
    fn index(&self, n: isize) -> &T {
        &self.slice[element(self.pos, self.slice.len(), n)]
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;
    #[track_caller]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}
impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;
    #[track_caller]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}
impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[track_caller]
    fn add_assign(&mut self, n: isize) {
        self.pos = offset(self.pos, self.slice.len(), n);
    }
}
impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[track_caller]
    fn sub_assign(&mut self, n: isize) {
        match n.checked_neg() {
            Some(m) => *self += m,
            None => out_of_bounds(),
        }
    }
}

impl<'a, T> Sub<Cursor<'a, T>> for Cursor<'a, T> {
    type Output = isize;
    /// Signed distance in elements; both cursors must come from one array.
    ///
    /// # Panics
    ///
    /// Panics if the distance does not fit in `isize`. Only arrays of
    /// zero-sized elements can be that long.
    #[track_caller]
    fn sub(self, rhs: Self) -> isize {
        debug_assert_eq!(self.addr(), rhs.addr(), "cursors from different arrays");
        let distance = if self.pos >= rhs.pos {
            isize::try_from(self.pos - rhs.pos)
        } else {
            isize::try_from(rhs.pos - self.pos).map(|d| -d)
        };
        match distance {
            Ok(d) => d,
            Err(_) => distance_overflow(),
        }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        (self.addr(), self.pos) == (other.addr(), other.pos)
    }
}
impl<T> Eq for Cursor<'_, T> {}
impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.addr(), self.pos).cmp(&(other.addr(), other.pos))
    }
}
impl<T> Hash for Cursor<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.addr(), self.pos).hash(state)
    }
}

/// A position in a [`DynamicArray`] with exclusive access to it.
///
/// Returned by [`DynamicArray::begin_mut`], [`DynamicArray::end_mut`] and
/// [`DynamicArray::erase`]. Converts into a read-only [`Cursor`] with
/// [`From`], or temporarily with [`as_cursor`](Self::as_cursor).
pub struct CursorMut<'a, T> {
    array: &'a mut DynamicArray<T>,
    pos: usize,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(array: &'a mut DynamicArray<T>, pos: usize) -> Self {
        debug_assert!(pos <= array.len());
        Self { array, pos }
    }

    /// The index this cursor addresses; `len` at the end position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos == self.array.len()
    }

    /// Returns the addressed element, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.array.as_slice().get(self.pos)
    }

    /// Returns the addressed element mutably, or `None` at the end position.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.array.as_mut_slice().get_mut(self.pos)
    }

    /// Consumes the cursor, returning the addressed element for the rest of
    /// the borrow, or `None` at the end position.
    #[inline]
    pub fn into_mut(self) -> Option<&'a mut T> {
        let Self { array, pos } = self;
        array.as_mut_slice().get_mut(pos)
    }

    /// A read-only view of this position, borrowing the cursor.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.array.as_slice(), self.pos)
    }

    /// Advances by one.
    #[inline]
    #[track_caller]
    pub fn move_next(&mut self) {
        self.pos = offset(self.pos, self.array.len(), 1);
    }

    /// Steps back by one.
    #[inline]
    #[track_caller]
    pub fn move_prev(&mut self) {
        self.pos = offset(self.pos, self.array.len(), -1);
    }

    /// Erases the addressed element and returns a cursor to its successor.
    ///
    /// See [`DynamicArray::erase`]. Returns [`Error::OutOfRange`] at the end
    /// position.
    pub fn erase(self) -> Result<CursorMut<'a, T>, Error> {
        let Self { array, pos } = self;
        array.erase(pos)
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("pos", &self.pos)
            .field("len", &self.array.len())
            .finish()
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(c: CursorMut<'a, T>) -> Self {
        let CursorMut { array, pos } = c;
        let array: &'a DynamicArray<T> = array;
        Cursor::new(array.as_slice(), pos)
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;
    #[track_caller]
    fn deref(&self) -> &T {
        match self.array.as_slice().get(self.pos) {
            Some(x) => x,
            None => deref_end(),
        }
    }
}
impl<T> DerefMut for CursorMut<'_, T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        let pos = self.pos;
        match self.array.as_mut_slice().get_mut(pos) {
            Some(x) => x,
            None => deref_end(),
        }
    }
}

impl<T> Index<isize> for CursorMut<'_, T> {
    type Output = T;
    #[track_caller]
    fn index(&self, n: isize) -> &T {
        &self.array[element(self.pos, self.array.len(), n)]
    }
}
impl<T> IndexMut<isize> for CursorMut<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, n: isize) -> &mut T {
        let i = element(self.pos, self.array.len(), n);
        &mut self.array[i]
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Self;
    #[track_caller]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}
impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Self;
    #[track_caller]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}
impl<T> AddAssign<isize> for CursorMut<'_, T> {
    #[track_caller]
    fn add_assign(&mut self, n: isize) {
        self.pos = offset(self.pos, self.array.len(), n);
    }
}
impl<T> SubAssign<isize> for CursorMut<'_, T> {
    #[track_caller]
    fn sub_assign(&mut self, n: isize) {
        match n.checked_neg() {
            Some(m) => *self += m,
            None => out_of_bounds(),
        }
    }
}

impl<T> DynamicArray<T> {
    /// A cursor at the first element (equal to [`end`](Self::end) when empty).
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// A cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// A mutable cursor at the first element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// A mutable cursor one past the last element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self, len)
    }
}
