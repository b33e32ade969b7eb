// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The owning handle for a `DynamicArray`'s heap allocation.
//!
//! `RawBuffer<T>` is the only place in the crate that talks to the global
//! allocator. It never inspects the memory it manages: when dropped it
//! *will* free the allocation, but it *won't* drop any element stored in it.
//! Tracking which slots hold live values is up to the owner.

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::alloc::{alloc, dealloc, handle_alloc_error, realloc, Layout};

// Core imports
use core::{
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuffer<T>` exclusively owns its allocation, so it may be sent
// or shared across threads whenever `T` itself may.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: see above.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// Largest slot count whose byte size still fits in `isize::MAX`.
    ///
    /// Zero-sized types never allocate, so their limit is `usize::MAX`.
    pub(crate) const MAX_CAPACITY: usize = if mem::size_of::<T>() == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / mem::size_of::<T>()
    };

    /// An empty handle: no allocation, capacity `0`.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity > MAX_CAPACITY`.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        if let Err(e) = buf.reallocate(capacity) {
            capacity_overflow(e);
        }
        buf
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns `true` if this handle currently owns heap memory.
    #[inline]
    pub(crate) const fn is_allocated(&self) -> bool {
        self.cap != 0 && mem::size_of::<T>() != 0
    }

    /// The capacity a full buffer grows to: `max(1, 2 * capacity)`.
    ///
    /// Saturates at `MAX_CAPACITY`; returns `None` if the buffer is already there.
    #[inline]
    pub(crate) fn next_capacity(&self) -> Option<usize> {
        if self.cap == 0 {
            return Some(1);
        }
        if self.cap == Self::MAX_CAPACITY {
            return None;
        }
        Some(self.cap.saturating_mul(2).min(Self::MAX_CAPACITY))
    }

    /// Replaces the allocation with one of exactly `new_cap` slots.
    ///
    /// The leading `min(capacity, new_cap)` slots are relocated bitwise into
    /// the new allocation; anything beyond that is lost, so callers must
    /// never shrink below their live length. `new_cap == 0` releases the
    /// allocation entirely.
    ///
    /// Returns [`Error::LengthExceeded`] without touching anything if
    /// `new_cap > MAX_CAPACITY`.
    pub(crate) fn reallocate(&mut self, new_cap: usize) -> Result<(), Error> {
        if new_cap > Self::MAX_CAPACITY {
            log::debug!(
                "rejected reallocation to {new_cap} slots (max {})",
                Self::MAX_CAPACITY
            );
            return Err(Error::LengthExceeded);
        }
        if new_cap == self.cap {
            return Ok(());
        }

        log::trace!("reallocating buffer: {} -> {} slots", self.cap, new_cap);

        if mem::size_of::<T>() == 0 {
            // Nothing to allocate; only the bookkeeping changes.
            self.cap = new_cap;
            return Ok(());
        }

        if new_cap == 0 {
            self.release();
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| Error::LengthExceeded)?;
        let new_ptr = match self.current_memory() {
            // SAFETY: `new_layout` has a non-zero size because `T` is not a
            // ZST and `new_cap > 0`.
            None => unsafe { alloc(new_layout) },
            // SAFETY: `ptr` was allocated by this handle with `old_layout`,
            // the alignment is unchanged, and the new size is non-zero and
            // does not exceed `isize::MAX` (checked by `Layout::array`).
            Some((ptr, old_layout)) => unsafe {
                realloc(ptr.as_ptr(), old_layout, new_layout.size())
            },
        };

        self.ptr = match NonNull::new(new_ptr.cast::<T>()) {
            Some(p) => p,
            None => handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
        Ok(())
    }

    /// Returns the current allocation and its layout, if any.
    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if !self.is_allocated() {
            return None;
        }
        // SAFETY: this exact layout was validated by `Layout::array` when the
        // allocation was made.
        let layout = unsafe {
            Layout::from_size_align_unchecked(mem::size_of::<T>() * self.cap, mem::align_of::<T>())
        };
        Some((self.ptr.cast(), layout))
    }

    /// Frees the allocation (if any) and resets to the empty state.
    fn release(&mut self) {
        if let Some((ptr, layout)) = self.current_memory() {
            log::trace!("releasing buffer of {} slots", self.cap);
            // SAFETY: `ptr` was allocated by this handle with `layout`.
            unsafe { dealloc(ptr.as_ptr(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    /// Moves the allocation out, leaving `self` empty.
    #[inline]
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Shifts `count` slots starting at `from` one position to the left.
    ///
    /// # Safety
    ///
    /// `from >= 1` and `from + count <= capacity`.
    #[inline]
    pub(crate) unsafe fn shift_left(&mut self, from: usize, count: usize) {
        let base = self.ptr();
        // SAFETY: both ranges lie within the allocation per the caller's
        // contract; `ptr::copy` handles the overlap.
        unsafe { ptr::copy(base.add(from), base.add(from - 1), count) };
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.release();
    }
}

// One central place for reporting capacity overflows from infallible paths.
#[cold]
#[track_caller]
pub(crate) fn capacity_overflow(e: Error) -> ! {
    panic!("capacity overflow: {e}");
}
