// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynamicArray`.
//!
//! Both kinds are raised before any mutation happens, so an `Err` always
//! leaves the array exactly as it was. They are `Copy` and implement
//! `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by fallible operations on [`DynamicArray`](crate::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A position did not address a live element (`pos >= len`).
    ///
    /// Returned by [`at`](crate::DynamicArray::at),
    /// [`at_mut`](crate::DynamicArray::at_mut) and
    /// [`erase`](crate::DynamicArray::erase).
    OutOfRange,
    /// A requested length or capacity is larger than
    /// [`MAX_CAPACITY`](crate::DynamicArray::MAX_CAPACITY).
    ///
    /// Returned by [`reserve`](crate::DynamicArray::reserve) and
    /// [`resize`](crate::DynamicArray::resize).
    LengthExceeded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => f.write_str("index out of range"),
            Self::LengthExceeded => f.write_str("requested length exceeds maximum capacity"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange);
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::OutOfRange.to_string(), "index out of range");
        assert_eq!(
            Error::LengthExceeded.to_string(),
            "requested length exceeds maximum capacity"
        );
    }
}
