// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynamicArray`](crate::DynamicArray).
//!
//! - **Serialize**: as a sequence of the `len` live elements. Capacity is not
//!   part of the representation.
//! - **Deserialize**: from any sequence. The initial allocation follows the
//!   format's length hint, capped so a hostile hint cannot force a huge
//!   up-front allocation; past that the array grows by doubling.

// Crate imports
use crate::array::DynamicArray;

// Core imports
use core::{fmt, marker::PhantomData, mem};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound, in bytes, on the allocation made from a length hint.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

impl<T: Serialize> Serialize for DynamicArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ArrayVisitor<T> {
    type Value = DynamicArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let cap = a
            .size_hint()
            .unwrap_or(0)
            .min(MAX_PREALLOC_BYTES / mem::size_of::<T>().max(1));
        let mut out = DynamicArray::with_capacity(cap);
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynamicArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor::<T>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::array::{tests::seeded, DynamicArray};
    use alloc::string::{String, ToString};

    #[test]
    fn test_serde_roundtrip_json() {
        let v = seeded();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[30,10432042,-4325325,0]");
        let back: DynamicArray<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_capacity_is_not_serialized() {
        let mut v = seeded();
        v.reserve(100).unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "[30,10432042,-4325325,0]");
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: DynamicArray<i32> = DynamicArray::new();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: DynamicArray<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_owned_elements() {
        let back: DynamicArray<String> = serde_json::from_str(r#"["a","bc"]"#).unwrap();
        assert_eq!(back, ["a".to_string(), "bc".to_string()]);
    }

    #[test]
    fn serde_zst_roundtrip() {
        let v: DynamicArray<()> = [(), ()].into();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[null,null]");
        let back: DynamicArray<()> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err =
            serde_json::from_str::<DynamicArray<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a sequence"), "unexpected error message: {msg}");
    }

    #[test]
    fn test_element_error_propagates() {
        let err = serde_json::from_str::<DynamicArray<u8>>("[1,2,300]").unwrap_err();
        assert!(err.is_data(), "unexpected error: {err}");
    }
}
