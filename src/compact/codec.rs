//! Compact integer codecs
//!
//! Byte-buffer encoding on top of `bytes`, and a serde representation that
//! keeps the value exactly `N` bytes wide in fixed-size formats like bincode.

use std::fmt;

use bytes::{Buf, BufMut};
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::error::{BigMapError, Result};

use super::CompactInteger;

// =============================================================================
// Buffer Encoding
// =============================================================================

impl<const N: usize> CompactInteger<N> {
    /// Append the `N` stored bytes to `buf`
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.0);
    }

    /// Consume exactly `N` bytes from `buf`
    ///
    /// Leaves `buf` untouched when fewer than `N` bytes remain.
    pub fn read_from<B: Buf>(buf: &mut B) -> Result<Self> {
        if buf.remaining() < N {
            return Err(BigMapError::Truncated {
                needed: N,
                remaining: buf.remaining(),
            });
        }

        let mut bytes = [0u8; N];
        buf.copy_to_slice(&mut bytes);
        Ok(Self::from_bytes(bytes))
    }
}

// =============================================================================
// Serde
// =============================================================================

impl<const N: usize> Serialize for CompactInteger<N> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for byte in &self.0 {
            tuple.serialize_element(byte)?;
        }
        tuple.end()
    }
}

impl<'de, const N: usize> Deserialize<'de> for CompactInteger<N> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(N, CompactVisitor::<N>)
    }
}

struct CompactVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for CompactVisitor<N> {
    type Value = CompactInteger<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a tuple of {} little-endian bytes", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = [0u8; N];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(CompactInteger::from_bytes(bytes))
    }
}
