//! Compact Integer Module
//!
//! Fixed-width integers with alignment 1, used to pack keys and values
//! densely inside slot maps.
//!
//! ## Layout
//! ```text
//! CompactInteger<5> holding 0x0000_0012_3456_789A
//! ┌──────┬──────┬──────┬──────┬──────┐
//! │ 0x9A │ 0x78 │ 0x56 │ 0x34 │ 0x12 │
//! └──────┴──────┴──────┴──────┴──────┘
//!  byte 0 (least significant)  byte 4
//! ```
//!
//! ## Conversions
//! - Encoding keeps the low `N` bytes of a 64-bit value; higher bits are
//!   silently dropped.
//! - Decoding zero-extends the stored bytes back to 64 bits. Signed decoding
//!   reinterprets that unsigned pattern, so a negative input does not survive
//!   a narrow width (`Int24::from_i64(-1).to_i64() == 0xFF_FFFF`).
//! - Ordering is numeric ordering of the decoded unsigned value.

mod codec;

use std::cmp::Ordering;
use std::fmt;

/// An `N`-byte little-endian integer with no padding
///
/// `N` must be in `1..=8`; other widths fail to compile on first use.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactInteger<const N: usize>([u8; N]);

pub type Int24 = CompactInteger<3>;
pub type Int32 = CompactInteger<4>;
pub type Int40 = CompactInteger<5>;
pub type Int48 = CompactInteger<6>;
pub type Int56 = CompactInteger<7>;
pub type Int64 = CompactInteger<8>;

impl<const N: usize> CompactInteger<N> {
    const WIDTH_CHECK: () = assert!(N >= 1 && N <= 8, "CompactInteger width must be 1..=8 bytes");

    /// Number of stored bytes
    pub const WIDTH: usize = N;

    /// Largest representable value (all `8 * N` low bits set)
    pub const MAX: Self = {
        let () = Self::WIDTH_CHECK;
        Self([0xFF; N])
    };

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Encode the low `N` bytes of `value`
    pub fn from_u64(value: u64) -> Self {
        let () = Self::WIDTH_CHECK;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&value.to_le_bytes()[..N]);
        Self(bytes)
    }

    /// Encode the two's-complement bit pattern of `value`
    pub fn from_i64(value: i64) -> Self {
        Self::from_u64(value as u64)
    }

    pub fn from_u32(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }

    /// Wrap raw little-endian bytes
    pub fn from_bytes(bytes: [u8; N]) -> Self {
        let () = Self::WIDTH_CHECK;
        Self(bytes)
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    /// Zero-extend the stored bytes to 64 bits
    ///
    /// Only the `N` stored bytes are read.
    pub fn to_u64(&self) -> u64 {
        let mut buf = [0u8; 8];
        buf[..N].copy_from_slice(&self.0);
        u64::from_le_bytes(buf)
    }

    /// Reinterpret the zero-extended value as signed
    pub fn to_i64(&self) -> i64 {
        self.to_u64() as i64
    }

    /// Truncate the zero-extended value to 32 bits
    pub fn to_u32(&self) -> u32 {
        self.to_u64() as u32
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Mask covering the `8 * N` bits this width can hold
    pub fn mask() -> u64 {
        Self::MAX.to_u64()
    }
}

impl<const N: usize> Default for CompactInteger<N> {
    fn default() -> Self {
        Self::from_u64(0)
    }
}

impl<const N: usize> Ord for CompactInteger<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Most significant byte first; same result as comparing to_u64().
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl<const N: usize> PartialOrd for CompactInteger<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> fmt::Debug for CompactInteger<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompactInteger<{}>({})", N, self.to_u64())
    }
}

impl<const N: usize> fmt::Display for CompactInteger<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u64())
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<const N: usize> From<u64> for CompactInteger<N> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const N: usize> From<u32> for CompactInteger<N> {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl<const N: usize> From<i64> for CompactInteger<N> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<const N: usize> From<CompactInteger<N>> for u64 {
    fn from(value: CompactInteger<N>) -> Self {
        value.to_u64()
    }
}
