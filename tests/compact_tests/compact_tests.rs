//! Compact Integer Tests
//!
//! Tests verify:
//! - Little-endian byte layout and silent truncation
//! - Decoding reads only the stored bytes
//! - Signed and 32-bit conversions
//! - Numeric ordering
//! - Buffer and serde encodings stay exactly N bytes wide

use bytes::{BufMut, BytesMut};
use bigmap::{BigMapError, CompactInteger, Int24, Int32, Int40, Int48, Int56, Int64};

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_no_padding() {
    assert_eq!(std::mem::size_of::<Int24>(), 3);
    assert_eq!(std::mem::size_of::<Int40>(), 5);
    assert_eq!(std::mem::size_of::<Int56>(), 7);
    assert_eq!(std::mem::align_of::<Int40>(), 1);
    assert_eq!(std::mem::size_of::<[Int40; 10]>(), 50);
}

#[test]
fn test_little_endian_layout() {
    let value = Int40::from_u64(0x12_3456_789A);
    assert_eq!(value.as_bytes(), &[0x9A, 0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn test_truncates_high_bits() {
    let value = Int24::from_u64(0xAABB_CCDD_EEFF);
    assert_eq!(value.to_u64(), 0xDD_EEFF);
    assert_eq!(value.as_bytes(), &[0xFF, 0xEE, 0xDD]);
}

#[test]
fn test_width_constants() {
    assert_eq!(Int24::WIDTH, 3);
    assert_eq!(Int64::WIDTH, 8);
    assert_eq!(Int24::mask(), 0xFF_FFFF);
    assert_eq!(Int48::mask(), 0xFFFF_FFFF_FFFF);
    assert_eq!(Int64::mask(), u64::MAX);
    assert_eq!(Int32::MAX.to_u64(), u32::MAX as u64);
}

#[test]
fn test_default_is_zero() {
    assert_eq!(Int40::default().to_u64(), 0);
    assert_eq!(Int40::default(), Int40::from_u64(0));
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_reads_only_stored_bytes() {
    // Every stored byte set: a decode that strayed past the array would
    // pick up extra bits above the mask.
    let value = CompactInteger::<3>::from_bytes([0xFF, 0xFF, 0xFF]);
    assert_eq!(value.to_u64(), 0xFF_FFFF);

    let values = [Int24::from_u64(1), Int24::from_u64(0xFF_FFFF)];
    assert_eq!(values[0].to_u64(), 1);
}

#[test]
fn test_full_width_round_trip() {
    for value in [0, 1, 0x80, 0xFFFF_FFFF, u64::MAX - 1, u64::MAX] {
        assert_eq!(Int64::from_u64(value).to_u64(), value);
    }
}

#[test]
fn test_single_byte_width() {
    let value = CompactInteger::<1>::from_u64(0x1FF);
    assert_eq!(value.to_u64(), 0xFF);
}

#[test]
fn test_from_i64_reinterprets_bits() {
    let minus_one = Int24::from_i64(-1);
    assert_eq!(minus_one.to_u64(), 0xFF_FFFF);
    assert_eq!(minus_one.to_i64(), 0xFF_FFFF);

    assert_eq!(Int64::from_i64(-1).to_i64(), -1);
    assert_eq!(Int64::from_i64(i64::MIN).to_i64(), i64::MIN);
}

#[test]
fn test_u32_conversions() {
    assert_eq!(Int40::from_u32(u32::MAX).to_u64(), u32::MAX as u64);
    assert_eq!(Int40::from_u64(0x01_0000_0002).to_u32(), 2);
    assert_eq!(Int24::from_u32(0x0102_0304).to_u32(), 0x02_0304);
}

#[test]
fn test_from_impls() {
    let a: Int40 = 7u64.into();
    let b: Int40 = 7u32.into();
    let c: Int40 = 7i64.into();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(u64::from(a), 7);
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_numeric_ordering() {
    // Byte-wise lexicographic order of the little-endian bytes would get
    // 0x0100 < 0x00FF wrong.
    assert!(Int24::from_u64(0x00FF) < Int24::from_u64(0x0100));
    assert!(Int40::from_u64(0x01_0000_0000) > Int40::from_u64(0xFFFF_FFFF));
    assert_eq!(Int32::from_u64(5).cmp(&Int32::from_u64(5)), std::cmp::Ordering::Equal);
}

#[test]
fn test_sort() {
    let mut values: Vec<Int24> = [300u64, 2, 65_536, 255, 0, 256]
        .iter()
        .map(|&v| Int24::from_u64(v))
        .collect();
    values.sort();

    let decoded: Vec<u64> = values.iter().map(Int24::to_u64).collect();
    assert_eq!(decoded, vec![0, 2, 255, 256, 300, 65_536]);
}

#[test]
fn test_debug_and_display() {
    let value = Int40::from_u64(1234);
    assert_eq!(format!("{}", value), "1234");
    assert_eq!(format!("{:?}", value), "CompactInteger<5>(1234)");
}

// =============================================================================
// Buffer Codec Tests
// =============================================================================

#[test]
fn test_write_to_buffer() {
    let mut buf = BytesMut::new();
    Int24::from_u64(0x010203).write_to(&mut buf);
    Int40::from_u64(0x0405060708).write_to(&mut buf);

    assert_eq!(&buf[..], &[0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05, 0x04]);
}

#[test]
fn test_read_from_buffer() {
    let mut buf = BytesMut::new();
    buf.put_slice(&[0x03, 0x02, 0x01, 0xAA]);
    let mut bytes = buf.freeze();

    let value = Int24::read_from(&mut bytes).unwrap();
    assert_eq!(value.to_u64(), 0x010203);
    assert_eq!(bytes.len(), 1);
}

#[test]
fn test_read_from_truncated_buffer() {
    let mut buf: &[u8] = &[0x01, 0x02];

    let result = Int40::read_from(&mut buf);
    match result {
        Err(BigMapError::Truncated { needed, remaining }) => {
            assert_eq!(needed, 5);
            assert_eq!(remaining, 2);
        }
        other => panic!("Expected Truncated, got {:?}", other),
    }
    // Nothing consumed on failure
    assert_eq!(buf.len(), 2);
}

// =============================================================================
// Serde Tests
// =============================================================================

#[test]
fn test_bincode_width() {
    let encoded = bincode::serialize(&Int24::from_u64(0x010203)).unwrap();
    assert_eq!(encoded, vec![0x03, 0x02, 0x01]);

    let encoded = bincode::serialize(&Int56::from_u64(1)).unwrap();
    assert_eq!(encoded.len(), 7);
}

#[test]
fn test_bincode_decode() {
    let decoded: Int40 = bincode::deserialize(&[0x9A, 0x78, 0x56, 0x34, 0x12]).unwrap();
    assert_eq!(decoded.to_u64(), 0x12_3456_789A);
}

#[test]
fn test_bincode_decode_short_input() {
    let result: Result<Int40, _> = bincode::deserialize(&[0x01, 0x02]);
    assert!(result.is_err());
}

#[test]
fn test_bincode_inside_struct() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Posting {
        doc: Int40,
        position: Int24,
    }

    let posting = Posting {
        doc: Int40::from_u64(99),
        position: Int24::from_u64(7),
    };
    let encoded = bincode::serialize(&posting).unwrap();
    assert_eq!(encoded.len(), 8);

    let decoded: Posting = bincode::deserialize(&encoded).unwrap();
    assert_eq!(decoded, posting);
}
