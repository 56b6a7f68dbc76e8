//! CRC-32/MPEG-2 parameters and precomputed lookup tables.
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Width | 32 |
//! | Polynomial | 0x04C11DB7 (normal, MSB-first) |
//! | Initial value | 0xFFFFFFFF |
//! | Reflect input/output | No |
//! | Final XOR | None |
//! | Check (`"123456789"`) | 0x0376E6E7 |
//! | Residue | 0x00000000 |
//!
//! See also ISO/IEC 13818-1, Annex A.
//!
//! All tables are computed at compile time.

use crate::common::{reference::crc32_msb_bitwise, tables};

/// CRC-32/MPEG-2 polynomial in normal (non-reflected) form.
pub const POLYNOMIAL: u32 = 0x04C1_1DB7;

/// Initial register value.
pub const INITIAL: u32 = 0xFFFF_FFFF;

/// Checksum of the ASCII string `"123456789"`.
pub const CHECK: u32 = 0x0376_E6E7;

/// Register value after processing a message followed by its own CRC
/// (big-endian).
pub const RESIDUE: u32 = 0;

/// Nibble lookup table: `NIBBLE_TABLE[i]` is nibble `i` shifted into the top
/// of the register and reduced four times.
///
/// Total size: 16 * 4 = 64 bytes.
pub static NIBBLE_TABLE: [u32; 16] = tables::generate_nibble_table(POLYNOMIAL);

/// Byte lookup table: `BYTE_TABLE.0[i]` is byte `i` shifted into the top of
/// the register and reduced eight times.
///
/// Total size: 256 * 4 = 1KB. The table is 64-byte aligned.
pub static BYTE_TABLE: Aligned64<[u32; 256]> = Aligned64(tables::generate_byte_table(POLYNOMIAL));

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// The inner type `T` is accessible via `.0`.
#[repr(align(64))]
pub struct Aligned64<T>(pub T);

// The check value is asserted at compile time against the bitwise reference.
const _: () = assert!(crc32_msb_bitwise(POLYNOMIAL, INITIAL, b"123456789") == CHECK);
const _: () = assert!(
  crc32_msb_bitwise(
    POLYNOMIAL,
    INITIAL,
    &[0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x03, 0x76, 0xE6, 0xE7]
  ) == RESIDUE
);

#[cfg(test)]
mod tests {
  use super::*;

  /// Table values as published for the nibble method.
  const EXPECTED_NIBBLE_TABLE: [u32; 16] = [
    0x0000_0000,
    0x04C1_1DB7,
    0x0982_3B6E,
    0x0D43_26D9,
    0x1304_76DC,
    0x17C5_6B6B,
    0x1A86_4DB2,
    0x1E47_5005,
    0x2608_EDB8,
    0x22C9_F00F,
    0x2F8A_D6D6,
    0x2B4B_CB61,
    0x350C_9B64,
    0x31CD_86D3,
    0x3C8E_A00A,
    0x384F_BDBD,
  ];

  #[test]
  fn nibble_table_matches_published_values() {
    assert_eq!(NIBBLE_TABLE, EXPECTED_NIBBLE_TABLE);
  }

  #[test]
  fn byte_table_spot_values() {
    assert_eq!(BYTE_TABLE.0[0], 0);
    assert_eq!(BYTE_TABLE.0[1], POLYNOMIAL);
    // Low 16 entries of the byte table are the nibble table.
    assert_eq!(&BYTE_TABLE.0[..16], &NIBBLE_TABLE[..]);
  }

  #[test]
  fn byte_table_is_aligned() {
    assert_eq!(core::ptr::addr_of!(BYTE_TABLE) as usize % 64, 0);
  }
}
