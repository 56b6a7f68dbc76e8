//! Const-fn CRC lookup table generation.
//!
//! Tables are computed using `const fn` and embedded directly in the binary.
//!
//! # Table Strategies
//!
//! | Table | Entries | Size | Lookups per byte |
//! |-------|---------|------|------------------|
//! | Nibble | 16×u32 | 64 B | 2 |
//! | Byte | 256×u32 | 1 KB | 1 |
//!
//! The nibble table trades throughput for a footprint that fits constrained
//! targets.

// SAFETY: All array indexing in this module uses bounded loop indices (0..16, 0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Generate a single MSB-first lookup table entry.
///
/// Places `index` in the top `bits` bits of a 32-bit register and reduces it
/// `bits` times by the normal-form polynomial.
///
/// # Arguments
///
/// * `poly` - Normal (non-reflected) polynomial
/// * `index` - Table index, must fit in `bits` bits
/// * `bits` - Number of input bits the table covers (4 or 8)
#[must_use]
pub const fn table_entry(poly: u32, index: u32, bits: u32) -> u32 {
  let mut crc = index << (32 - bits);
  let mut i = 0;
  while i < bits {
    crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
    i += 1;
  }
  crc
}

/// Generate the 16-entry nibble table.
#[must_use]
pub const fn generate_nibble_table(poly: u32) -> [u32; 16] {
  let mut table = [0u32; 16];
  let mut i = 0u32;
  while i < 16 {
    table[i as usize] = table_entry(poly, i, 4);
    i += 1;
  }
  table
}

/// Generate the 256-entry byte table.
#[must_use]
pub const fn generate_byte_table(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0u32;
  while i < 256 {
    table[i as usize] = table_entry(poly, i, 8);
    i += 1;
  }
  table
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{common::reference::crc32_msb_bitwise, constants::POLYNOMIAL};

  #[test]
  fn byte_entries_match_bitwise_reference() {
    // Processing a single byte from a zero register leaves exactly its table entry.
    let table = generate_byte_table(POLYNOMIAL);
    for (i, &entry) in table.iter().enumerate() {
      assert_eq!(entry, crc32_msb_bitwise(POLYNOMIAL, 0, &[i as u8]), "entry {i}");
    }
  }

  #[test]
  fn nibble_entry_is_linear() {
    // CRC reduction is linear over GF(2): t[a ^ b] == t[a] ^ t[b].
    let table = generate_nibble_table(POLYNOMIAL);
    for a in 0..16usize {
      for b in 0..16usize {
        assert_eq!(table[a ^ b], table[a] ^ table[b]);
      }
    }
  }

  #[test]
  fn entry_one_is_polynomial() {
    assert_eq!(table_entry(POLYNOMIAL, 1, 4), POLYNOMIAL);
    assert_eq!(table_entry(POLYNOMIAL, 1, 8), POLYNOMIAL);
  }
}
