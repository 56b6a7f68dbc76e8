//! Table-less CRC-32/MPEG-2 using branchless bitwise computation.
//!
//! # Algorithm
//!
//! MSB-first polynomial reduction without branches:
//!
//! ```text
//! for each bit:
//!   mask = 0 - (crc >> 31)  // 0x00000000 or 0xFFFFFFFF
//!   crc = (crc << 1) ^ (POLYNOMIAL & mask)
//! ```

use crate::constants::POLYNOMIAL;

/// Advance the CRC-32/MPEG-2 register over `data` without lookup tables.
///
/// This is a raw kernel: it takes a register value and returns one, with no
/// finalization. Starting from [`INITIAL`](crate::constants::INITIAL) yields
/// the checksum of `data`. Use [`Crc32Mpeg2`](crate::Crc32Mpeg2) for checksums.
///
/// # Example
///
/// ```
/// use crc32_mpeg2::bitwise::crc32::compute;
///
/// assert_eq!(compute(0xFFFF_FFFF, b"123456789"), 0x0376_E6E7);
/// ```
#[inline]
#[must_use]
pub fn compute(mut crc: u32, data: &[u8]) -> u32 {
  let (words, tail) = data.as_chunks::<4>();

  for &[b0, b1, b2, b3] in words {
    crc = compute_byte(crc, b0);
    crc = compute_byte(crc, b1);
    crc = compute_byte(crc, b2);
    crc = compute_byte(crc, b3);
  }

  tail.iter().fold(crc, |crc, &byte| compute_byte(crc, byte))
}

/// Compute CRC-32/MPEG-2 for a single byte using branchless reduction.
#[inline]
#[must_use]
pub const fn compute_byte(mut crc: u32, byte: u8) -> u32 {
  crc ^= (byte as u32) << 24;

  let mut bit = 0;
  while bit < 8 {
    let mask = 0u32.wrapping_sub(crc >> 31);
    crc = (crc << 1) ^ (POLYNOMIAL & mask);
    bit += 1;
  }

  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    common::reference::crc32_msb_bitwise,
    constants::{CHECK, INITIAL},
  };

  #[test]
  fn check_value() {
    assert_eq!(compute(INITIAL, b"123456789"), CHECK);
  }

  #[test]
  fn matches_reference_across_lengths() {
    let data: [u8; 67] = core::array::from_fn(|i| (i as u8).wrapping_mul(151).wrapping_add(7));
    for len in 0..=data.len() {
      let slice = &data[..len];
      assert_eq!(
        compute(INITIAL, slice),
        crc32_msb_bitwise(POLYNOMIAL, INITIAL, slice),
        "len={len}"
      );
    }
  }

  #[test]
  fn word_loop_matches_bytewise_fold() {
    let data: [u8; 13] = core::array::from_fn(|i| 0xF0 ^ (i as u8).wrapping_mul(37));
    for len in 0..=data.len() {
      let slice = &data[..len];
      let bytewise = slice.iter().fold(INITIAL, |crc, &b| compute_byte(crc, b));
      assert_eq!(compute(INITIAL, slice), bytewise, "len={len}");
    }
  }

  #[test]
  fn compute_byte_is_const() {
    const ZERO: u32 = compute_byte(INITIAL, 0x00);
    assert_eq!(ZERO, 0x4E08_BFB4);
  }
}
