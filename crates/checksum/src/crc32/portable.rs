//! Portable CRC-32/MPEG-2 kernels (nibble table and byte table).
//!
//! Both kernels advance an MSB-first register; neither reflects nor applies a
//! final XOR. They are raw building blocks for [`Crc32Mpeg2`](crate::Crc32Mpeg2)
//! and return the register as-is.

// SAFETY: Table indices are masked to 0..16 (nibble) or shifted down to 0..256
// (byte), matching the table lengths.
#![allow(clippy::indexing_slicing)]

use crate::constants::{BYTE_TABLE, NIBBLE_TABLE};

/// Canonical kernel name for the nibble-table kernel.
pub const NIBBLE_KERNEL_NAME: &str = "portable/nibble";

/// Canonical kernel name for the byte-table kernel.
pub const TABLE256_KERNEL_NAME: &str = "portable/table256";

/// Advance the register by one byte using two nibble-table lookups.
///
/// The high nibble of `byte` is folded in first, then the low nibble.
#[inline(always)]
#[must_use]
pub fn nibble_step(crc: u32, byte: u8) -> u32 {
  let index = ((crc >> 28) ^ u32::from(byte >> 4)) & 0x0F;
  let crc = (crc << 4) ^ NIBBLE_TABLE[index as usize];

  let index = ((crc >> 28) ^ u32::from(byte)) & 0x0F;
  (crc << 4) ^ NIBBLE_TABLE[index as usize]
}

/// CRC-32/MPEG-2 register update using the 16-entry nibble table.
///
/// Starting from [`INITIAL`](crate::constants::INITIAL) yields the checksum of
/// `data`.
#[inline]
#[must_use]
pub fn crc32_nibble(crc: u32, data: &[u8]) -> u32 {
  data.iter().fold(crc, |crc, &byte| nibble_step(crc, byte))
}

/// Advance the register by one byte using one byte-table lookup.
#[inline(always)]
#[must_use]
pub fn table256_step(crc: u32, byte: u8) -> u32 {
  let index = (crc >> 24) ^ u32::from(byte);
  (crc << 8) ^ BYTE_TABLE.0[index as usize]
}

/// CRC-32/MPEG-2 register update using the 256-entry byte table.
///
/// Processes 4 bytes per iteration. Starting from
/// [`INITIAL`](crate::constants::INITIAL) yields the checksum of `data`.
#[inline]
#[must_use]
pub fn crc32_table256(mut crc: u32, data: &[u8]) -> u32 {
  let (chunks, remainder) = data.as_chunks::<4>();

  for chunk in chunks {
    crc = table256_step(crc, chunk[0]);
    crc = table256_step(crc, chunk[1]);
    crc = table256_step(crc, chunk[2]);
    crc = table256_step(crc, chunk[3]);
  }

  for &byte in remainder {
    crc = table256_step(crc, byte);
  }

  crc
}
