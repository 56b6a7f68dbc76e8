//! Bitwise reference implementation.
//!
//! This is the canonical "source of truth" for CRC-32/MPEG-2 computation. It
//! processes one bit at a time, directly mirroring polynomial division:
//!
//! - **Obviously correct**: no tables, no unrolling
//! - **Const-evaluable**: check values are asserted at compile time
//!
//! Every table-driven kernel must produce identical results to this function.
//! It is intentionally slow (~8 operations per bit); use it as a test oracle.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Bitwise CRC-32 computation (non-reflected, MSB-first).
///
/// # Arguments
///
/// * `poly` - Normal polynomial (0x04C11DB7 for CRC-32/MPEG-2)
/// * `init` - Initial register value
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state. CRC-32/MPEG-2 applies no final XOR, so this is
/// also the checksum.
#[must_use]
pub const fn crc32_msb_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << 24;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 0x8000_0000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}
