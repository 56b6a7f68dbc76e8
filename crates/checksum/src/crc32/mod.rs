//! CRC-32/MPEG-2 implementation.
//!
//! This module provides:
//! - [`crc32_mpeg2`] - generic fold over any iterator of byte-like elements
//! - [`Crc32Mpeg2`] - the [`Checksum`] implementation for byte slices, with
//!   MPEG-2 section trailer helpers

pub mod config;
pub mod policy;
pub mod portable;

use traits::{Checksum, VerificationError};

pub use self::{
  config::{Crc32Mpeg2Config, Crc32Mpeg2Force, Crc32Mpeg2Tunables},
  policy::{Crc32Fn, Kernel},
};
use crate::{
  constants::{INITIAL, RESIDUE},
  input::LowByte,
};

/// Size of the `CRC_32` field that ends an MPEG-2 section.
pub const TRAILER_LEN: usize = 4;

/// Compute the CRC-32/MPEG-2 checksum of a sequence.
///
/// Each element is reduced to its low 8 bits (see [`LowByte`]) and processed
/// in order with the nibble-table method. An empty sequence returns the
/// initial value `0xFFFFFFFF`.
///
/// # Example
///
/// ```
/// use crc32_mpeg2::crc32_mpeg2;
///
/// assert_eq!(crc32_mpeg2(b"123456789"), 0x0376_E6E7);
/// assert_eq!(crc32_mpeg2("123456789".chars()), 0x0376_E6E7);
/// assert_eq!(crc32_mpeg2([0x131u16, 0x232, 0x333]), crc32_mpeg2(b"123"));
/// assert_eq!(crc32_mpeg2(core::iter::empty::<u8>()), 0xFFFF_FFFF);
/// ```
#[inline]
#[must_use]
pub fn crc32_mpeg2<I>(data: I) -> u32
where
  I: IntoIterator,
  I::Item: LowByte,
{
  data
    .into_iter()
    .fold(INITIAL, |crc, item| portable::nibble_step(crc, item.low_byte()))
}

/// CRC-32/MPEG-2 checksum.
///
/// Used by MPEG-2 transport streams (PSI/SI section `CRC_32`, ISO/IEC 13818-1).
///
/// # Properties
///
/// - **Polynomial**: 0x04C11DB7 (normal)
/// - **Initial value**: 0xFFFFFFFF
/// - **Final XOR**: none
/// - **Reflect input/output**: No
///
/// # Example
///
/// ```
/// use crc32_mpeg2::{Checksum, Crc32Mpeg2};
///
/// let crc = Crc32Mpeg2::checksum(b"123456789");
/// assert_eq!(crc, 0x0376_E6E7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc32Mpeg2;

impl Crc32Mpeg2 {
  /// The checksum of `data` as the big-endian bytes an MPEG-2 section ends in.
  #[inline]
  #[must_use]
  pub fn trailer(data: &[u8]) -> [u8; TRAILER_LEN] {
    Self::checksum(data).to_be_bytes()
  }

  /// Verify a buffer that ends in its own big-endian `CRC_32`.
  ///
  /// Running the CRC over the payload and the trailer together leaves the
  /// register at zero exactly when the trailer matches.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError::Truncated`] if `section` is shorter than
  /// [`TRAILER_LEN`] bytes, and [`VerificationError::Mismatch`] if the trailer
  /// does not match the payload.
  pub fn verify_trailer(section: &[u8]) -> Result<(), VerificationError> {
    if section.len() < TRAILER_LEN {
      return Err(VerificationError::Truncated {
        len: section.len(),
        required: TRAILER_LEN,
      });
    }
    if Self::checksum(section) == RESIDUE {
      Ok(())
    } else {
      Err(VerificationError::Mismatch)
    }
  }

  /// Get the name of the kernel chosen for a representative buffer.
  ///
  /// Returns the kernel name (e.g., "portable/table256", "portable/bitwise").
  #[must_use]
  pub fn backend_name() -> &'static str {
    policy::backend_name()
  }

  /// Returns the kernel name that the selector would choose for `len`.
  #[must_use]
  pub fn kernel_name_for_len(len: usize) -> &'static str {
    policy::kernel_name_for_len(len)
  }

  /// Get the effective configuration (overrides + thresholds).
  #[must_use]
  pub fn config() -> Crc32Mpeg2Config {
    config::get()
  }
}

impl Checksum for Crc32Mpeg2 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn checksum(data: &[u8]) -> u32 {
    policy::select(data.len()).call(INITIAL, data)
  }

  fn checksum_vectored(bufs: &[&[u8]]) -> u32 {
    let total = bufs.iter().map(|buf| buf.len()).sum();
    let kernel = policy::select(total);
    bufs.iter().fold(INITIAL, |crc, buf| kernel.call(crc, buf))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
