//! Non-cryptographic checksum trait.
//!
//! One-shot interface for checksum algorithms: the whole input is handed over
//! in a single call, either contiguous or as an ordered list of buffers.

use core::fmt::Debug;

use crate::VerificationError;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use crc32_mpeg2::{Checksum, Crc32Mpeg2};
///
/// // Contiguous input
/// let crc = Crc32Mpeg2::checksum(b"123456789");
///
/// // Non-contiguous input, same result as the concatenation
/// let crc2 = Crc32Mpeg2::checksum_vectored(&[b"1234", b"56789"]);
/// assert_eq!(crc, crc2);
/// ```
///
/// # Implementor Requirements
///
/// - `checksum` must be a pure function of its input
/// - `checksum_vectored(bufs)` must equal `checksum` of the concatenated buffers
pub trait Checksum {
  /// Output size in bytes.
  ///
  /// - CRC32: 4
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Compute the checksum of `data`.
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output;

  /// Compute the checksum of multiple non-contiguous buffers, in order.
  ///
  /// Semantics are identical to calling [`checksum`](Self::checksum) on the
  /// concatenation of `bufs`, without building that concatenation.
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output;

  /// Check `data` against an expected checksum.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] if the computed checksum differs from
  /// `expected`.
  #[inline]
  fn verify(data: &[u8], expected: Self::Output) -> Result<(), VerificationError> {
    if Self::checksum(data) == expected {
      Ok(())
    } else {
      Err(VerificationError::Mismatch)
    }
  }
}
