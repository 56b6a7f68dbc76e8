//! Error types for checksum operations.
//!
//! Computing a checksum cannot fail; only comparing one against an expected
//! value can.

use core::fmt;

/// Checksum verification failed.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn check_trailer(section: &[u8], width: usize) -> Result<&[u8], VerificationError> {
///   section
///     .len()
///     .checked_sub(width)
///     .map(|end| &section[..end])
///     .ok_or(VerificationError::Truncated { len: section.len(), required: width })
/// }
///
/// assert_eq!(check_trailer(&[1, 2, 3, 4, 5], 4), Ok(&[1u8][..]));
/// assert_eq!(
///   check_trailer(&[1, 2], 4),
///   Err(VerificationError::Truncated { len: 2, required: 4 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VerificationError {
  /// The computed checksum differs from the expected one.
  Mismatch,
  /// The buffer cannot hold the checksum it is supposed to end in.
  Truncated {
    /// Length of the buffer that was checked.
    len: usize,
    /// Minimum length that carries a checksum.
    required: usize,
  },
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Mismatch => f.write_str("checksum mismatch"),
      Self::Truncated { len, required } => {
        write!(f, "buffer of {len} bytes is shorter than its {required}-byte checksum")
      }
    }
  }
}

impl core::error::Error for VerificationError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn mismatch_message() {
    assert_eq!(VerificationError::Mismatch.to_string(), "checksum mismatch");
  }

  #[test]
  fn truncated_message_names_both_lengths() {
    let err = VerificationError::Truncated { len: 3, required: 4 };
    assert_eq!(err.to_string(), "buffer of 3 bytes is shorter than its 4-byte checksum");
  }

  #[test]
  fn variants_are_distinct() {
    assert_ne!(VerificationError::Mismatch, VerificationError::Truncated { len: 0, required: 4 });
    assert_ne!(
      VerificationError::Truncated { len: 0, required: 4 },
      VerificationError::Truncated { len: 1, required: 4 }
    );
  }

  #[test]
  fn propagates_through_question_mark() {
    fn outer(ok: bool) -> Result<u8, VerificationError> {
      let inner = |ok: bool| if ok { Ok(7u8) } else { Err(VerificationError::Mismatch) };
      let value = inner(ok)?;
      Ok(value + 1)
    }
    assert_eq!(outer(true), Ok(8));
    assert_eq!(outer(false), Err(VerificationError::Mismatch));
  }

  #[test]
  fn usable_as_error_trait_object() {
    use core::error::Error;

    let err: &(dyn Error + Send + Sync) = &VerificationError::Mismatch;
    assert!(err.source().is_none());
  }
}
