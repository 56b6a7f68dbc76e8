//! Element-to-byte conversion for generic checksum input.
//!
//! [`crc32_mpeg2`](crate::crc32_mpeg2) accepts any iterator whose items
//! implement [`LowByte`]. Wider elements are truncated to their low 8 bits,
//! the same as masking with `0xFF`; nothing above bit 7 reaches the CRC.

/// Conversion to the low 8 bits of a value.
pub trait LowByte {
  /// Returns the low 8 bits of `self`.
  #[must_use]
  fn low_byte(self) -> u8;
}

macro_rules! impl_low_byte {
  ($($ty:ty),* $(,)?) => {
    $(
      impl LowByte for $ty {
        #[inline(always)]
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn low_byte(self) -> u8 {
          self as u8
        }
      }
    )*
  };
}

impl_low_byte!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl LowByte for bool {
  #[inline(always)]
  fn low_byte(self) -> u8 {
    u8::from(self)
  }
}

impl LowByte for char {
  /// Low 8 bits of the Unicode scalar value; ASCII maps to itself.
  #[inline(always)]
  #[allow(clippy::cast_possible_truncation)]
  fn low_byte(self) -> u8 {
    u32::from(self) as u8
  }
}

impl<T: LowByte + Copy> LowByte for &T {
  #[inline(always)]
  fn low_byte(self) -> u8 {
    (*self).low_byte()
  }
}

impl<T: LowByte + Copy> LowByte for &mut T {
  #[inline(always)]
  fn low_byte(self) -> u8 {
    (*self).low_byte()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unsigned_values_are_masked() {
    assert_eq!(0x31u8.low_byte(), 0x31);
    assert_eq!(0xAB31u16.low_byte(), 0x31);
    assert_eq!(0xDEAD_BE31u32.low_byte(), 0x31);
    assert_eq!(u64::MAX.low_byte(), 0xFF);
    assert_eq!(0x100usize.low_byte(), 0x00);
  }

  #[test]
  fn signed_values_use_twos_complement() {
    assert_eq!((-1i8).low_byte(), 0xFF);
    assert_eq!((-2i32).low_byte(), 0xFE);
    assert_eq!(0x7F31i16.low_byte(), 0x31);
  }

  #[test]
  fn char_and_bool() {
    assert_eq!('1'.low_byte(), 0x31);
    assert_eq!('\u{0131}'.low_byte(), 0x31);
    assert_eq!(true.low_byte(), 1);
    assert_eq!(false.low_byte(), 0);
  }

  #[test]
  fn references_forward() {
    let v = 0x1234u16;
    assert_eq!((&v).low_byte(), 0x34);
    let mut w = 0x5678u32;
    assert_eq!((&mut w).low_byte(), 0x78);
  }
}
