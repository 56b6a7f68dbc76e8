//! Kernel selection introspection.
//!
//! Reports which kernel handles a given buffer length, without touching the
//! hot path.
//!
//! # Examples
//!
//! ```
//! use crc32_mpeg2::{Crc32Mpeg2, kernel_for};
//!
//! println!("backend: {}", Crc32Mpeg2::backend_name());
//! println!("@ 16B: {}", kernel_for::<Crc32Mpeg2>(16));
//! println!("@ 4KB: {}", kernel_for::<Crc32Mpeg2>(4096));
//! ```

use crate::Crc32Mpeg2;

/// Returns the kernel name selected for a specific algorithm and buffer size.
#[inline]
#[must_use]
pub fn kernel_for<T: KernelIntrospect>(len: usize) -> &'static str {
  T::kernel_name_for_len(len)
}

/// Trait for types that support kernel introspection.
pub trait KernelIntrospect {
  /// Returns the kernel name that would be selected for a buffer of `len` bytes.
  ///
  /// e.g. `"portable/nibble"` for short buffers, `"portable/table256"` for
  /// long ones, `"portable/bitwise"` when forced.
  fn kernel_name_for_len(len: usize) -> &'static str;

  /// Returns the currently selected backend name.
  ///
  /// This reflects the kernel used for a 1KB buffer, unless a force mode is
  /// active.
  fn backend_name() -> &'static str;
}

impl KernelIntrospect for Crc32Mpeg2 {
  #[inline]
  fn kernel_name_for_len(len: usize) -> &'static str {
    Crc32Mpeg2::kernel_name_for_len(len)
  }

  #[inline]
  fn backend_name() -> &'static str {
    Crc32Mpeg2::backend_name()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crc32::policy::Kernel;

  #[test]
  fn kernel_for_reports_known_names() {
    for len in [0usize, 1, 63, 64, 1024, 1 << 20] {
      let name = kernel_for::<Crc32Mpeg2>(len);
      assert!(Kernel::ALL.iter().any(|k| k.name == name), "len={len} -> {name}");
    }
  }

  #[test]
  fn backend_name_matches_probe_len() {
    assert_eq!(
      <Crc32Mpeg2 as KernelIntrospect>::backend_name(),
      kernel_for::<Crc32Mpeg2>(crate::crc32::policy::BACKEND_PROBE_LEN)
    );
  }
}
