//! CRC-32/MPEG-2 kernel selection.
//!
//! # Kernel Tiers
//!
//! | Tier | Kernel | Table | Best for |
//! |------|--------|-------|----------|
//! | 0 (Reference) | `portable/bitwise` | none | code-size constrained targets |
//! | 1 (Portable) | `portable/nibble` | 64 B | short buffers |
//! | 1 (Portable) | `portable/table256` | 1 KB | long buffers |
//!
//! Selection is a pure function of the buffer length and the
//! [`Crc32Mpeg2Config`]; all kernels return identical results.

use super::{
  config::{self, Crc32Mpeg2Config, Crc32Mpeg2Force},
  portable::{self, NIBBLE_KERNEL_NAME, TABLE256_KERNEL_NAME},
};
use crate::bitwise;

/// Function signature for CRC-32/MPEG-2 kernels.
///
/// # Arguments
///
/// * `state` - Current register value (0xFFFFFFFF at the start of a checksum)
/// * `data` - Input data to process
///
/// # Returns
///
/// Updated register value after processing the input data.
pub type Crc32Fn = fn(u32, &[u8]) -> u32;

/// Kernel name for the table-less bitwise kernel.
pub const BITWISE_KERNEL_NAME: &str = "portable/bitwise";

/// Buffer length used to report the representative backend.
pub const BACKEND_PROBE_LEN: usize = 1024;

/// A named kernel.
#[derive(Clone, Copy)]
pub struct Kernel {
  /// Human-readable kernel name.
  pub name: &'static str,
  /// The kernel function.
  pub func: Crc32Fn,
}

impl Kernel {
  pub const NIBBLE: Self = Self::new(NIBBLE_KERNEL_NAME, portable::crc32_nibble);
  pub const TABLE256: Self = Self::new(TABLE256_KERNEL_NAME, portable::crc32_table256);
  pub const BITWISE: Self = Self::new(BITWISE_KERNEL_NAME, bitwise::crc32::compute);

  /// Every kernel, for differential testing and benchmarks.
  pub const ALL: [Self; 3] = [Self::NIBBLE, Self::TABLE256, Self::BITWISE];

  #[must_use]
  pub const fn new(name: &'static str, func: Crc32Fn) -> Self {
    Self { name, func }
  }

  /// Run the kernel over `data` starting from register `state`.
  ///
  /// The result is the raw register. [`Crc32Mpeg2`](super::Crc32Mpeg2) starts
  /// every checksum from `INITIAL` and chains calls only inside
  /// `checksum_vectored`; there is no public streaming state.
  #[inline]
  #[must_use]
  pub fn call(self, state: u32, data: &[u8]) -> u32 {
    (self.func)(state, data)
  }
}

impl core::fmt::Debug for Kernel {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Kernel").field("name", &self.name).finish_non_exhaustive()
  }
}

/// Choose a kernel for a buffer of `len` bytes under `cfg`.
#[inline]
#[must_use]
pub fn select_with(cfg: &Crc32Mpeg2Config, len: usize) -> Kernel {
  match cfg.force {
    Crc32Mpeg2Force::Nibble => Kernel::NIBBLE,
    Crc32Mpeg2Force::Table => Kernel::TABLE256,
    Crc32Mpeg2Force::Bitwise => Kernel::BITWISE,
    Crc32Mpeg2Force::Auto => {
      if len < cfg.tunables.nibble_to_table {
        Kernel::NIBBLE
      } else {
        Kernel::TABLE256
      }
    }
  }
}

/// Choose a kernel for a buffer of `len` bytes under the active configuration.
#[inline]
#[must_use]
pub fn select(len: usize) -> Kernel {
  select_with(&config::get(), len)
}

/// Returns the kernel name that [`select`] would choose for `len`.
#[must_use]
pub fn kernel_name_for_len(len: usize) -> &'static str {
  select(len).name
}

/// Returns the kernel name chosen for a representative buffer.
#[must_use]
pub fn backend_name() -> &'static str {
  kernel_name_for_len(BACKEND_PROBE_LEN)
}
