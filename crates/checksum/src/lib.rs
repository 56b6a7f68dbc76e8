//! CRC-32/MPEG-2 checksums with small-footprint table kernels.
//!
//! This crate computes the CRC-32/MPEG-2 checksum used by MPEG-2 transport
//! stream sections (ISO/IEC 13818-1, Annex A).
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Polynomial | 0x04C11DB7 |
//! | Initial value | 0xFFFFFFFF |
//! | Reflect input/output | No |
//! | Final XOR | None |
//! | Check (`"123456789"`) | 0x0376E6E7 |
//!
//! # Kernels
//!
//! | Kernel | Table | Selected |
//! |--------|-------|----------|
//! | `portable/nibble` | 16×u32 | buffers below the threshold (default 64 bytes) |
//! | `portable/table256` | 256×u32 | buffers at or above the threshold |
//! | `portable/bitwise` | none | only when forced |
//!
//! Selection can be overridden with `CRC32_MPEG2_FORCE` and
//! `CRC32_MPEG2_THRESHOLD_NIBBLE_TO_TABLE` (see [`crc32::config`]).
//!
//! # Example
//!
//! ```rust
//! use crc32_mpeg2::{Checksum, Crc32Mpeg2, crc32_mpeg2};
//!
//! // Byte slices
//! let crc = Crc32Mpeg2::checksum(b"123456789");
//! assert_eq!(crc, 0x0376_E6E7);
//!
//! // Any iterator of byte-like elements; only the low 8 bits are used
//! assert_eq!(crc32_mpeg2("123456789".chars()), crc);
//!
//! // Non-contiguous buffers
//! assert_eq!(Crc32Mpeg2::checksum_vectored(&[&b"1234"[..], &b"56789"[..]]), crc);
//!
//! // MPEG-2 section trailer
//! let mut section = b"payload".to_vec();
//! section.extend_from_slice(&Crc32Mpeg2::trailer(b"payload"));
//! assert!(Crc32Mpeg2::verify_trailer(&section).is_ok());
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use;
//! environment overrides are then ignored and the defaults apply:
//!
//! ```toml
//! [dependencies]
//! crc32-mpeg2 = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;

pub mod bitwise;
pub mod constants;
pub mod crc32;
mod input;
pub mod introspect;

pub use crc32::{Crc32Mpeg2, Crc32Mpeg2Config, Crc32Mpeg2Force, Crc32Mpeg2Tunables, crc32_mpeg2};
pub use input::LowByte;
pub use introspect::{KernelIntrospect, kernel_for};
// Re-export traits for convenience
pub use traits::{Checksum, VerificationError};
