//! Core checksum traits.
//!
//! This crate provides the trait that checksum implementations conform to,
//! and the error returned when verification fails. It is `no_std` compatible
//! and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | One-shot non-cryptographic checksum |
//! | [`VerificationError`] | Mismatch or truncated-buffer error |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;
pub mod error;

pub use checksum::Checksum;
pub use error::VerificationError;
