//! Property-based tests for CRC-32/MPEG-2.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use crc_fast::CrcAlgorithm;
use crc32_mpeg2::{Checksum, Crc32Mpeg2, constants, crc32::policy::Kernel, crc32_mpeg2};
use proptest::prelude::*;

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

/// Split `data` at the (clamped, sorted) split points.
fn split_at_points<'a>(data: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
  let mut parts = Vec::with_capacity(splits.len() + 1);
  let mut prev = 0;
  for &split in splits {
    let split = split.min(data.len());
    if split > prev {
      parts.push(&data[prev..split]);
      prev = split;
    }
  }
  parts.push(&data[prev..]);
  parts
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(1000))]

  #[test]
  fn oneshot_matches_crc_fast(data in arb_data()) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32Mpeg2, &data) as u32;
    prop_assert_eq!(Crc32Mpeg2::checksum(&data), reference);
  }

  #[test]
  fn iterator_matches_oneshot(data in arb_data()) {
    prop_assert_eq!(crc32_mpeg2(&data), Crc32Mpeg2::checksum(&data));
  }

  #[test]
  fn kernels_agree(data in arb_data()) {
    let expected = Crc32Mpeg2::checksum(&data);
    for kernel in Kernel::ALL {
      prop_assert_eq!(kernel.call(constants::INITIAL, &data), expected, "{}", kernel.name);
    }
  }

  #[test]
  fn vectored_equals_oneshot(data in arb_data(), splits in arb_splits(8192, 5)) {
    let parts = split_at_points(&data, &splits);
    prop_assert_eq!(Crc32Mpeg2::checksum_vectored(&parts), Crc32Mpeg2::checksum(&data));
  }

  #[test]
  fn high_bits_are_ignored(data in arb_data(), noise in any::<u32>()) {
    let noisy: Vec<u32> = data.iter().map(|&b| (noise << 8) | u32::from(b)).collect();
    prop_assert_eq!(crc32_mpeg2(noisy), Crc32Mpeg2::checksum(&data));
  }

  #[test]
  fn single_bit_flip_changes_checksum(
    data in prop::collection::vec(any::<u8>(), 1..4096),
    index in any::<usize>(),
    bit in 0u8..8
  ) {
    let index = index % data.len();
    let mut flipped = data.clone();
    flipped[index] ^= 1 << bit;
    prop_assert_ne!(Crc32Mpeg2::checksum(&flipped), Crc32Mpeg2::checksum(&data));
  }

  #[test]
  fn trailer_round_trip_verifies(data in arb_data()) {
    let mut section = data.clone();
    section.extend_from_slice(&Crc32Mpeg2::trailer(&data));
    prop_assert!(Crc32Mpeg2::verify_trailer(&section).is_ok());
  }

  #[test]
  fn corrupted_trailer_fails(data in arb_data(), mask in 1u32..) {
    let bad = Crc32Mpeg2::checksum(&data) ^ mask;
    let mut section = data.clone();
    section.extend_from_slice(&bad.to_be_bytes());
    prop_assert!(Crc32Mpeg2::verify_trailer(&section).is_err());
    prop_assert!(Crc32Mpeg2::verify(&data, bad).is_err());
  }
}
