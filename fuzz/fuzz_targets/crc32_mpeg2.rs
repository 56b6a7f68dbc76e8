//! Fuzz target for CRC-32/MPEG-2.
//!
//! Tests that:
//! - Every kernel matches the one-shot result
//! - Vectored input matches one-shot
//! - The iterator fold (with wide, noisy elements) matches one-shot
//! - Appending the trailer always verifies

#![no_main]

use arbitrary::Arbitrary;
use crc32_mpeg2::{Checksum, Crc32Mpeg2, constants::INITIAL, crc32::policy::Kernel, crc32_mpeg2};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
  noise: u16,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);
  let oneshot = Crc32Mpeg2::checksum(data);

  for kernel in Kernel::ALL {
    assert_eq!(kernel.call(INITIAL, data), oneshot, "{} mismatch", kernel.name);
  }

  let (a, b) = data.split_at(split);
  assert_eq!(Crc32Mpeg2::checksum_vectored(&[a, b]), oneshot, "vectored mismatch");

  let noise = u32::from(input.noise) << 8;
  let wide = data.iter().map(|&byte| noise | u32::from(byte));
  assert_eq!(crc32_mpeg2(wide), oneshot, "iterator mismatch");

  let mut section = data.clone();
  section.extend_from_slice(&Crc32Mpeg2::trailer(data));
  assert!(Crc32Mpeg2::verify_trailer(&section).is_ok(), "trailer did not verify");
});
