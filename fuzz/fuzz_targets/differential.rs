//! Differential fuzzing against a reference implementation.
//!
//! Compares our CRC-32/MPEG-2 against `crc-fast` to catch any discrepancies.

#![no_main]

use crc_fast::CrcAlgorithm;
use crc32_mpeg2::{Checksum, Crc32Mpeg2};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let ours = Crc32Mpeg2::checksum(data);
  let reference = crc_fast::checksum(CrcAlgorithm::Crc32Mpeg2, data) as u32;

  assert_eq!(
    ours, reference,
    "CRC-32/MPEG-2 differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours, reference, data.len()
  );
});
