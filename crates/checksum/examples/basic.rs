//! Basic checksum usage: slices, iterators, vectored input, section trailers.
//!
//! Run with: `cargo run --example basic -p crc32-mpeg2`

use crc32_mpeg2::{Checksum, Crc32Mpeg2, crc32_mpeg2, kernel_for};

fn main() {
  println!("=== CRC-32/MPEG-2 Examples ===\n");

  one_shot_examples();
  section_example();
  introspection_example();
}

/// One-shot computation over the different input shapes.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  let crc = Crc32Mpeg2::checksum(data);
  println!("Slice:     0x{crc:08X}");
  assert_eq!(crc, 0x0376_E6E7);

  // Any iterator works; only the low byte of each element is used.
  let wide: Vec<u16> = data.iter().map(|&b| 0xFF00 | u16::from(b)).collect();
  let from_iter = crc32_mpeg2(&wide);
  println!("Iterator:  0x{from_iter:08X}");
  assert_eq!(from_iter, crc);

  // Non-contiguous buffers, processed in order.
  let (head, tail) = data.split_at(4);
  let vectored = Crc32Mpeg2::checksum_vectored(&[head, tail]);
  println!("Vectored:  0x{vectored:08X}");
  assert_eq!(vectored, crc);

  // Empty input leaves the initial value.
  println!("Empty:     0x{:08X}", Crc32Mpeg2::checksum(&[]));

  println!();
}

/// Append and verify the `CRC_32` field of an MPEG-2 PSI section.
fn section_example() {
  println!("--- MPEG-2 Section Trailer ---\n");

  // Program Association Table: one program (1) on PMT PID 0x1000.
  let payload: [u8; 12] = [0x00, 0xB0, 0x0D, 0x00, 0x01, 0xC1, 0x00, 0x00, 0x00, 0x01, 0xF0, 0x00];

  let mut section = payload.to_vec();
  section.extend_from_slice(&Crc32Mpeg2::trailer(&payload));
  println!("Section:   {:02X?}", section);

  match Crc32Mpeg2::verify_trailer(&section) {
    Ok(()) => println!("Verified:  trailer matches"),
    Err(err) => println!("Error:     {err}"),
  }

  section[5] ^= 0x01;
  match Crc32Mpeg2::verify_trailer(&section) {
    Ok(()) => println!("Unexpected: corrupted section verified"),
    Err(err) => println!("Corrupted: {err}"),
  }

  if let Err(err) = Crc32Mpeg2::verify_trailer(&section[..2]) {
    println!("Truncated: {err}");
  }

  println!();
}

/// Show which kernel handles which buffer size.
fn introspection_example() {
  println!("--- Kernel Selection ---\n");

  println!("Backend:   {}", Crc32Mpeg2::backend_name());
  for len in [16usize, 64, 4096] {
    println!("{len:>5} B:   {}", kernel_for::<Crc32Mpeg2>(len));
  }
  println!("Config:    {:?}", Crc32Mpeg2::config());

  println!();
}
