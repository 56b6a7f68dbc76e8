//! Table-less CRC implementation using branchless bitwise computation.
//!
//! This module provides "zero table" CRC computation for environments where
//! even a 64-byte lookup table is undesirable:
//!
//! - **Bootloaders**: Minimal code size requirements
//! - **Startup code**: Checks that run before `.data` is initialized
//!
//! # Performance
//!
//! | Implementation | Memory |
//! |----------------|--------|
//! | Byte table | 1 KB |
//! | Nibble table | 64 bytes |
//! | **Bitwise (this module)** | **0 bytes** |

pub mod crc32;
