//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Const-fn lookup table generation
//! - The bitwise reference implementation used as a correctness oracle

pub mod reference;
pub mod tables;
