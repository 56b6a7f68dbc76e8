//! CRC-32/MPEG-2 runtime configuration (overrides + thresholds).
//!
//! This module centralizes selection knobs for the portable kernels:
//! - nibble vs byte-table threshold
//! - optional forced kernel selection
//!
//! Overrides are read from the environment once (with the `std` feature) and
//! cached. Every kernel produces the same checksum, so configuration only
//! changes speed and table footprint.
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRC32_MPEG2_FORCE` | `auto`, `nibble`, `table`, `bitwise` |
//! | `CRC32_MPEG2_THRESHOLD_NIBBLE_TO_TABLE` | byte count |

/// Default buffer length at which the byte table takes over from the nibble table.
pub const DEFAULT_NIBBLE_TO_TABLE: usize = 64;

/// Environment variable selecting a forced kernel.
pub const ENV_FORCE: &str = "CRC32_MPEG2_FORCE";

/// Environment variable overriding [`DEFAULT_NIBBLE_TO_TABLE`].
pub const ENV_THRESHOLD_NIBBLE_TO_TABLE: &str = "CRC32_MPEG2_THRESHOLD_NIBBLE_TO_TABLE";

/// Forced kernel selection for CRC-32/MPEG-2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crc32Mpeg2Force {
  /// Use the default length-based selector.
  #[default]
  Auto,
  /// Force the 16-entry nibble table kernel.
  Nibble,
  /// Force the 256-entry byte table kernel.
  Table,
  /// Force the table-less bitwise kernel.
  Bitwise,
}

impl Crc32Mpeg2Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Nibble => "nibble",
      Self::Table => "table",
      Self::Bitwise => "bitwise",
    }
  }
}

/// CRC-32/MPEG-2 selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32Mpeg2Tunables {
  /// Bytes where the byte table becomes faster than the nibble table.
  pub nibble_to_table: usize,
}

impl Default for Crc32Mpeg2Tunables {
  fn default() -> Self {
    Self {
      nibble_to_table: DEFAULT_NIBBLE_TO_TABLE,
    }
  }
}

/// Full CRC-32/MPEG-2 runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Crc32Mpeg2Config {
  /// Force mode; every kernel is portable, so this is also the mode in effect.
  pub force: Crc32Mpeg2Force,
  /// Thresholds used by the selector.
  pub tunables: Crc32Mpeg2Tunables,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Crc32Mpeg2Force,
  nibble_to_table: Option<usize>,
}

/// Parse a force-mode value. Matching is trimmed and case-insensitive.
///
/// Returns `None` for empty or unrecognized values.
#[must_use]
pub fn parse_force(value: &str) -> Option<Crc32Mpeg2Force> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }

  if value.eq_ignore_ascii_case("auto") {
    return Some(Crc32Mpeg2Force::Auto);
  }
  if value.eq_ignore_ascii_case("nibble") || value.eq_ignore_ascii_case("nibble16") {
    return Some(Crc32Mpeg2Force::Nibble);
  }
  if value.eq_ignore_ascii_case("table")
    || value.eq_ignore_ascii_case("table256")
    || value.eq_ignore_ascii_case("slice")
  {
    return Some(Crc32Mpeg2Force::Table);
  }
  if value.eq_ignore_ascii_case("bitwise")
    || value.eq_ignore_ascii_case("bit")
    || value.eq_ignore_ascii_case("tableless")
  {
    return Some(Crc32Mpeg2Force::Bitwise);
  }

  None
}

/// Parse a byte threshold. Returns `None` for empty or non-numeric values.
#[must_use]
pub fn parse_threshold(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<usize>().ok()
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  let force = std::env::var(ENV_FORCE).ok().and_then(|v| parse_force(&v));
  let nibble_to_table = std::env::var(ENV_THRESHOLD_NIBBLE_TO_TABLE)
    .ok()
    .and_then(|v| parse_threshold(&v));

  Overrides {
    force: force.unwrap_or(Crc32Mpeg2Force::Auto),
    nibble_to_table,
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

#[inline]
#[must_use]
fn apply(ov: Overrides) -> Crc32Mpeg2Config {
  let mut tunables = Crc32Mpeg2Tunables::default();
  if let Some(v) = ov.nibble_to_table {
    tunables.nibble_to_table = v;
  }

  Crc32Mpeg2Config { force: ov.force, tunables }
}

/// Get the effective CRC-32/MPEG-2 configuration.
#[inline]
#[must_use]
pub fn get() -> Crc32Mpeg2Config {
  apply(overrides())
}
