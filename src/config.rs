//! Arena configuration.

use crate::{
  align,
  align::ALIGNMENT,
  block::METADATA_SIZE,
  error::{ArenaError, ArenaResult},
};

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated when the arena is created; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
  /// Size of the backing region in bytes.
  ///
  /// Default: 65536. Headers count against it, so the largest single
  /// request a fresh arena can satisfy is `capacity - METADATA_SIZE`.
  pub capacity: usize,
}

impl ArenaConfig {
  /// Default region size: 64 KiB.
  pub const DEFAULT_CAPACITY: usize = 65536;

  pub fn new(capacity: usize) -> Self {
    Self { capacity }
  }

  /// Checks that the region is aligned and can hold at least one minimal block.
  pub fn validate(&self) -> ArenaResult<()> {
    if self.capacity % ALIGNMENT != 0 {
      return Err(ArenaError::InvalidConfig {
        reason: format!(
          "capacity {} is not a multiple of {} bytes",
          self.capacity, ALIGNMENT
        ),
      });
    }

    let minimum = METADATA_SIZE + align!(1);
    if self.capacity < minimum {
      return Err(ArenaError::InvalidConfig {
        reason: format!(
          "capacity {} is below the minimum of {} bytes",
          self.capacity, minimum
        ),
      });
    }
    Ok(())
  }
}

impl Default for ArenaConfig {
  fn default() -> Self {
    Self::new(Self::DEFAULT_CAPACITY)
  }
}
