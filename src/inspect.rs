use std::fmt;

use crate::block::Payload;

const RULE: &str = "-----------------------------------";

/// One entry of an [`Inspection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockSummary {
  pub payload: Payload,
  /// Absolute address of the payload in the process.
  pub address: usize,
  /// Padded payload size.
  pub size: usize,
}

/// Read-only snapshot of an arena, as returned by
/// [`Arena::inspect`](crate::Arena::inspect).
///
/// The `Display` impl renders the classic text dump:
///
/// ```text
/// -----------------------------------
/// Current Memory in allocated:
///         0x7f3a1c000020 40
/// Memory in freed:
/// Total Size: 72
/// -----------------------------------
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inspection {
  /// Live blocks, newest first.
  pub used: Vec<BlockSummary>,
  /// Reclaimed blocks in first-fit search order.
  pub free: Vec<BlockSummary>,
  pub consumed: usize,
  pub carved: usize,
  pub capacity: usize,
}

impl fmt::Display for Inspection {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    writeln!(f, "Current Memory in allocated:")?;
    for entry in &self.used {
      writeln!(f, "\t{:#x} {}", entry.address, entry.size)?;
    }

    writeln!(f, "Memory in freed:")?;
    for entry in &self.free {
      writeln!(f, "\t{:#x} {}", entry.address, entry.size)?;
    }

    writeln!(f, "Total Size: {}", self.consumed)?;
    writeln!(f, "{RULE}")
  }
}
