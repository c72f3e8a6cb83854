use std::fmt;

/// Bytes reserved in the region ahead of every payload for the block header.
pub const METADATA_SIZE: usize = 32;

/// Stable handle to a block record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockId(usize);

impl BlockId {
  pub(crate) fn new(index: usize) -> Self {
    Self(index)
  }

  pub(crate) fn index(self) -> usize {
    self.0
  }
}

/// Which list currently owns a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockState {
  Used,
  Free,
}

/// Location of a payload, as an offset from the start of the region.
///
/// This is the value handed out by [`Arena::allocate`](crate::Arena::allocate)
/// and accepted back by every other operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Payload(usize);

impl Payload {
  pub(crate) fn new(offset: usize) -> Self {
    Self(offset)
  }

  /// Offset of the payload from the base of the region.
  pub fn offset(self) -> usize {
    self.0
  }
}

impl fmt::Display for Payload {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "+{:#x}", self.0)
  }
}

pub struct Block {
  pub size: usize,
  pub state: BlockState,
  pub payload: Payload,
  pub next: Option<BlockId>,
}

impl Block {
  /// Creates a used block whose header starts at `offset` in the region.
  pub fn carve(
    offset: usize,
    size: usize,
  ) -> Self {
    Self {
      size,
      state: BlockState::Used,
      payload: Payload::new(offset + METADATA_SIZE),
      next: None,
    }
  }

  /// Bytes the block occupies in the region, header included.
  pub fn footprint(&self) -> usize {
    METADATA_SIZE + self.size
  }

  pub fn is_free(&self) -> bool {
    self.state == BlockState::Free
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn payload_follows_header() {
    let block = Block::carve(64, 24);

    assert_eq!(block.payload.offset(), 64 + METADATA_SIZE);
    assert_eq!(block.footprint(), METADATA_SIZE + 24);
    assert!(!block.is_free());
    assert!(block.next.is_none());
  }
}
