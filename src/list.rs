use crate::block::{Block, BlockId};

/// Singly-linked list threaded through the `next` links of block records.
///
/// The list only stores its head; the records themselves live in the arena's
/// block table and are passed in on every call.
#[derive(Debug, Default)]
pub struct BlockList {
  head: Option<BlockId>,
}

impl BlockList {
  pub fn new() -> Self {
    Self { head: None }
  }

  /// Pushes `id` at the head of the list.
  pub fn push(
    &mut self,
    blocks: &mut [Block],
    id: BlockId,
  ) {
    blocks[id.index()].next = self.head;
    self.head = Some(id);
  }

  /// Unlinks and returns the first block, from the head, matching `predicate`.
  pub fn remove_first<F>(
    &mut self,
    blocks: &mut [Block],
    predicate: F,
  ) -> Option<BlockId>
  where
    F: Fn(&Block) -> bool,
  {
    let mut prev: Option<BlockId> = None;
    let mut current = self.head;

    while let Some(id) = current {
      let block = &blocks[id.index()];
      let next = block.next;

      if predicate(block) {
        match prev {
          None => self.head = next,
          Some(prev) => blocks[prev.index()].next = next,
        }
        blocks[id.index()].next = None;
        return Some(id);
      }

      prev = Some(id);
      current = next;
    }

    None
  }

  pub fn iter<'a>(
    &self,
    blocks: &'a [Block],
  ) -> Iter<'a> {
    Iter {
      blocks,
      current: self.head,
    }
  }
}

pub struct Iter<'a> {
  blocks: &'a [Block],
  current: Option<BlockId>,
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a Block;

  fn next(&mut self) -> Option<Self::Item> {
    let block = &self.blocks[self.current?.index()];
    self.current = block.next;
    Some(block)
  }
}
