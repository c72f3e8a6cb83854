use std::ptr::NonNull;

use log::{debug, trace, warn};

use crate::{
  align,
  block::{Block, BlockId, BlockState, METADATA_SIZE, Payload},
  config::ArenaConfig,
  error::{ArenaError, ArenaResult},
  inspect::{BlockSummary, Inspection},
  list::BlockList,
  region::Region,
};

/// Fixed-capacity arena serving every allocation out of one region.
///
/// New blocks are carved from the unused tail of the region. Freed blocks go
/// to a free list and are handed out again first-fit; they never go back to
/// the tail, are never split and never merged with their neighbours.
pub struct Arena {
  region: Region,
  /// Block records in carve order, which is also payload order.
  blocks: Vec<Block>,
  used: BlockList,
  free: BlockList,
  /// Footprint of the blocks currently on the used list.
  consumed: usize,
  /// Offset of the first byte never handed out.
  carved: usize,
}

impl Arena {
  pub fn new(config: ArenaConfig) -> ArenaResult<Self> {
    config.validate()?;
    let region = Region::reserve(config.capacity)?;

    Ok(Self {
      region,
      blocks: Vec::new(),
      used: BlockList::new(),
      free: BlockList::new(),
      consumed: 0,
      carved: 0,
    })
  }

  pub fn with_default_capacity() -> ArenaResult<Self> {
    Self::new(ArenaConfig::default())
  }

  pub fn capacity(&self) -> usize {
    self.region.capacity()
  }

  pub fn consumed(&self) -> usize {
    self.consumed
  }

  pub fn carved(&self) -> usize {
    self.carved
  }

  /// Bytes still available for carving new blocks, headers included.
  pub fn remaining(&self) -> usize {
    self.capacity() - self.carved
  }

  /// Returns a payload of at least `size` bytes.
  ///
  /// The free list is searched first; the first block large enough is reused
  /// as is, surplus included. Otherwise a new block is carved from the tail.
  pub fn allocate(
    &mut self,
    size: usize,
  ) -> ArenaResult<Payload> {
    if size == 0 {
      warn!("size must be positive");
      return Err(ArenaError::InvalidSize);
    }

    if size > self.capacity() {
      return Err(self.out_of_memory(size));
    }

    let padded = align!(size);

    if let Some(id) = self.free.remove_first(&mut self.blocks, |block| block.size >= padded) {
      let block = &mut self.blocks[id.index()];
      block.state = BlockState::Used;
      self.consumed += block.footprint();
      let payload = block.payload;
      debug!(
        "reused free block {} ({} bytes) for a {} byte request",
        payload, block.size, padded
      );

      self.used.push(&mut self.blocks, id);
      return Ok(payload);
    }

    if self.carved + METADATA_SIZE + padded > self.capacity() {
      return Err(self.out_of_memory(padded));
    }

    let block = Block::carve(self.carved, padded);
    let payload = block.payload;
    let id = BlockId::new(self.blocks.len());

    self.carved += block.footprint();
    self.consumed += block.footprint();
    self.blocks.push(block);
    self.used.push(&mut self.blocks, id);
    debug!("carved block {} ({} bytes)", payload, padded);

    Ok(payload)
  }

  /// Moves a live block to the free list.
  ///
  /// `None` is reported as [`ArenaError::NullPointerFree`]. A payload that is
  /// not live (foreign, or already freed) is ignored.
  pub fn deallocate(
    &mut self,
    payload: Option<Payload>,
  ) -> ArenaResult<()> {
    let Some(payload) = payload else {
      warn!("null payload cannot be freed");
      return Err(ArenaError::NullPointerFree);
    };

    let Some(id) = self.used.remove_first(&mut self.blocks, |block| block.payload == payload) else {
      trace!("ignoring free of unknown payload {}", payload);
      return Ok(());
    };

    let block = &mut self.blocks[id.index()];
    block.state = BlockState::Free;
    self.consumed -= block.footprint();
    debug!("freed block {} ({} bytes)", payload, block.size);

    self.free.push(&mut self.blocks, id);
    Ok(())
  }

  /// Grows a live allocation to hold `size` bytes.
  ///
  /// * `None` behaves like [`allocate`](Self::allocate).
  /// * `size == 0` frees the payload and returns `None`.
  /// * A size that already fits returns the same payload untouched.
  /// * Otherwise a new block is allocated, the whole old block is copied into
  ///   it and the old one is freed. If the allocation fails the old block is
  ///   left live.
  pub fn resize(
    &mut self,
    payload: Option<Payload>,
    size: usize,
  ) -> ArenaResult<Option<Payload>> {
    let Some(payload) = payload else {
      return self.allocate(size).map(Some);
    };

    if size == 0 {
      self.deallocate(Some(payload))?;
      return Ok(None);
    }

    let stored = self
      .live_block(payload)
      .ok_or(ArenaError::UnknownPayload {
        offset: payload.offset(),
      })?
      .size;

    if size <= stored {
      return Ok(Some(payload));
    }

    let moved = self.allocate(size).map_err(|source| ArenaError::ResizeFailure {
      source: Box::new(source),
    })?;

    let src = payload.offset();
    self
      .region
      .as_mut_slice()
      .copy_within(src..src + stored, moved.offset());
    self.deallocate(Some(payload))?;
    debug!("moved {} bytes from {} to {}", stored, payload, moved);

    Ok(Some(moved))
  }

  /// Snapshot of both lists, newest first, and the counters.
  pub fn inspect(&self) -> Inspection {
    let summarize = |block: &Block| BlockSummary {
      payload: block.payload,
      address: self.region.base().as_ptr() as usize + block.payload.offset(),
      size: block.size,
    };

    Inspection {
      used: self.used.iter(&self.blocks).map(summarize).collect(),
      free: self.free.iter(&self.blocks).map(summarize).collect(),
      consumed: self.consumed,
      carved: self.carved,
      capacity: self.capacity(),
    }
  }

  /// Padded size of a live allocation.
  pub fn size_of(
    &self,
    payload: Payload,
  ) -> Option<usize> {
    self.live_block(payload).map(|block| block.size)
  }

  /// Bytes of a live allocation, padding included.
  pub fn bytes(
    &self,
    payload: Payload,
  ) -> Option<&[u8]> {
    let size = self.size_of(payload)?;
    let start = payload.offset();
    Some(&self.region.as_slice()[start..start + size])
  }

  pub fn bytes_mut(
    &mut self,
    payload: Payload,
  ) -> Option<&mut [u8]> {
    let size = self.size_of(payload)?;
    let start = payload.offset();
    Some(&mut self.region.as_mut_slice()[start..start + size])
  }

  /// Raw address of a live allocation.
  pub fn as_ptr(
    &self,
    payload: Payload,
  ) -> Option<NonNull<u8>> {
    self.live_block(payload)?;
    // Payload offsets always fall inside the mapping.
    NonNull::new(self.region.base().as_ptr().wrapping_add(payload.offset()))
  }

  fn live_block(
    &self,
    payload: Payload,
  ) -> Option<&Block> {
    let index = self
      .blocks
      .binary_search_by_key(&payload, |block| block.payload)
      .ok()?;
    let block = &self.blocks[index];
    (!block.is_free()).then_some(block)
  }

  fn out_of_memory(
    &self,
    requested: usize,
  ) -> ArenaError {
    warn!(
      "insufficient storage: {} bytes requested, {} of {} bytes carved",
      requested,
      self.carved,
      self.capacity()
    );
    ArenaError::OutOfMemory {
      requested,
      available: self.remaining(),
    }
  }
}
