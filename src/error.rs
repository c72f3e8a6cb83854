use std::io;

use thiserror::Error;

pub type ArenaResult<T> = Result<T, ArenaError>;

/// Failures reported by the arena.
///
/// Freeing a payload the arena doesn't know about (including a double free) is
/// not an error: it is absorbed silently.
#[derive(Error, Debug)]
pub enum ArenaError {
  #[error("size must be positive")]
  InvalidSize,

  #[error("out of memory: requested {requested} bytes, {available} bytes left in the region")]
  OutOfMemory { requested: usize, available: usize },

  #[error("null payload cannot be freed")]
  NullPointerFree,

  #[error("payload {offset:#x} is not a live allocation")]
  UnknownPayload { offset: usize },

  #[error("resize failed, original allocation kept")]
  ResizeFailure {
    #[source]
    source: Box<ArenaError>,
  },

  #[error("invalid arena configuration: {reason}")]
  InvalidConfig { reason: String },

  #[error("failed to reserve {capacity} bytes for the region")]
  RegionReservation {
    capacity: usize,
    #[source]
    source: io::Error,
  },
}
