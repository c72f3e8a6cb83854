//! # fixed-arena - A Fixed-Capacity Arena Allocator
//!
//! This crate provides an **arena allocator** that serves every allocation out
//! of a single region reserved once from the operating system with `mmap(2)`.
//!
//! ## Overview
//!
//! New blocks are carved from the unused tail of the region. Freed blocks are
//! kept on a free list and handed out again, first-fit, before the tail is
//! touched:
//!
//! ```text
//!   Arena Layout:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                            REGION                                    │
//!   │                                                                      │
//!   │   ┌────┬──────┬────┬────────┬────┬────┬──────────────────────────┐   │
//!   │   │ H  │  A   │ H  │   B    │ H  │ C  │       Unused Tail        │   │
//!   │   └────┴──────┴────┴────────┴────┴────┴──────────────────────────┘   │
//!   │          used       free           used ▲                      ▲     │
//!   │                                         │                      │     │
//!   │                                   Carve Cursor             Capacity  │
//!   │                                                                      │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   used list: C -> A          free list: B
//! ```
//!
//! Every block reserves a header slot of [`METADATA_SIZE`] bytes in front of
//! its payload. The block records themselves live in a table owned by the
//! arena and are linked into the used and free lists by index.
//!
//! ## Crate Structure
//!
//! ```text
//!   fixed_arena
//!   ├── align      - Alignment granularity and the align! macro
//!   ├── arena      - Arena: allocate / deallocate / resize / inspect
//!   ├── block      - Block records, handles and payloads (internal)
//!   ├── config     - ArenaConfig
//!   ├── error      - ArenaError
//!   ├── inspect    - Inspection snapshot and its text dump
//!   ├── list       - Index-linked block lists (internal)
//!   └── region     - mmap-backed region (internal)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fixed_arena::Arena;
//!
//! let mut arena = Arena::with_default_capacity().unwrap();
//!
//! let name = arena.allocate(39).unwrap();
//! arena.bytes_mut(name).unwrap()[..4].copy_from_slice(b"adi\0");
//!
//! let grown = arena.resize(Some(name), 70).unwrap().unwrap();
//! assert_eq!(&arena.bytes(grown).unwrap()[..4], b"adi\0");
//!
//! arena.deallocate(Some(grown)).unwrap();
//! println!("{}", arena.inspect());
//! ```
//!
//! ## Behaviour
//!
//! - **Padding**: sizes are rounded up to a multiple of 8; aligned sizes are kept.
//! - **First-fit reuse**: the first free block large enough is reused whole,
//!   surplus included. Blocks are never split or coalesced.
//! - **No shrinking**: resizing to a size that already fits is a no-op.
//! - **Lenient frees**: freeing a payload that is not live is ignored.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: `Arena` is neither `Send` nor `Sync`
//! - **Fixed capacity**: the region never grows
//! - **Unix-only**: requires `libc` and `mmap` (POSIX systems)

pub mod align;
mod arena;
mod block;
pub mod config;
pub mod error;
pub mod inspect;
mod list;
mod region;

pub use arena::Arena;
pub use block::{METADATA_SIZE, Payload};
pub use config::ArenaConfig;
pub use error::{ArenaError, ArenaResult};
pub use inspect::{BlockSummary, Inspection};
