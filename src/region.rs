use std::{io, ptr::NonNull, slice};

use libc::{MAP_ANONYMOUS, MAP_FAILED, MAP_PRIVATE, PROT_READ, PROT_WRITE, c_void, mmap, munmap};
use log::{debug, error};

use crate::error::{ArenaError, ArenaResult};

/// Fixed-size block of anonymous memory obtained from the host with `mmap(2)`.
///
/// The mapping is never grown. It is released only when the region is dropped.
pub struct Region {
  base: NonNull<u8>,
  capacity: usize,
}

impl Region {
  pub fn reserve(capacity: usize) -> ArenaResult<Self> {
    let address = unsafe {
      mmap(
        std::ptr::null_mut(),
        capacity,
        PROT_READ | PROT_WRITE,
        MAP_PRIVATE | MAP_ANONYMOUS,
        -1,
        0,
      )
    };

    if address == MAP_FAILED {
      let source = io::Error::last_os_error();
      error!("mmap of {} bytes failed: {}", capacity, source);
      return Err(ArenaError::RegionReservation { capacity, source });
    }

    let base = NonNull::new(address as *mut u8).ok_or_else(|| ArenaError::RegionReservation {
      capacity,
      source: io::Error::other("mmap returned a null mapping"),
    })?;

    debug!("reserved {} bytes at {:?}", capacity, base);

    Ok(Self { base, capacity })
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn base(&self) -> NonNull<u8> {
    self.base
  }

  pub fn as_slice(&self) -> &[u8] {
    // The mapping is readable and lives as long as `self`.
    unsafe { slice::from_raw_parts(self.base.as_ptr(), self.capacity) }
  }

  pub fn as_mut_slice(&mut self) -> &mut [u8] {
    unsafe { slice::from_raw_parts_mut(self.base.as_ptr(), self.capacity) }
  }
}

impl Drop for Region {
  fn drop(&mut self) {
    let result = unsafe { munmap(self.base.as_ptr() as *mut c_void, self.capacity) };

    if result != 0 {
      error!(
        "munmap of {} bytes at {:?} failed: {}",
        self.capacity,
        self.base,
        io::Error::last_os_error()
      );
    }
  }
}
