use fixed_arena::{Arena, ArenaConfig, ArenaError, METADATA_SIZE, Payload, align};
use proptest::prelude::*;

const CAPACITY: usize = 4096;

fn arena() -> Arena {
  Arena::new(ArenaConfig::new(CAPACITY)).unwrap()
}

fn payloads(entries: &[fixed_arena::BlockSummary]) -> Vec<Payload> {
  entries.iter().map(|entry| entry.payload).collect()
}

#[test]
fn name_buffer_walkthrough() {
  let mut arena = Arena::with_default_capacity().unwrap();

  let a = arena.allocate(39).unwrap();
  assert_eq!(arena.size_of(a), Some(40));
  arena.bytes_mut(a).unwrap()[..4].copy_from_slice(b"adi\0");

  let b = arena.allocate(20).unwrap();
  arena.bytes_mut(b).unwrap()[..8].copy_from_slice(b"adithya\0");
  let b_bytes = arena.bytes(b).unwrap().to_vec();

  arena.deallocate(Some(a)).unwrap();

  let c = arena.resize(Some(b), 70).unwrap().unwrap();
  assert_ne!(c, b);
  assert_ne!(c, a);
  assert_eq!(&arena.bytes(c).unwrap()[..b_bytes.len()], b_bytes.as_slice());

  let inspection = arena.inspect();
  assert_eq!(payloads(&inspection.used), vec![c]);
  assert_eq!(payloads(&inspection.free), vec![b, a]);
  assert_eq!(inspection.consumed, METADATA_SIZE + 72);
  assert_eq!(inspection.carved, 3 * METADATA_SIZE + 40 + 24 + 72);

  let report = inspection.to_string();
  assert!(report.contains("Current Memory in allocated:"));
  assert!(report.contains(&format!("\t{:#x} 72\n", inspection.used[0].address)));
  assert!(report.contains("Total Size: 104\n"));
}

#[test]
fn zero_size_always_fails() {
  let mut arena = arena();
  arena.allocate(100).unwrap();

  assert!(matches!(arena.allocate(0), Err(ArenaError::InvalidSize)));
}

#[test]
fn arenas_are_independent() {
  let mut left = arena();
  let mut right = arena();

  let l = left.allocate(16).unwrap();
  let r = right.allocate(16).unwrap();
  left.bytes_mut(l).unwrap().fill(1);
  right.bytes_mut(r).unwrap().fill(2);

  assert_eq!(l, r);
  assert!(left.bytes(l).unwrap().iter().all(|&byte| byte == 1));
  assert!(right.bytes(r).unwrap().iter().all(|&byte| byte == 2));
}

#[test]
fn invalid_config_fails_before_reserving() {
  assert!(matches!(
    Arena::new(ArenaConfig::new(16)),
    Err(ArenaError::InvalidConfig { .. })
  ));
}

proptest! {
  #[test]
  fn fresh_arena_serves_any_fitting_size(size in 1..=CAPACITY - METADATA_SIZE) {
    let mut arena = arena();
    let p = arena.allocate(size).unwrap();

    let bytes = arena.bytes_mut(p).unwrap();
    prop_assert_eq!(bytes.len(), align!(size));
    bytes.fill(0x5A);
    prop_assert!(arena.bytes(p).unwrap().iter().all(|&byte| byte == 0x5A));
  }

  #[test]
  fn largest_request_fits_every_accepted_capacity(capacity in 0usize..1024, size in any::<prop::sample::Index>()) {
    match Arena::new(ArenaConfig::new(capacity)) {
      Ok(mut arena) => {
        let largest = capacity - METADATA_SIZE;
        prop_assert!(arena.allocate(largest).is_ok());

        let mut fresh = Arena::new(ArenaConfig::new(capacity)).unwrap();
        prop_assert!(fresh.allocate(size.index(largest) + 1).is_ok());
      }
      Err(ArenaError::InvalidConfig { .. }) => {
        prop_assert!(capacity % 8 != 0 || capacity < METADATA_SIZE + 8);
      }
      Err(other) => prop_assert!(false, "unexpected error: {}", other),
    }
  }

  #[test]
  fn exhaustion_happens_exactly_at_capacity(sizes in prop::collection::vec(1usize..512, 1..64)) {
    let mut arena = arena();

    for size in sizes {
      let fits = arena.consumed() + align!(size) + METADATA_SIZE <= CAPACITY;
      match arena.allocate(size) {
        Ok(_) => prop_assert!(fits),
        Err(ArenaError::OutOfMemory { .. }) => prop_assert!(!fits),
        Err(other) => prop_assert!(false, "unexpected error: {}", other),
      }
    }
  }

  #[test]
  fn freed_block_is_reused_for_smaller_requests(first in 1usize..256, second in 1usize..256) {
    let mut arena = arena();
    let p = arena.allocate(first).unwrap();
    arena.allocate(8).unwrap();
    arena.deallocate(Some(p)).unwrap();

    let q = arena.allocate(second).unwrap();
    if align!(second) <= align!(first) {
      prop_assert_eq!(q, p);
    } else {
      prop_assert_ne!(q, p);
    }
  }

  #[test]
  fn repeated_frees_change_nothing(sizes in prop::collection::vec(1usize..128, 1..16), victim in any::<prop::sample::Index>()) {
    let mut arena = arena();
    let live: Vec<Payload> = sizes.iter().map(|&size| arena.allocate(size).unwrap()).collect();
    let p = live[victim.index(live.len())];

    arena.deallocate(Some(p)).unwrap();
    let before = arena.inspect();

    arena.deallocate(Some(p)).unwrap();
    prop_assert!(matches!(arena.deallocate(None), Err(ArenaError::NullPointerFree)));

    prop_assert_eq!(arena.inspect(), before);
  }

  #[test]
  fn resize_keeps_contents(old in 1usize..256, new in 1usize..512, seed in any::<u8>()) {
    let mut arena = arena();
    let p = arena.allocate(old).unwrap();
    for (i, byte) in arena.bytes_mut(p).unwrap().iter_mut().enumerate() {
      *byte = seed.wrapping_add(i as u8);
    }
    let original = arena.bytes(p).unwrap().to_vec();

    let q = arena.resize(Some(p), new).unwrap().unwrap();
    if new <= original.len() {
      prop_assert_eq!(q, p);
    } else {
      prop_assert_ne!(q, p);
      prop_assert_eq!(arena.size_of(p), None);
    }

    let kept = original.len().min(new);
    prop_assert_eq!(&arena.bytes(q).unwrap()[..kept], &original[..kept]);
  }
}
