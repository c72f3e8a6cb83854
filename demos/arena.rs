use fixed_arena::{Arena, ArenaResult, Payload};

/// Copies `text` into the start of a live allocation, truncated to fit.
fn write_str(
  arena: &mut Arena,
  payload: Payload,
  text: &[u8],
) {
  if let Some(bytes) = arena.bytes_mut(payload) {
    let len = text.len().min(bytes.len());
    bytes[..len].copy_from_slice(&text[..len]);
  }
}

fn main() -> ArenaResult<()> {
  // RUST_LOG=debug shows every carve, reuse and free decision.
  env_logger::init();

  let mut arena = Arena::with_default_capacity()?;

  // --------------------------------------------------------------------
  // 1) 39 bytes are padded to 40 and carved from the start of the region.
  // --------------------------------------------------------------------
  let first = arena.allocate(39)?;
  print!("{}", arena.inspect());
  write_str(&mut arena, first, b"adi\0");
  println!();

  // --------------------------------------------------------------------
  // 2) A second block, right behind the first one.
  // --------------------------------------------------------------------
  let second = arena.allocate(20)?;
  print!("{}", arena.inspect());
  println!();
  write_str(&mut arena, second, b"adithya\0");
  println!();

  // --------------------------------------------------------------------
  // 3) Freeing the first block moves it to the free list.
  // --------------------------------------------------------------------
  arena.deallocate(Some(first))?;
  print!("{}", arena.inspect());
  println!();

  // --------------------------------------------------------------------
  // 4) 70 bytes don't fit in the freed 40 byte block, so the second block
  //    is copied into a freshly carved one and freed.
  // --------------------------------------------------------------------
  let second = arena.resize(Some(second), 70)?;
  print!("{}", arena.inspect());

  if let Some(bytes) = second.and_then(|payload| arena.bytes(payload)) {
    println!("moved contents: {:?}", String::from_utf8_lossy(&bytes[..7]));
  }

  Ok(())
}
