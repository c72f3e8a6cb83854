/// Alignment granularity, in bytes, of every block size handed out by the arena.
pub const ALIGNMENT: usize = 8;

/// Rounds the given size up to the next multiple of [`ALIGNMENT`].
///
/// Sizes that are already aligned are left unchanged.
///
/// # Examples
///
/// ```rust
/// use fixed_arena::align;
///
/// assert_eq!(align!(1), 8);
/// assert_eq!(align!(8), 8);
/// assert_eq!(align!(39), 40);
/// ```
#[macro_export]
macro_rules! align {
  ($value:expr) => {
    ($value + $crate::align::ALIGNMENT - 1) & !($crate::align::ALIGNMENT - 1)
  };
}
