/// Minimum stack space to keep available before recursing (256 KiB).
const RED_ZONE: usize = 256 * 1024;

/// Stack space to allocate when growing (2 MiB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Runs `f`, first growing the stack if less than the red zone remains.
///
/// # Example
/// ```
/// use monkey::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(100_000), 100_000);
/// ```
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
