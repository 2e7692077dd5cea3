/// Minimum stack space to keep available before recursing further.
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated each time the stack has to grow.
const STACK_PER_RECURSION: usize = 1024 * 1024;


/// Run `f`, growing the native stack first if less than the red zone remains.  Block compilation
/// and closure calls recurse once per nesting level, so nesting is bounded by memory rather than by
/// the size of the main thread's stack.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R
{
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
