//! Elementary combinators for function composition.
//!
//! - [`identity`]: returns its argument unchanged (the unit of composition)
//! - [`constant`]: ignores its input and always returns the same value
//! - [`flip`]: swaps the arguments of a binary function

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// `compose!(identity, f)` and `compose!(f, identity)` are both equivalent
/// to `f`. It is also the initial transformation chain of a lazy
/// [`Enumerable`](crate::sequence::Enumerable) before any `select` is bound.
///
/// # Examples
///
/// ```rust
/// use fluentseq::composition::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring input.
///
/// # Examples
///
/// ```rust
/// use fluentseq::composition::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
/// assert_eq!(always_five(-3), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)`, and flipping twice restores the original.
/// Useful for turning a "ranks before" comparator around when an
/// [`order_by`](crate::sequence::Sequence::order_by) pipeline needs the
/// descending order.
///
/// # Examples
///
/// ```rust
/// use fluentseq::composition::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
