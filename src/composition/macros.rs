//! The `compose!` and `pipe!` macros.
//!
//! Both macros build plain closures over any number of callables. The seam
//! requirement is the same one [`Stage`](crate::composition::Stage)
//! enforces: each callable's output type must equal the next callable's
//! input type, checked by the compiler when the closure is built.

/// Composes callables from right to left (mathematical order).
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// callable is applied first. For data-flow order, see
/// [`pipe!`](crate::pipe) or the free
/// [`compose`](crate::composition::compose) function.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```rust
/// use fluentseq::compose;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// // compose!(f, g)(x) = f(g(x)) = add_one(double(5)) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// Types flow through the chain:
///
/// ```rust
/// use fluentseq::compose;
///
/// fn to_text(value: i32) -> String { value.to_string() }
/// fn length(text: String) -> usize { text.len() }
///
/// let composed = compose!(length, to_text);
/// assert_eq!(composed(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    // Single callable: nothing to compose
    ($function:expr) => {
        $function
    };

    // Two callables: compose!(f, g)(x) = f(g(x))
    ($last:expr, $first:expr $(,)?) => {{
        let last = $last;
        let first = $first;
        move |argument| last(first(argument))
    }};

    // Three or more: peel the leftmost, recurse on the rest
    ($last:expr, $($rest:expr),+ $(,)?) => {{
        let last = $last;
        let rest = $crate::compose!($($rest),+);
        move |argument| last(rest(argument))
    }};
}

/// Threads a value through callables from left to right.
///
/// `pipe!(x, f, g)` is equivalent to `g(f(x))`, matching the mental model
/// of data flowing through transformations.
///
/// # Examples
///
/// ```rust
/// use fluentseq::pipe;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// // pipe!(x, f, g) = g(f(x)) = add_one(double(5)) = 11
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// Equivalence with `compose!`:
///
/// ```rust
/// use fluentseq::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(10, f, g), compose!(g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: nothing to apply
    ($value:expr) => {
        $value
    };

    // Single callable
    ($value:expr, $stage:expr $(,)?) => {
        $stage($value)
    };

    // Thread the applied value through the remaining callables
    ($value:expr, $stage:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($stage($value), $($rest),+)
    };
}
