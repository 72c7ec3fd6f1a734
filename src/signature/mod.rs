//! Signature introspection for unary callables.
//!
//! This module recovers, at compile time, the shape of a callable value —
//! its parameter type, its return type, and two declared behavioural
//! capabilities — so that composition seams can be checked before a pipeline
//! is ever invoked.
//!
//! # Overview
//!
//! - [`UnarySignature`]: a trait implemented for every `F: Fn(Input) -> Output`,
//!   exposing the return type as an associated type
//! - [`OutputOf`]: a type alias resolving the introspected return type
//! - [`Capabilities`]: the `infallible` and `stateless` flags attached to a
//!   wrapped callable, combined with logical AND at each composition
//!
//! # Static rejection
//!
//! A zero-argument or multi-argument callable has no [`UnarySignature`]
//! implementation for a one-argument context, so using one as a pipeline
//! stage fails to type-check at bind time. There are no runtime type tags:
//! a seam mismatch is a compile error, never a value.
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::signature::{Capabilities, OutputOf};
//!
//! fn double(value: i32) -> i64 {
//!     i64::from(value) * 2
//! }
//!
//! // The return type of `double` is recoverable from its signature alone.
//! let doubled: OutputOf<fn(i32) -> i64, i32> = double(21);
//! assert_eq!(doubled, 42);
//!
//! // Capabilities combine by logical AND.
//! let combined = Capabilities::total().join(Capabilities::fallible());
//! assert!(!combined.infallible);
//! assert!(combined.stateless);
//! ```

/// Compile-time introspection of a unary callable's signature.
///
/// Every callable that can be invoked with exactly one argument of type
/// `Input` — function pointers, closures, and function objects alike —
/// implements this trait through the blanket implementation, exposing its
/// return type as [`UnarySignature::Output`].
///
/// Callables of any other arity are not `Fn(Input) -> _` and therefore have
/// no implementation: resolving a parameter type for them fails, and any
/// composition built on top of this trait is rejected by the compiler.
///
/// # Examples
///
/// ```rust
/// use fluentseq::signature::UnarySignature;
///
/// fn describe<F, Input>(_: &F) -> &'static str
/// where
///     F: UnarySignature<Input>,
/// {
///     "unary"
/// }
///
/// let double = |x: i32| x * 2;
/// assert_eq!(describe::<_, i32>(&double), "unary");
/// ```
pub trait UnarySignature<Input> {
    /// The type produced by invoking the callable with an `Input`.
    type Output;
}

impl<Function, Input, Output> UnarySignature<Input> for Function
where
    Function: Fn(Input) -> Output,
{
    type Output = Output;
}

/// Resolves the introspected return type of a unary callable.
///
/// # Examples
///
/// ```rust
/// use fluentseq::signature::OutputOf;
///
/// fn measure(text: String) -> usize {
///     text.len()
/// }
///
/// let length: OutputOf<fn(String) -> usize, String> = measure(String::from("abc"));
/// assert_eq!(length, 3);
/// ```
///
/// A mismatched annotation fails to compile, because the alias resolves to
/// the callable's actual return type.
pub type OutputOf<Function, Input> = <Function as UnarySignature<Input>>::Output;

/// Behavioural capabilities declared for a wrapped callable.
///
/// Rust's type system carries a callable's parameter and return types but
/// not whether invocation can fail, so fallibility is declared explicitly
/// once, at wrap time, and validated at pipeline-assembly time — never per
/// call. Statelessness of the call operator itself is already guaranteed by
/// the `Fn` bound on wrapping; the `stateless` flag additionally covers
/// interior-mutability captures and must be declared truthfully.
///
/// When two stages are bound together, their capability sets are combined
/// with [`Capabilities::join`]: the chain is infallible only if every stage
/// is, and stateless only if every stage is.
///
/// # Examples
///
/// ```rust
/// use fluentseq::signature::Capabilities;
///
/// let total = Capabilities::total();
/// assert!(total.infallible);
/// assert!(total.stateless);
///
/// let chain = total.join(Capabilities::fallible());
/// assert!(!chain.infallible);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// True when invocation can never fail (panic or otherwise diverge).
    pub infallible: bool,
    /// True when invocation never mutates state captured by the callable.
    pub stateless: bool,
}

impl Capabilities {
    /// Declares a total, stateless callable. This is the default.
    #[must_use]
    pub const fn total() -> Self {
        Self {
            infallible: true,
            stateless: true,
        }
    }

    /// Declares a callable whose invocation may fail.
    #[must_use]
    pub const fn fallible() -> Self {
        Self {
            infallible: false,
            stateless: true,
        }
    }

    /// Declares a callable that mutates captured state when invoked.
    #[must_use]
    pub const fn stateful() -> Self {
        Self {
            infallible: true,
            stateless: false,
        }
    }

    /// Declares both flags explicitly.
    #[must_use]
    pub const fn new(infallible: bool, stateless: bool) -> Self {
        Self {
            infallible,
            stateless,
        }
    }

    /// Combines two capability sets across a composition seam.
    ///
    /// Both flags combine with logical AND: a composed chain is infallible
    /// only when every stage is infallible, and stateless only when every
    /// stage is stateless.
    #[must_use]
    pub const fn join(self, other: Self) -> Self {
        Self {
            infallible: self.infallible && other.infallible,
            stateless: self.stateless && other.stateless,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::total()
    }
}
