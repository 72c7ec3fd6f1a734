//! # fluentseq
//!
//! A functional pipeline library for Rust providing LINQ-style sequence
//! operators and statically checked function composition.
//!
//! ## Overview
//!
//! This library provides a small set of building blocks for assembling
//! data-processing pipelines out of ordinary single-argument functions:
//!
//! - **Signature Introspection**: compile-time recovery of a unary callable's
//!   parameter and return types, plus declared behavioural capabilities
//! - **Function Composition**: the [`Stage`](composition::Stage) wrapper,
//!   the free [`compose`](composition::compose) function, and the `compose!`
//!   and `pipe!` macros
//! - **Eager Sequences**: [`Sequence`](sequence::Sequence), an owned ordered
//!   container with `where_by`, `select`, `order_by`, `take`, `average`,
//!   `aggregate`, and `for_each` operators
//! - **Lazy Sequences**: [`Enumerable`](sequence::Enumerable) and
//!   [`Enumerator`](sequence::Enumerator), a pull-based cursor over a shared
//!   read-only buffer that composes transformations instead of materializing
//!   intermediate buffers
//!
//! Composability is a static property: binding two stages whose seam types
//! disagree is a compile error, never a runtime error value.
//!
//! ## Feature Flags
//!
//! - `composition`: signature introspection and function composition
//! - `sequence`: eager and lazy sequences, rules, and the error taxonomy
//! - `arc`: share lazy backing buffers with `Arc` instead of `Rc`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fluentseq::prelude::*;
//!
//! let squares: Sequence<i32> = sequence![1, 2, 3, 4]
//!     .where_by(|value| value % 2 == 0)
//!     .select(|value| value * value);
//!
//! assert_eq!(squares, sequence![4, 16]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fluentseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "composition")]
    pub use crate::signature::*;

    #[cfg(feature = "composition")]
    pub use crate::composition::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "composition")]
pub mod signature;

#[cfg(feature = "composition")]
pub mod composition;

#[cfg(feature = "sequence")]
pub mod sequence;
