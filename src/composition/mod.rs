//! Statically checked function composition.
//!
//! This module builds multi-stage pipelines out of ordinary single-argument,
//! single-return functions. The seam between two stages is verified by the
//! compiler: the output type of one stage must exactly equal the input type
//! of the next, with no implicit conversion, before the composed value is
//! ever constructed. A mismatched seam is a compile error, never a runtime
//! error value.
//!
//! # Overview
//!
//! - [`Stage`]: a callable wrapped together with its introspected signature
//!   and declared [`Capabilities`](crate::signature::Capabilities); exposes
//!   `compose` to bind a continuation and `call` to run the chain
//! - [`compose`]: a free function equivalent to `Stage::wrap(f).compose(g)`
//! - [`compose!`]: macro composing plain callables right to left
//!   (mathematical order)
//! - [`pipe!`]: macro threading a value through callables left to right
//! - [`identity`], [`constant`], [`flip`]: elementary combinators
//!
//! # Evaluation order
//!
//! Invoking a composed chain evaluates the stages left to right (in
//! composition order), exactly once per input, with no reordering and no
//! memoization. Side effects, if a stage has any, occur in that order.
//!
//! # Capabilities
//!
//! Each wrapped callable carries two declared flags, `infallible` and
//! `stateless`, combined with logical AND at every composition: a chain is
//! infallible only when every stage is.
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::composition::{Stage, compose};
//!
//! fn add_one(value: i32) -> i32 { value + 1 }
//! fn to_double(value: i32) -> f64 { f64::from(value) }
//!
//! let pipeline = Stage::wrap(add_one).compose(to_double);
//! assert_eq!(pipeline.call(4), 5.0);
//!
//! // The free function is equivalent: compose(f, g).call(x) == g(f(x))
//! assert_eq!(compose(add_one, to_double).call(4), 5.0);
//! ```

mod composer;
mod macros;
mod utils;

pub use composer::{Stage, compose};
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
