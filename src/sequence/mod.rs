//! Eager and lazy ordered sequences.
//!
//! This module provides the two evaluation strategies of the library, which
//! produce identical observable results over the same data:
//!
//! - [`Sequence`]: an owned, ordered, resizable container whose operators
//!   (`where_by`, `select`, `order_by`, `take`, `average`, `aggregate`,
//!   `for_each`) materialize their results eagerly
//! - [`Enumerable`] / [`Enumerator`]: a read-only shared view over a backing
//!   buffer, advanced by a pull-based cursor, whose `select` composes
//!   transformation closures instead of building intermediate buffers
//! - [`Rule`]: the qualifier/amount closure pair consumers use to drive
//!   rule-evaluation pipelines
//! - The error taxonomy: [`OutOfRangeError`], [`EmptySequenceError`],
//!   [`InvariantViolationError`], unified as [`SequenceError`]
//!
//! # Ownership
//!
//! Eager operators consume their receiver, so no operator can observably
//! mutate a sequence still reachable through another handle; a caller that
//! wants to keep the source clones it first. Lazy enumerators share one
//! immutable, reference-counted backing buffer whose lifetime extends to the
//! longest-living enumerator; cursors are independent and never observe each
//! other's advancement.
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::sequence::Sequence;
//! use fluentseq::sequence;
//!
//! let names: Sequence<&str> = sequence!["apple", "mango", "grape"];
//! let short = names.where_by(|name| name.len() == 5);
//! assert_eq!(short, sequence!["apple", "mango", "grape"].take(3).unwrap());
//! ```

mod eager;
mod error;
mod lazy;
mod rule;

pub use eager::Sequence;
pub use error::{EmptySequenceError, InvariantViolationError, OutOfRangeError, SequenceError};
pub use lazy::{Enumerable, Enumerator};
pub use rule::Rule;

// Re-export the sequence! macro (already at crate root via #[macro_export])
pub use crate::sequence;

/// Shared-ownership handle for lazy backing buffers.
///
/// `Arc` under the `arc` feature, `Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

/// Shared-ownership handle for lazy backing buffers.
///
/// `Arc` under the `arc` feature, `Rc` otherwise.
#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;
