//! Lazy, cursor-based sequences.
//!
//! An [`Enumerable`] is a read-only view pairing a reference-counted backing
//! buffer with a reference-counted chain of transformation closures. Its
//! `select` never materializes an intermediate buffer: it composes the new
//! transformation onto the prior chain and shares the same backing buffer.
//! An [`Enumerator`] is a pull-based cursor over that view; many enumerators
//! may share one buffer, each with an independent position.
//!
//! # Cursor protocol
//!
//! A cursor moves through three states:
//!
//! ```text
//! BeforeFirst -> Positioned(i) -> Exhausted
//! ```
//!
//! - `move_next` advances and returns `true` iff a new position was reached
//! - `current` is legal only while positioned; out-of-position reads fail
//!   loudly with [`InvariantViolationError`]
//! - `reset` returns to `BeforeFirst` unconditionally
//!
//! # Sharing
//!
//! The backing buffer is held behind an immutable shared handle for its
//! entire shared lifetime, so mutating it while any enumerator is
//! outstanding is a compile-time impossibility — no locking is required.
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::sequence::Enumerable;
//!
//! let squares = Enumerable::new(vec![1, 2, 3]).select(|value: i32| value * value);
//!
//! let mut enumerator = squares.enumerator();
//! let mut collected = Vec::new();
//! while enumerator.move_next() {
//!     collected.push(enumerator.current().unwrap());
//! }
//! assert_eq!(collected, vec![1, 4, 9]);
//! ```

use super::ReferenceCounter;
use super::error::{EmptySequenceError, InvariantViolationError};

/// Cursor state for the enumerator protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    /// Before the first element; no element is readable yet.
    BeforeFirst,
    /// Resting on the element at the contained buffer index.
    Positioned(usize),
    /// Past the last element; no further advancement is possible.
    Exhausted,
}

impl Cursor {
    const fn name(self) -> &'static str {
        match self {
            Self::BeforeFirst => "BeforeFirst",
            Self::Positioned(_) => "Positioned",
            Self::Exhausted => "Exhausted",
        }
    }
}

/// A lazy, shareable view over a backing buffer.
///
/// `Source` is the element type stored in the buffer; `Output` is the type
/// the composed transformation chain produces at read time. A fresh
/// enumerable's chain is the identity (a clone of the stored element), so
/// `Output` starts equal to `Source`.
///
/// Cloning an `Enumerable`, or deriving one through
/// [`select`](Self::select), shares the same backing buffer; the buffer
/// lives until the last view or cursor referencing it is dropped.
///
/// # Examples
///
/// ```rust
/// use fluentseq::sequence::Enumerable;
///
/// let doubled = Enumerable::new(vec![1, 2, 3]).select(|value: i32| value * 2);
/// assert_eq!(doubled.enumerator().collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
pub struct Enumerable<Source, Output = Source> {
    buffer: ReferenceCounter<Vec<Source>>,
    transformation: ReferenceCounter<dyn Fn(&Source) -> Output>,
}

impl<Source: Clone + 'static> Enumerable<Source> {
    /// Creates an enumerable owning a fresh backing buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence::Enumerable;
    ///
    /// let enumerable = Enumerable::new(vec![10, 20]);
    /// assert_eq!(enumerable.len(), 2);
    /// ```
    #[must_use]
    pub fn new(elements: Vec<Source>) -> Self {
        Self {
            buffer: ReferenceCounter::new(elements),
            transformation: ReferenceCounter::new(|source: &Source| source.clone()),
        }
    }
}

impl<Source, Output> Enumerable<Source, Output>
where
    Source: 'static,
    Output: 'static,
{
    /// Returns the length of the backing buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` when the backing buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Composes `transform` onto the prior transformation chain.
    ///
    /// The returned enumerable shares the same backing buffer; no
    /// intermediate buffer is built, and the chained transformations are
    /// applied lazily, element by element, at read time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence::Enumerable;
    ///
    /// let chained = Enumerable::new(vec![3, 5])
    ///     .select(|value: i32| value + 1)
    ///     .select(|value: i32| value.to_string());
    /// assert_eq!(chained.enumerator().collect::<Vec<_>>(), vec!["4", "6"]);
    /// ```
    #[must_use]
    pub fn select<Next, Transform>(&self, transform: Transform) -> Enumerable<Source, Next>
    where
        Transform: Fn(Output) -> Next + 'static,
    {
        let previous = ReferenceCounter::clone(&self.transformation);
        Enumerable {
            buffer: ReferenceCounter::clone(&self.buffer),
            transformation: ReferenceCounter::new(move |source: &Source| {
                transform(previous(source))
            }),
        }
    }

    /// Yields a fresh enumerator positioned before the first element.
    ///
    /// Every enumerator is independent: it holds its own cursor and never
    /// observes another enumerator's advancement.
    #[must_use]
    pub fn enumerator(&self) -> Enumerator<Source, Output> {
        Enumerator {
            buffer: ReferenceCounter::clone(&self.buffer),
            transformation: ReferenceCounter::clone(&self.transformation),
            cursor: Cursor::BeforeFirst,
        }
    }

    /// Left fold over the transformed elements in order, from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence::Enumerable;
    ///
    /// let evens = Enumerable::new(vec![4, 8, 8, 3, 9, 0, 7, 8, 2])
    ///     .aggregate(0, |total, next| if next % 2 == 0 { total + 1 } else { total });
    /// assert_eq!(evens, 6);
    /// ```
    pub fn aggregate<Accumulate, Combine>(&self, seed: Accumulate, combine: Combine) -> Accumulate
    where
        Combine: Fn(Accumulate, Output) -> Accumulate,
    {
        self.buffer.iter().fold(seed, |accumulated, source| {
            combine(accumulated, (self.transformation)(source))
        })
    }

    /// Left fold followed by a finalizing transformation of the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence::Enumerable;
    ///
    /// let longest = Enumerable::new(vec!["apple", "mango", "passionfruit", "grape"])
    ///     .aggregate_map(
    ///         "banana",
    ///         |longest, next| if next.len() > longest.len() { next } else { longest },
    ///         |winner| winner.to_uppercase(),
    ///     );
    /// assert_eq!(longest, "PASSIONFRUIT");
    /// ```
    pub fn aggregate_map<Accumulate, Combine, Finalize, Final>(
        &self,
        seed: Accumulate,
        combine: Combine,
        finalize: Finalize,
    ) -> Final
    where
        Combine: Fn(Accumulate, Output) -> Accumulate,
        Finalize: Fn(Accumulate) -> Final,
    {
        finalize(self.aggregate(seed, combine))
    }

    /// Left fold with the first transformed element as the accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] when the backing buffer is empty.
    pub fn reduce<Combine>(&self, combine: Combine) -> Result<Output, EmptySequenceError>
    where
        Combine: Fn(Output, Output) -> Output,
    {
        let Some(first) = self.buffer.first() else {
            return Err(EmptySequenceError {
                operation: "reduce",
            });
        };
        Ok(self.buffer[1..]
            .iter()
            .fold((self.transformation)(first), |accumulated, source| {
                combine(accumulated, (self.transformation)(source))
            }))
    }
}

impl<Source, Output> Clone for Enumerable<Source, Output> {
    fn clone(&self) -> Self {
        Self {
            buffer: ReferenceCounter::clone(&self.buffer),
            transformation: ReferenceCounter::clone(&self.transformation),
        }
    }
}

impl<Source: Clone + 'static> From<Vec<Source>> for Enumerable<Source> {
    fn from(elements: Vec<Source>) -> Self {
        Self::new(elements)
    }
}

impl<Source: Clone + 'static> From<super::Sequence<Source>> for Enumerable<Source> {
    fn from(sequence: super::Sequence<Source>) -> Self {
        Self::new(sequence.into_vec())
    }
}

/// A pull-based cursor over a shared backing buffer.
///
/// Holds a read-only handle to the buffer (keeping it alive), the
/// transformation chain of the enumerable it was derived from, and an
/// independent cursor initialized before the first element.
///
/// # Examples
///
/// ```rust
/// use fluentseq::sequence::Enumerable;
///
/// let enumerable = Enumerable::new(vec![7]);
/// let mut enumerator = enumerable.enumerator();
///
/// // Reading before the first move_next is an invariant violation.
/// assert!(enumerator.current().is_err());
///
/// assert!(enumerator.move_next());
/// assert_eq!(enumerator.current().unwrap(), 7);
///
/// assert!(!enumerator.move_next());
/// assert!(enumerator.current().is_err());
///
/// enumerator.reset();
/// assert!(enumerator.move_next());
/// ```
pub struct Enumerator<Source, Output = Source> {
    buffer: ReferenceCounter<Vec<Source>>,
    transformation: ReferenceCounter<dyn Fn(&Source) -> Output>,
    cursor: Cursor,
}

impl<Source, Output> Enumerator<Source, Output> {
    /// Advances the cursor to the next position.
    ///
    /// Returns `true` iff a new position was reached; once the cursor is
    /// exhausted every further call returns `false`.
    pub fn move_next(&mut self) -> bool {
        let next = match self.cursor {
            Cursor::BeforeFirst => 0,
            Cursor::Positioned(index) => index + 1,
            Cursor::Exhausted => return false,
        };
        if next < self.buffer.len() {
            self.cursor = Cursor::Positioned(next);
            true
        } else {
            self.cursor = Cursor::Exhausted;
            false
        }
    }

    /// Reads the element at the current position through the
    /// transformation chain.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolationError`] when the cursor is before the
    /// first element or exhausted — never a stale value.
    pub fn current(&self) -> Result<Output, InvariantViolationError> {
        match self.cursor {
            Cursor::Positioned(index) => Ok((self.transformation)(&self.buffer[index])),
            state => Err(InvariantViolationError {
                operation: "current",
                state: state.name(),
            }),
        }
    }

    /// Rewinds the cursor to before the first element, unconditionally.
    pub fn reset(&mut self) {
        self.cursor = Cursor::BeforeFirst;
    }
}

impl<Source, Output> Iterator for Enumerator<Source, Output> {
    type Item = Output;

    fn next(&mut self) -> Option<Output> {
        if self.move_next() {
            // move_next just positioned the cursor, so current cannot fail
            self.current().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_next_visits_each_element_once() {
        let enumerable = Enumerable::new(vec![1, 2, 3]);
        let mut enumerator = enumerable.enumerator();

        let mut visited = Vec::new();
        while enumerator.move_next() {
            visited.push(enumerator.current().unwrap());
        }
        assert_eq!(visited, vec![1, 2, 3]);
        assert!(!enumerator.move_next());
    }

    #[test]
    fn test_current_before_first_fails() {
        let enumerable = Enumerable::new(vec![1]);
        let enumerator = enumerable.enumerator();
        let error = enumerator.current().unwrap_err();
        assert_eq!(error.state, "BeforeFirst");
    }

    #[test]
    fn test_current_after_exhaustion_fails() {
        let enumerable = Enumerable::new(vec![1]);
        let mut enumerator = enumerable.enumerator();
        while enumerator.move_next() {}
        let error = enumerator.current().unwrap_err();
        assert_eq!(error.state, "Exhausted");
    }

    #[test]
    fn test_reset_rewinds_to_before_first() {
        let enumerable = Enumerable::new(vec![1, 2]);
        let mut enumerator = enumerable.enumerator();
        while enumerator.move_next() {}
        enumerator.reset();
        assert!(enumerator.move_next());
        assert_eq!(enumerator.current().unwrap(), 1);
    }

    #[test]
    fn test_enumerators_have_independent_cursors() {
        let enumerable = Enumerable::new(vec![1, 2, 3]);
        let mut first = enumerable.enumerator();
        let mut second = enumerable.enumerator();

        assert!(first.move_next());
        assert!(first.move_next());
        assert!(second.move_next());

        assert_eq!(first.current().unwrap(), 2);
        assert_eq!(second.current().unwrap(), 1);
    }

    #[test]
    fn test_select_shares_backing_buffer() {
        let enumerable = Enumerable::new(vec![1, 2, 3]);
        let selected = enumerable.select(|value: i32| value * 10);
        // Two views, one buffer.
        assert_eq!(ReferenceCounter::strong_count(&enumerable.buffer), 2);
        assert_eq!(selected.enumerator().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn test_reduce_on_empty_buffer_fails() {
        let enumerable = Enumerable::new(Vec::<i32>::new());
        assert!(enumerable.reduce(|total, next| total + next).is_err());
    }
}
