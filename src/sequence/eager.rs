//! Eager, materializing sequences.
//!
//! [`Sequence`] is an owned, ordered, resizable container of values whose
//! transformation operators materialize their results immediately. Every
//! operator consumes its receiver, which is the type-level proof that the
//! source is no longer reachable through another handle; a caller that wants
//! to keep the source clones it first.
//!
//! # Operators
//!
//! | Operator    | Contract                                                    |
//! |-------------|-------------------------------------------------------------|
//! | `where_by`  | keeps exactly the matching elements, original order         |
//! | `select`    | same length, `result[i] = transform(original[i])`           |
//! | `order_by`  | stable permutation consistent with the comparator           |
//! | `take`      | first `n` elements; `OutOfRange` when `n` exceeds length    |
//! | `average`   | sum divided by count; `EmptySequence` when empty            |
//! | `aggregate` | left fold; seeded forms return the seed unchanged when empty|
//! | `reduce`    | no-seed left fold; `EmptySequence` when empty               |
//! | `for_each`  | side effects only, does not alter the sequence              |
//!
//! # Examples
//!
//! ```rust
//! use fluentseq::sequence;
//! use fluentseq::sequence::Sequence;
//!
//! let evens: Sequence<i32> = sequence![4, 8, 8, 3, 9, 0, 7, 8, 2]
//!     .where_by(|value| value % 2 == 0);
//! assert_eq!(evens.len(), 6);
//! ```

use std::cmp::Ordering;
use std::ops::{Div, Index};

use num_traits::{FromPrimitive, Zero};

use super::error::{EmptySequenceError, OutOfRangeError};

/// Builds a [`Sequence`] from a literal list of elements.
///
/// # Examples
///
/// ```rust
/// use fluentseq::sequence;
/// use fluentseq::sequence::Sequence;
///
/// let empty: Sequence<i32> = sequence![];
/// assert!(empty.is_empty());
///
/// let values = sequence![3, 5, 7, 8];
/// assert_eq!(values.len(), 4);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::sequence::Sequence::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::Sequence::from(vec![$($element),+])
    };
}

/// An owned, ordered, finite collection with eager pipeline operators.
///
/// The logical length always equals the count of retained elements, and
/// every operator except [`order_by`](Self::order_by) preserves relative
/// order. Operators return a freshly built sequence and consume the
/// receiver, so no operation can observably mutate a sequence still held
/// elsewhere.
///
/// # Examples
///
/// ```rust
/// use fluentseq::sequence;
///
/// let total = sequence![1, 2, 3, 4]
///     .where_by(|value| value % 2 == 0)
///     .select(|value| value * 10)
///     .aggregate(0, |sum, value| sum + value);
/// assert_eq!(total, 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a sequence of `size` default-valued elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence::Sequence;
    ///
    /// let zeroes: Sequence<i32> = Sequence::with_size(3);
    /// assert_eq!(zeroes, Sequence::from(vec![0, 0, 0]));
    /// ```
    #[must_use]
    pub fn with_size(size: usize) -> Self
    where
        T: Default,
    {
        Self {
            elements: std::iter::repeat_with(T::default).take(size).collect(),
        }
    }

    /// Returns the number of retained elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns a reference to the first element, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the first element, or the default value when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    /// use fluentseq::sequence::Sequence;
    ///
    /// assert_eq!(sequence![7, 8].first_or_default(), 7);
    /// assert_eq!(Sequence::<i32>::new().first_or_default(), 0);
    /// ```
    #[must_use]
    pub fn first_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.elements.first().cloned().unwrap_or_default()
    }

    /// Appends an element to the end of the sequence.
    pub fn push(&mut self, element: T) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Resizes the sequence, filling new slots with the default value.
    pub fn resize(&mut self, new_length: usize)
    where
        T: Clone + Default,
    {
        self.elements.resize(new_length, T::default());
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns a new sequence containing exactly the elements for which
    /// `predicate` is true, in original relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let odd = sequence![3, 5, 7, 8].where_by(|value| value % 2 == 1);
    /// assert_eq!(odd, sequence![3, 5, 7]);
    /// ```
    #[must_use]
    pub fn where_by<Predicate>(self, predicate: Predicate) -> Self
    where
        Predicate: Fn(&T) -> bool,
    {
        Self {
            elements: self
                .elements
                .into_iter()
                .filter(|element| predicate(element))
                .collect(),
        }
    }

    /// Returns a new sequence of the same length where
    /// `result[i] = transform(original[i])`.
    ///
    /// Elements are visited left to right, exactly once each.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let doubled = sequence![1, 2, 3].select(|value| f64::from(value) * 2.0);
    /// assert_eq!(doubled, sequence![2.0, 4.0, 6.0]);
    /// ```
    #[must_use]
    pub fn select<Output, Transform>(self, transform: Transform) -> Sequence<Output>
    where
        Transform: Fn(T) -> Output,
    {
        Sequence {
            elements: self.elements.into_iter().map(transform).collect(),
        }
    }

    /// Returns the sequence permuted into an order consistent with the
    /// strict "ranks before" comparator.
    ///
    /// The sort is stable: elements the comparator considers equal keep
    /// their relative order, so re-sorting an already-sorted sequence
    /// changes nothing observable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let ascending = sequence![3, 1, 2].order_by(|left, right| left < right);
    /// assert_eq!(ascending, sequence![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn order_by<Comparator>(mut self, comparator: Comparator) -> Self
    where
        Comparator: Fn(&T, &T) -> bool,
    {
        self.elements.sort_by(|left, right| {
            if comparator(left, right) {
                Ordering::Less
            } else if comparator(right, left) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        self
    }

    /// Returns the first `count` elements in order.
    ///
    /// `count == 0` yields an empty sequence and `count == len` the whole
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] when `count` exceeds the current length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let prefix = sequence![3, 5, 7, 8].take(2).unwrap();
    /// assert_eq!(prefix, sequence![3, 5]);
    ///
    /// assert!(sequence![3, 5, 7, 8].take(5).is_err());
    /// ```
    pub fn take(mut self, count: usize) -> Result<Self, OutOfRangeError> {
        if count > self.elements.len() {
            return Err(OutOfRangeError {
                requested: count,
                length: self.elements.len(),
            });
        }
        self.elements.truncate(count);
        Ok(self)
    }

    /// Returns the sum of the elements divided by their count.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] when the sequence is empty — division
    /// by zero is a reportable domain error, not a silent NaN.
    ///
    /// # Panics
    ///
    /// Panics when the element count is not representable in `T` (for
    /// example, more than 255 elements of type `u8`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let average = sequence![1.0, 2.0, 6.0].average().unwrap();
    /// assert_eq!(average, 3.0);
    /// ```
    pub fn average(&self) -> Result<T, EmptySequenceError>
    where
        T: Copy + Zero + Div<Output = T> + FromPrimitive,
    {
        if self.elements.is_empty() {
            return Err(EmptySequenceError {
                operation: "average",
            });
        }
        let sum = self
            .elements
            .iter()
            .fold(T::zero(), |accumulated, &element| accumulated + element);
        let Some(count) = T::from_usize(self.elements.len()) else {
            panic!(
                "average: element count {} is not representable in the element type",
                self.elements.len()
            );
        };
        Ok(sum / count)
    }

    /// Left fold over the elements in order, starting from `seed`.
    ///
    /// An empty sequence returns `seed` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let evens = sequence![4, 8, 8, 3, 9, 0, 7, 8, 2]
    ///     .aggregate(0, |total, next| if next % 2 == 0 { total + 1 } else { total });
    /// assert_eq!(evens, 6);
    /// ```
    pub fn aggregate<Accumulate, Combine>(&self, seed: Accumulate, combine: Combine) -> Accumulate
    where
        Combine: Fn(Accumulate, &T) -> Accumulate,
    {
        self.elements.iter().fold(seed, combine)
    }

    /// Left fold followed by a finalizing transformation of the result.
    ///
    /// An empty sequence returns `finalize(seed)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let longest = sequence!["apple", "mango", "passionfruit"].aggregate_map(
    ///     "banana",
    ///     |longest, next| if next.len() > longest.len() { *next } else { longest },
    ///     |winner| winner.to_uppercase(),
    /// );
    /// assert_eq!(longest, "PASSIONFRUIT");
    /// ```
    pub fn aggregate_map<Accumulate, Combine, Finalize, Output>(
        &self,
        seed: Accumulate,
        combine: Combine,
        finalize: Finalize,
    ) -> Output
    where
        Combine: Fn(Accumulate, &T) -> Accumulate,
        Finalize: Fn(Accumulate) -> Output,
    {
        finalize(self.aggregate(seed, combine))
    }

    /// Left fold with the first element as the initial accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] when the sequence is empty — no
    /// identity element is assumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let reversed = sequence!["the", "lazy", "dog"]
    ///     .select(String::from)
    ///     .reduce(|sentence, next| format!("{next} {sentence}"))
    ///     .unwrap();
    /// assert_eq!(reversed, "dog lazy the");
    /// ```
    pub fn reduce<Combine>(&self, combine: Combine) -> Result<T, EmptySequenceError>
    where
        T: Clone,
        Combine: Fn(T, &T) -> T,
    {
        let Some(first) = self.elements.first() else {
            return Err(EmptySequenceError {
                operation: "reduce",
            });
        };
        Ok(self.elements[1..]
            .iter()
            .fold(first.clone(), |accumulated, element| {
                combine(accumulated, element)
            }))
    }

    /// Applies `action` to every element in order, for side effects only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let mut visited = Vec::new();
    /// sequence![1, 2, 3].for_each(|value| visited.push(*value));
    /// assert_eq!(visited, vec![1, 2, 3]);
    /// ```
    pub fn for_each<Action>(&self, mut action: Action)
    where
        Action: FnMut(&T),
    {
        for element in &self.elements {
            action(element);
        }
    }

    /// Hands the sequence off to the lazy side as a fresh shared snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::sequence;
    ///
    /// let enumerable = sequence![1, 2, 3].to_enumerable();
    /// assert_eq!(enumerable.len(), 3);
    /// ```
    #[must_use]
    pub fn to_enumerable(&self) -> super::Enumerable<T>
    where
        T: Clone + 'static,
    {
        super::Enumerable::new(self.elements.clone())
    }

    /// Consumes the sequence, returning the underlying buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<Source: IntoIterator<Item = T>>(source: Source) -> Self {
        Self {
            elements: source.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_where_by_preserves_relative_order() {
        let filtered = Sequence::from(vec![5, 2, 9, 4, 1]).where_by(|value| value % 2 == 1);
        assert_eq!(filtered, Sequence::from(vec![5, 9, 1]));
    }

    #[test]
    fn test_select_maps_every_element_once() {
        let squares = Sequence::from(vec![1, 2, 3]).select(|value| value * value);
        assert_eq!(squares, Sequence::from(vec![1, 4, 9]));
    }

    #[test]
    fn test_order_by_is_stable() {
        // Equal keys (same parity) keep their original relative order.
        let by_parity =
            Sequence::from(vec![3, 2, 5, 4, 1]).order_by(|left, right| left % 2 < right % 2);
        assert_eq!(by_parity, Sequence::from(vec![2, 4, 3, 5, 1]));
    }

    #[test]
    fn test_take_zero_is_empty() {
        let empty = Sequence::from(vec![1, 2, 3]).take(0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_take_full_length_is_whole_sequence() {
        let whole = Sequence::from(vec![1, 2, 3]).take(3).unwrap();
        assert_eq!(whole, Sequence::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_take_beyond_length_is_out_of_range() {
        let error = Sequence::from(vec![1, 2, 3]).take(4).unwrap_err();
        assert_eq!(
            error,
            OutOfRangeError {
                requested: 4,
                length: 3
            }
        );
    }

    #[test]
    fn test_average_of_integers() {
        let average = Sequence::from(vec![2, 4, 6]).average().unwrap();
        assert_eq!(average, 4);
    }

    #[test]
    fn test_average_of_empty_sequence_fails() {
        let error = Sequence::<f64>::new().average().unwrap_err();
        assert_eq!(
            error,
            EmptySequenceError {
                operation: "average"
            }
        );
    }

    #[test]
    fn test_aggregate_on_empty_returns_seed() {
        let seed = Sequence::<i32>::new().aggregate(41, |total, next| total + next);
        assert_eq!(seed, 41);
    }

    #[test]
    fn test_reduce_on_empty_fails() {
        let error = Sequence::<i32>::new()
            .reduce(|total, next| total + next)
            .unwrap_err();
        assert_eq!(
            error,
            EmptySequenceError {
                operation: "reduce"
            }
        );
    }

    #[test]
    fn test_clone_keeps_source_unchanged() {
        let source = Sequence::from(vec![3, 1, 2]);
        let sorted = source.clone().order_by(|left, right| left < right);
        assert_eq!(source, Sequence::from(vec![3, 1, 2]));
        assert_eq!(sorted, Sequence::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_with_size_builds_default_elements() {
        let defaults: Sequence<String> = Sequence::with_size(2);
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0], "");
    }
}
