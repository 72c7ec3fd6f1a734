//! Error types for sequence operations.
//!
//! Every failure here is local and synchronous: it is surfaced to the
//! immediate caller of the offending operation and never retried, recovered,
//! or replaced with a partial result. A composition seam mismatch has no
//! error type at all — it is rejected by the compiler at pipeline-assembly
//! time.

/// Represents a `take` request larger than the sequence.
///
/// # Examples
///
/// ```rust
/// use fluentseq::sequence::OutOfRangeError;
///
/// let error = OutOfRangeError {
///     requested: 5,
///     length: 4,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "take: requested 5 elements but the sequence holds 4"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// The number of elements requested.
    pub requested: usize,
    /// The number of elements actually held.
    pub length: usize,
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "take: requested {} elements but the sequence holds {}",
            self.requested, self.length
        )
    }
}

impl std::error::Error for OutOfRangeError {}

/// Represents an operation that has no defined result on an empty sequence.
///
/// Raised by `average` (division by zero is a reportable domain error, not
/// a silent NaN) and by the no-seed `reduce` (no identity element is
/// assumed).
///
/// # Examples
///
/// ```rust
/// use fluentseq::sequence::EmptySequenceError;
///
/// let error = EmptySequenceError { operation: "average" };
/// assert_eq!(format!("{}", error), "average: the sequence is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySequenceError {
    /// The name of the operation that required a nonempty sequence.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: the sequence is empty", self.operation)
    }
}

impl std::error::Error for EmptySequenceError {}

/// Represents a cursor read outside the positioned state.
///
/// An enumerator's `current` is only legal while the cursor rests on an
/// element; reading before the first `move_next` or after exhaustion fails
/// loudly with this error instead of returning a stale value.
///
/// # Examples
///
/// ```rust
/// use fluentseq::sequence::InvariantViolationError;
///
/// let error = InvariantViolationError {
///     operation: "current",
///     state: "BeforeFirst",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "current: cursor is not positioned on an element (state: BeforeFirst)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolationError {
    /// The name of the violated operation.
    pub operation: &'static str,
    /// The cursor state at the time of the call.
    pub state: &'static str,
}

impl std::fmt::Display for InvariantViolationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: cursor is not positioned on an element (state: {})",
            self.operation, self.state
        )
    }
}

impl std::error::Error for InvariantViolationError {}

/// Represents errors that can occur across sequence operations.
///
/// A unified type for callers that propagate several operations with `?`.
///
/// # Examples
///
/// ```rust
/// use fluentseq::sequence::{Sequence, SequenceError};
///
/// fn top_average(values: Sequence<f64>) -> Result<f64, SequenceError> {
///     let top = values.order_by(|left, right| left > right).take(2)?;
///     Ok(top.average()?)
/// }
///
/// let average = top_average(Sequence::from(vec![1.0, 4.0, 2.0])).unwrap();
/// assert_eq!(average, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A `take` request exceeded the sequence length.
    OutOfRange(OutOfRangeError),
    /// An operation required a nonempty sequence.
    EmptySequence(EmptySequenceError),
    /// A cursor was read outside the positioned state.
    InvariantViolation(InvariantViolationError),
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(error) => write!(formatter, "{error}"),
            Self::EmptySequence(error) => write!(formatter, "{error}"),
            Self::InvariantViolation(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {}

impl From<OutOfRangeError> for SequenceError {
    fn from(error: OutOfRangeError) -> Self {
        Self::OutOfRange(error)
    }
}

impl From<EmptySequenceError> for SequenceError {
    fn from(error: EmptySequenceError) -> Self {
        Self::EmptySequence(error)
    }
}

impl From<InvariantViolationError> for SequenceError {
    fn from(error: InvariantViolationError) -> Self {
        Self::InvariantViolation(error)
    }
}
