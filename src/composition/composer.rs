//! The [`Stage`] wrapper and the free [`compose`] function.

use std::fmt;
use std::marker::PhantomData;

use crate::signature::Capabilities;

/// A callable wrapped together with its introspected signature and declared
/// capabilities.
///
/// A `Stage` is one link of a pipeline: a single-input, single-output
/// callable whose parameter and return types are carried in the type
/// parameters. Binding a continuation with [`Stage::compose`] is only
/// possible when the continuation's sole parameter type equals this stage's
/// output type — the bound is checked by the compiler at pipeline-assembly
/// time, so a mismatched seam never reaches invocation.
///
/// # Capabilities
///
/// Wrapping records two declared flags (see
/// [`Capabilities`](crate::signature::Capabilities)). Every composition
/// joins the flags with logical AND, so the resulting chain only claims
/// infallibility when every stage individually does.
///
/// # Examples
///
/// ```rust
/// use fluentseq::composition::Stage;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn square(value: i32) -> i32 { value * value }
///
/// let pipeline = Stage::wrap(add_one).compose(square);
/// assert_eq!(pipeline.call(3), 16);
/// assert!(pipeline.capabilities().infallible);
/// ```
///
/// # Static rejection
///
/// A continuation whose parameter type differs from the stage's output type
/// fails to bind at compile time:
///
/// ```compile_fail
/// use fluentseq::composition::Stage;
///
/// let to_text = Stage::wrap(|value: i32| value.to_string());
/// // The continuation expects a usize, not the String the stage produces.
/// let rejected = to_text.compose(|value: usize| value + 1);
/// ```
///
/// So does a callable of the wrong arity — introspection cannot resolve a
/// parameter type for it:
///
/// ```compile_fail
/// use fluentseq::composition::Stage;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let rejected = Stage::wrap(add).compose(|value: i32| value * 2);
/// ```
pub struct Stage<Function, Input, Output> {
    function: Function,
    capabilities: Capabilities,
    signature: PhantomData<fn(Input) -> Output>,
}

impl<Function, Input, Output> Stage<Function, Input, Output>
where
    Function: Fn(Input) -> Output,
{
    /// Wraps a callable, declaring it total and stateless.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::composition::Stage;
    ///
    /// let stage = Stage::wrap(|value: i32| value * 2);
    /// assert_eq!(stage.call(21), 42);
    /// ```
    pub fn wrap(function: Function) -> Self {
        Self::with_capabilities(function, Capabilities::total())
    }

    /// Wraps a callable together with explicitly declared capabilities.
    ///
    /// Stage functions are expected to declare truthfully whether they may
    /// fail; the declaration is recorded once here and combined at every
    /// subsequent composition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::composition::Stage;
    /// use fluentseq::signature::Capabilities;
    ///
    /// let stage = Stage::with_capabilities(
    ///     |value: i32| {
    ///         assert!(value >= 0, "negative input");
    ///         value * 2
    ///     },
    ///     Capabilities::fallible(),
    /// );
    /// assert!(!stage.capabilities().infallible);
    /// ```
    pub const fn with_capabilities(function: Function, capabilities: Capabilities) -> Self {
        Self {
            function,
            capabilities,
            signature: PhantomData,
        }
    }

    /// Returns the declared capabilities of the wrapped chain.
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Invokes the full chain on `input`, left to right.
    ///
    /// Side effects occur in composition order, exactly once per input,
    /// with no reordering or memoization.
    pub fn call(&self, input: Input) -> Output {
        (self.function)(input)
    }

    /// Binds a continuation, declared total and stateless, onto this stage.
    ///
    /// The continuation's parameter type must equal this stage's output
    /// type; the requirement is expressed in the trait bound, so a mismatch
    /// is rejected by the compiler before the composed value exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::composition::Stage;
    ///
    /// fn to_text(value: i32) -> String { value.to_string() }
    /// fn length(text: String) -> usize { text.len() }
    ///
    /// let pipeline = Stage::wrap(to_text).compose(length);
    /// assert_eq!(pipeline.call(12345), 5);
    /// ```
    #[must_use]
    pub fn compose<Next, NextOutput>(
        self,
        next: Next,
    ) -> Stage<impl Fn(Input) -> NextOutput, Input, NextOutput>
    where
        Next: Fn(Output) -> NextOutput,
    {
        self.compose_with(next, Capabilities::total())
    }

    /// Binds a continuation with explicitly declared capabilities.
    ///
    /// The resulting stage's capabilities are the logical AND of both
    /// sides: it is infallible only if both this chain and `next` are, and
    /// stateless only if both are.
    #[must_use]
    pub fn compose_with<Next, NextOutput>(
        self,
        next: Next,
        capabilities: Capabilities,
    ) -> Stage<impl Fn(Input) -> NextOutput, Input, NextOutput>
    where
        Next: Fn(Output) -> NextOutput,
    {
        let first = self.function;
        Stage {
            function: move |input| next(first(input)),
            capabilities: self.capabilities.join(capabilities),
            signature: PhantomData,
        }
    }

    /// Binds another wrapped stage, combining both capability declarations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentseq::composition::Stage;
    /// use fluentseq::signature::Capabilities;
    ///
    /// let parse = Stage::with_capabilities(
    ///     |text: String| text.len(),
    ///     Capabilities::fallible(),
    /// );
    /// let double = Stage::wrap(|length: usize| length * 2);
    ///
    /// let pipeline = parse.compose_stage(double);
    /// assert_eq!(pipeline.call(String::from("abcd")), 8);
    /// assert!(!pipeline.capabilities().infallible);
    /// ```
    #[must_use]
    pub fn compose_stage<Next, NextOutput>(
        self,
        next: Stage<Next, Output, NextOutput>,
    ) -> Stage<impl Fn(Input) -> NextOutput, Input, NextOutput>
    where
        Next: Fn(Output) -> NextOutput,
    {
        let capabilities = next.capabilities;
        self.compose_with(next.function, capabilities)
    }

    /// Unwraps the chain into a plain callable, discarding the capability
    /// record.
    pub fn into_fn(self) -> impl Fn(Input) -> Output {
        self.function
    }

    /// Consumes the stage, returning the wrapped callable unchanged.
    pub fn into_inner(self) -> Function {
        self.function
    }
}

impl<Function, Input, Output> fmt::Debug for Stage<Function, Input, Output> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Stage")
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

/// Composes two callables left to right: `compose(f, g).call(x) == g(f(x))`.
///
/// This is equivalent to `Stage::wrap(f).compose(g)` and exists for
/// ergonomics. The seam requirement is identical: `g`'s sole parameter type
/// must equal `f`'s return type, enforced by the trait bounds at compile
/// time.
///
/// Note the argument order is data-flow order, the reverse of the
/// mathematical [`compose!`](crate::compose) macro.
///
/// # Examples
///
/// ```rust
/// use fluentseq::composition::compose;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn to_double(value: i32) -> f64 { f64::from(value) }
///
/// let pipeline = compose(add_one, to_double);
/// assert_eq!(pipeline.call(4), 5.0);
/// ```
///
/// Composing across a mismatched seam fails to bind — the library never
/// silently coerces or drops data:
///
/// ```compile_fail
/// use fluentseq::composition::compose;
///
/// struct Ingredient;
/// struct Cost;
///
/// fn price(_: Ingredient) -> Cost { Cost }
/// fn add_pair(pair: (f64, f64)) -> f64 { pair.0 + pair.1 }
///
/// // price produces a Cost; add_pair expects a (f64, f64).
/// let rejected = compose(price, add_pair);
/// ```
pub fn compose<First, Second, Input, Middle, Output>(
    first: First,
    second: Second,
) -> Stage<impl Fn(Input) -> Output, Input, Output>
where
    First: Fn(Input) -> Middle,
    Second: Fn(Middle) -> Output,
{
    Stage::wrap(first).compose(second)
}
