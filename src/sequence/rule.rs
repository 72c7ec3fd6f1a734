//! The qualifier/amount rule pair for rule-evaluation pipelines.

/// An immutable pair of closures driving a rule-evaluation pipeline.
///
/// A rule holds a qualifier (does this rule apply to the candidate?) and an
/// amount function (what value does it contribute?). Consumers assemble a
/// collection of rules and evaluate it with the sequence operators: qualify
/// with [`where_by`](super::Sequence::where_by), price with
/// [`select`](super::Sequence::select), rank with
/// [`order_by`](super::Sequence::order_by), and settle with
/// [`take`](super::Sequence::take) and [`average`](super::Sequence::average).
///
/// Both halves are fixed at construction; a rule never changes afterwards.
///
/// # Examples
///
/// ```rust
/// use fluentseq::sequence::{Rule, Sequence};
///
/// struct Order {
///     cost: f64,
/// }
///
/// let rules: Sequence<Rule<Order, f64>> = Sequence::from(vec![
///     Rule::new(|_: &Order| true, |_: &Order| 10.0),
///     Rule::new(|order: &Order| order.cost > 100.0, |_: &Order| 3.0),
/// ]);
///
/// let order = Order { cost: 50.0 };
/// let discount = rules
///     .where_by(|rule| rule.qualifies(&order))
///     .select(|rule| rule.amount(&order))
///     .average()
///     .unwrap();
/// assert_eq!(discount, 10.0);
/// ```
pub struct Rule<T, Amount> {
    qualifier: Box<dyn Fn(&T) -> bool>,
    amount: Box<dyn Fn(&T) -> Amount>,
}

impl<T, Amount> Rule<T, Amount> {
    /// Creates a rule from its qualifier and amount halves.
    pub fn new<Qualifier, AmountFn>(qualifier: Qualifier, amount: AmountFn) -> Self
    where
        Qualifier: Fn(&T) -> bool + 'static,
        AmountFn: Fn(&T) -> Amount + 'static,
    {
        Self {
            qualifier: Box::new(qualifier),
            amount: Box::new(amount),
        }
    }

    /// Returns `true` when the rule applies to `candidate`.
    #[must_use]
    pub fn qualifies(&self, candidate: &T) -> bool {
        (self.qualifier)(candidate)
    }

    /// Returns the amount the rule contributes for `candidate`.
    #[must_use]
    pub fn amount(&self, candidate: &T) -> Amount {
        (self.amount)(candidate)
    }
}
