#![cfg(all(feature = "composition", feature = "sequence"))]
//! End-to-end pipelines combining composed stages with sequence operators.
//!
//! Models a small order-processing flow: an invoicing stage marks up the
//! base cost, a shipping stage schedules a dispatch day from the carrier's
//! lead time, and a freight stage prices the haulage. Discount rules are
//! evaluated separately with the eager sequence operators.

use fluentseq::composition::{Stage, compose};
use fluentseq::sequence;
use fluentseq::sequence::{Rule, Sequence};
use fluentseq::signature::Capabilities;

// =============================================================================
// Order Domain
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
struct Order {
    cost: f64,
    /// Day the order was placed, counted from an arbitrary epoch.
    ordered_day: u32,
    /// Day the order is scheduled to ship, once the shipping stage ran.
    shipping_day: u32,
    carrier: Carrier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Carrier {
    Road,
    Rail,
    Air,
}

impl Carrier {
    const fn lead_days(self) -> u32 {
        match self {
            Self::Road => 5,
            Self::Rail => 3,
            Self::Air => 1,
        }
    }
}

fn invoice(order: Order) -> Order {
    Order {
        cost: order.cost * 1.3,
        ..order
    }
}

fn schedule_shipping(order: Order) -> Order {
    Order {
        shipping_day: order.ordered_day + order.carrier.lead_days(),
        ..order
    }
}

fn freight_charge(order: Order) -> f64 {
    order.cost * 0.3
}

fn sample_order(cost: f64, carrier: Carrier) -> Order {
    Order {
        cost,
        ordered_day: 100,
        shipping_day: 0,
        carrier,
    }
}

// =============================================================================
// Staged Cost Pipelines
// =============================================================================

#[test]
fn invoice_then_freight_prices_the_haulage() {
    let pipeline = Stage::wrap(invoice)
        .compose(schedule_shipping)
        .compose(freight_charge);

    let charge = pipeline.call(sample_order(2000.0, Carrier::Rail));
    assert!((charge - 780.0).abs() < 1e-9);
}

#[test]
fn shipping_stage_schedules_from_the_carrier_lead_time() {
    let scheduled = compose(invoice, schedule_shipping).call(sample_order(500.0, Carrier::Air));
    assert_eq!(scheduled.ordered_day, 100);
    assert_eq!(scheduled.shipping_day, 101);

    let by_rail = compose(invoice, schedule_shipping).call(sample_order(500.0, Carrier::Rail));
    assert_eq!(by_rail.shipping_day, 103);
}

#[test]
fn stages_rebuild_orders_instead_of_mutating_them() {
    let original = sample_order(2000.0, Carrier::Road);
    let invoiced = invoice(original);

    assert!((original.cost - 2000.0).abs() < f64::EPSILON);
    assert!((invoiced.cost - 2600.0).abs() < f64::EPSILON);
}

#[test]
fn pipeline_capabilities_degrade_with_the_weakest_stage() {
    let invoicing = Stage::wrap(invoice);
    let audited = Stage::with_capabilities(schedule_shipping, Capabilities::fallible());

    let chain = invoicing.compose_stage(audited);
    assert!(!chain.capabilities().infallible);
    assert!(chain.capabilities().stateless);
}

#[test]
fn composed_pipeline_prices_a_whole_batch() {
    let pipeline = Stage::wrap(invoice)
        .compose(schedule_shipping)
        .compose(freight_charge)
        .into_fn();

    let charges = sequence![
        sample_order(1000.0, Carrier::Road),
        sample_order(2000.0, Carrier::Rail),
        sample_order(3000.0, Carrier::Air),
    ]
    .select(pipeline);

    let expected = [390.0, 780.0, 1170.0];
    assert_eq!(charges.len(), expected.len());
    for (charge, expected) in charges.iter().zip(expected) {
        assert!((charge - expected).abs() < 1e-9);
    }
}

// =============================================================================
// Discount Rules
// =============================================================================

fn discount_rules() -> Sequence<Rule<Order, f64>> {
    Sequence::from(vec![
        // Everyone gets the base discount.
        Rule::new(|_: &Order| true, |_: &Order| 10.0),
        Rule::new(
            |order: &Order| order.cost > 1500.0,
            |order: &Order| order.cost * 0.01,
        ),
        Rule::new(
            |order: &Order| order.carrier == Carrier::Rail,
            |_: &Order| 25.0,
        ),
        Rule::new(|order: &Order| order.cost > 10_000.0, |_: &Order| 500.0),
    ])
}

#[test]
fn qualifying_discounts_average_into_a_settlement() {
    let order = sample_order(2000.0, Carrier::Rail);

    // Qualifies for base (10), volume (20), and rail (25); not bulk (500).
    let settlement = discount_rules()
        .where_by(|rule| rule.qualifies(&order))
        .select(|rule| rule.amount(&order))
        .average()
        .unwrap();

    let expected = (10.0 + 20.0 + 25.0) / 3.0;
    assert!((settlement - expected).abs() < f64::EPSILON);
}

#[test]
fn best_discounts_are_ranked_and_capped() {
    let order = sample_order(20_000.0, Carrier::Rail);

    let top_two = discount_rules()
        .where_by(|rule| rule.qualifies(&order))
        .select(|rule| rule.amount(&order))
        .order_by(|left, right| left > right)
        .take(2)
        .unwrap();

    assert_eq!(top_two.len(), 2);
    assert!((top_two[0] - 500.0).abs() < 1e-9);
    assert!((top_two[1] - 200.0).abs() < 1e-9);
}

#[test]
fn no_qualifying_rule_means_no_settlement() {
    let rules: Sequence<Rule<Order, f64>> = Sequence::from(vec![Rule::new(
        |order: &Order| order.cost > 10_000.0,
        |_: &Order| 500.0,
    )]);
    let order = sample_order(100.0, Carrier::Road);

    let outcome = rules
        .where_by(|rule| rule.qualifies(&order))
        .select(|rule| rule.amount(&order))
        .average();

    assert!(outcome.is_err());
}

// =============================================================================
// Stages Feeding Rules
// =============================================================================

#[test]
fn invoiced_cost_drives_rule_qualification() {
    // 1200 * 1.3 = 1560, which crosses the 1500 volume threshold only
    // after invoicing.
    let raw = sample_order(1200.0, Carrier::Road);
    let invoiced = Stage::wrap(invoice).call(raw);

    let qualifies_raw = discount_rules()
        .where_by(|rule| rule.qualifies(&raw))
        .len();
    let qualifies_invoiced = discount_rules()
        .where_by(|rule| rule.qualifies(&invoiced))
        .len();

    assert_eq!(qualifies_raw, 1);
    assert_eq!(qualifies_invoiced, 2);
}
