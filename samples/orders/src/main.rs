//! Order-processing walkthrough.
//!
//! Builds a three-stage billing pipeline (invoicing, shipping, freight) from
//! configuration, runs a batch of orders through it with the eager sequence
//! operators, and settles discounts with a qualifier/amount rule table.

use fluentseq::composition::Stage;
use fluentseq::sequence;
use fluentseq::sequence::{Rule, Sequence, SequenceError};

/// Days counted from an arbitrary epoch stand in for calendar dates.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Order {
    id: u32,
    cost: f64,
    ordered_day: u32,
    shipping_day: u32,
    carrier: u8,
}

impl Order {
    const fn place(id: u32, cost: f64, ordered_day: u32, carrier: u8) -> Self {
        Self {
            id,
            cost,
            ordered_day,
            shipping_day: 0,
            carrier,
        }
    }
}

/// Billing configuration: which variant of each stage to use.
struct Billing {
    invoice_plan: u8,
    freight_plan: u8,
}

/// Picks the invoicing markup for the configured plan.
fn invoice_stage(plan: u8) -> impl Fn(Order) -> Order {
    let rate = match plan {
        1 => 1.1,
        2 => 1.2,
        _ => 1.3,
    };
    move |order| Order {
        cost: order.cost * rate,
        ..order
    }
}

/// Schedules the dispatch day from the carrier's lead time.
fn shipping_stage(order: Order) -> Order {
    let lead_days = match order.carrier {
        1 => 1, // air
        2 => 3, // rail
        _ => 5, // road
    };
    Order {
        shipping_day: order.ordered_day + lead_days,
        ..order
    }
}

/// Picks the freight rate for the configured plan.
fn freight_stage(plan: u8) -> impl Fn(Order) -> f64 {
    let rate = match plan {
        1 => 0.1,
        2 => 0.2,
        _ => 0.3,
    };
    move |order: Order| order.cost * rate
}

fn discount_rules() -> Sequence<Rule<Order, f64>> {
    Sequence::from(vec![
        Rule::new(|_: &Order| true, |_: &Order| 10.0),
        Rule::new(
            |order: &Order| order.cost > 1500.0,
            |order: &Order| order.cost * 0.01,
        ),
        Rule::new(|order: &Order| order.carrier == 2, |_: &Order| 25.0),
    ])
}

fn main() -> Result<(), SequenceError> {
    let billing = Billing {
        invoice_plan: 3,
        freight_plan: 3,
    };

    let pipeline = Stage::wrap(invoice_stage(billing.invoice_plan))
        .compose(shipping_stage)
        .compose(freight_stage(billing.freight_plan))
        .into_fn();

    let orders = sequence![
        Order::place(1, 1000.0, 100, 3),
        Order::place(2, 2000.0, 101, 2),
        Order::place(3, 3000.0, 102, 1),
    ];

    println!("freight charges");
    orders
        .clone()
        .select(|order| (order.id, pipeline(order)))
        .for_each(|(id, charge)| println!("  order {id}: {charge:.2}"));

    let scheduled = orders
        .clone()
        .select(invoice_stage(billing.invoice_plan))
        .select(shipping_stage);

    println!("shipping schedule");
    scheduled.for_each(|order| {
        println!(
            "  order {}: day {} -> day {}",
            order.id, order.ordered_day, order.shipping_day
        );
    });

    println!("discount settlements");
    for order in &orders {
        let settlement = discount_rules()
            .where_by(|rule| rule.qualifies(order))
            .select(|rule| rule.amount(order))
            .average()?;
        println!("  order {}: {settlement:.2}", order.id);
    }

    Ok(())
}
