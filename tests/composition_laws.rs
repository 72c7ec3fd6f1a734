//! Property-based tests for composition laws.
//!
//! - **Associativity**: composing in either grouping yields the same chain
//! - **Left/Right Identity**: `identity` is the unit of composition
//! - **Seam semantics**: `compose(f, g).call(x) == g(f(x))` for all `x`
//! - **Pipe consistency**: `pipe!(x, f, g) == compose!(g, f)(x)`

#![cfg(feature = "composition")]

use fluentseq::composition::{Stage, compose, identity};
use proptest::prelude::*;

proptest! {
    /// compose(f, g).call(x) == g(f(x))
    #[test]
    fn prop_free_compose_applies_left_to_right(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(7);
        let g = |n: i32| n.wrapping_mul(3);

        prop_assert_eq!(compose(f, g).call(x), g(f(x)));
    }

    /// Stage composition associativity:
    /// (f . g) . h == f . (g . h) as invocations
    #[test]
    fn prop_stage_compose_is_associative(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);
        let h = |n: i32| n.wrapping_sub(3);

        let grouped_left = Stage::wrap(f).compose(g).compose(h);
        let grouped_right = Stage::wrap(f).compose_stage(Stage::wrap(g).compose(h));

        prop_assert_eq!(grouped_left.call(x), grouped_right.call(x));
    }

    /// identity is a left unit: compose(identity, f) == f
    #[test]
    fn prop_identity_is_left_unit(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(5);

        prop_assert_eq!(compose(identity, f).call(x), f(x));
    }

    /// identity is a right unit: compose(f, identity) == f
    #[test]
    fn prop_identity_is_right_unit(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(5);

        prop_assert_eq!(compose(f, identity).call(x), f(x));
    }

    /// pipe!(x, f, g) == compose!(g, f)(x)
    #[test]
    fn prop_pipe_is_consistent_with_compose_macro(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(11);
        let g = |n: i32| n.wrapping_mul(13);

        prop_assert_eq!(fluentseq::pipe!(x, f, g), fluentseq::compose!(g, f)(x));
    }

    /// The capability record never changes invocation results.
    #[test]
    fn prop_capabilities_do_not_affect_invocation(x in any::<i32>()) {
        use fluentseq::signature::Capabilities;

        let f = |n: i32| n.wrapping_add(2);
        let g = |n: i32| n.wrapping_mul(2);

        let declared_total = Stage::wrap(f).compose(g);
        let declared_fallible = Stage::with_capabilities(f, Capabilities::fallible())
            .compose_with(g, Capabilities::fallible());

        prop_assert_eq!(declared_total.call(x), declared_fallible.call(x));
    }
}
