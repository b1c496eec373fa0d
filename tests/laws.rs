//! Property-based laws for the outcome types.
//!
//! The combinators are only trustworthy if they behave uniformly across all
//! inputs, so the functor/monad laws and the short-circuit guarantees are
//! checked with proptest rather than hand-picked cases.

use std::cell::Cell;

use confluence::{Maybe, Outcome};
use proptest::prelude::*;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![any::<i32>().prop_map(Maybe::present), Just(Maybe::Absent)]
}

fn any_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        ".{0,8}".prop_map(Outcome::failure),
    ]
}

proptest! {
    #[test]
    fn maybe_functor_identity(m in any_maybe()) {
        prop_assert_eq!(m.map(|x| x), m);
    }

    #[test]
    fn maybe_functor_composition(m in any_maybe()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_add(7);
        prop_assert_eq!(m.map(f).map(g), m.map(|x| g(f(x))));
    }

    #[test]
    fn maybe_left_identity(x in any::<i32>()) {
        let f = |x: i32| Maybe::from_predicate(x, |v| v % 2 == 0);
        prop_assert_eq!(Maybe::present(x).and_then(f), f(x));
    }

    #[test]
    fn maybe_right_identity(m in any_maybe()) {
        prop_assert_eq!(m.and_then(Maybe::present), m);
    }

    #[test]
    fn maybe_associativity(m in any_maybe()) {
        let f = |x: i32| Maybe::from_predicate(x, |v| *v >= 0);
        let g = |x: i32| Maybe::present(x.wrapping_add(1));
        prop_assert_eq!(
            m.and_then(f).and_then(g),
            m.and_then(|x| f(x).and_then(g))
        );
    }

    #[test]
    fn maybe_absent_short_circuits(m in any_maybe()) {
        let calls = Cell::new(0u32);
        let result = m.and_then(|_| {
            calls.set(calls.get() + 1);
            Maybe::<i32>::Absent
        });
        prop_assert_eq!(result, Maybe::Absent);
        prop_assert_eq!(calls.get(), u32::from(m.is_present()));
    }

    #[test]
    fn maybe_or_else_is_lazy_on_present(x in any::<i32>()) {
        let calls = Cell::new(0u32);
        let result = Maybe::present(x).or_else(|| {
            calls.set(calls.get() + 1);
            Maybe::present(0)
        });
        prop_assert_eq!(result, Maybe::present(x));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn maybe_round_trips_through_option(m in any_maybe()) {
        prop_assert_eq!(Maybe::from_option(m.into_option()), m);
    }

    #[test]
    fn outcome_functor_identity(o in any_outcome()) {
        prop_assert_eq!(o.clone().map(|x| x), o);
    }

    #[test]
    fn outcome_map_leaves_failures_alone(e in ".{0,8}") {
        let o = Outcome::<i32, String>::failure(e.clone());
        prop_assert_eq!(o.map(|x| x + 1), Outcome::failure(e));
    }

    #[test]
    fn outcome_map_err_leaves_successes_alone(x in any::<i32>()) {
        let o = Outcome::<i32, String>::success(x);
        prop_assert_eq!(o.map_err(|e| format!("{}!", e)), Outcome::success(x));
    }

    #[test]
    fn outcome_left_identity(x in any::<i32>()) {
        let f = |x: i32| {
            Outcome::from_predicate(x, |v| v % 2 == 0, || "odd".to_string())
        };
        prop_assert_eq!(Outcome::<i32, String>::success(x).and_then(f), f(x));
    }

    #[test]
    fn outcome_associativity(o in any_outcome()) {
        let f = |x: i32| {
            Outcome::from_predicate(x, |v| *v >= 0, || "negative".to_string())
        };
        let g = |x: i32| Outcome::<i32, String>::success(x.wrapping_add(1));
        prop_assert_eq!(
            o.clone().and_then(f).and_then(g),
            o.and_then(|x| f(x).and_then(g))
        );
    }

    #[test]
    fn outcome_failure_short_circuits(o in any_outcome()) {
        let calls = Cell::new(0u32);
        let was_success = o.is_success();
        let _ = o.and_then(|x| {
            calls.set(calls.get() + 1);
            Outcome::<i32, String>::success(x)
        });
        prop_assert_eq!(calls.get(), u32::from(was_success));
    }

    #[test]
    fn outcome_or_else_is_lazy_on_success(x in any::<i32>()) {
        let calls = Cell::new(0u32);
        let result = Outcome::<i32, String>::success(x).or_else(|_| {
            calls.set(calls.get() + 1);
            Outcome::success(0)
        });
        prop_assert_eq!(result, Outcome::success(x));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn outcome_all_reports_first_failure(e1 in ".{1,8}", e2 in ".{1,8}") {
        let joined = Outcome::<(i32, i32), String>::all((
            Outcome::<i32, String>::failure(e1.clone()),
            Outcome::<i32, String>::failure(e2),
        ));
        prop_assert_eq!(joined, Outcome::failure(e1));
    }

    #[test]
    fn outcome_round_trips_through_result(o in any_outcome()) {
        prop_assert_eq!(Outcome::from_result(o.clone().into_result()), o);
    }
}
