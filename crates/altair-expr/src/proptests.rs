//! Property-based tests for the canonical builders.

use proptest::prelude::*;

use crate::expr::Expr;
use crate::mul::{mul, mul_vec};
use crate::pow::pow;
use crate::{add, Number};

/// A pool of small atoms: symbols, integers, and rationals.
fn atom() -> impl Strategy<Value = Expr> {
    prop_oneof![
        prop_oneof![Just("x"), Just("y"), Just("z")].prop_map(Expr::symbol),
        (-6i64..=6).prop_map(Expr::integer),
        ((-6i64..=6), (1i64..=6)).prop_map(|(n, d)| {
            Expr::number(Number::rational(n, d).expect("non-zero denominator"))
        }),
    ]
}

/// Small composite expressions built from atoms through the canonical
/// operations themselves.
fn small_expr() -> impl Strategy<Value = Expr> {
    (atom(), atom(), 0u8..3).prop_map(|(a, b, op)| match op {
        0 => add::add(&a, &b),
        1 => mul(&a, &b).unwrap_or(a),
        _ => pow(&a, &Expr::integer(2)).unwrap_or(b),
    })
}

proptest! {
    #[test]
    fn mul_commutative(a in small_expr(), b in small_expr()) {
        let ab = mul(&a, &b);
        let ba = mul(&b, &a);
        match (ab, ba) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x, y),
            (Err(x), Err(y)) => prop_assert_eq!(x, y),
            (x, y) => prop_assert!(false, "asymmetric outcome: {:?} vs {:?}", x, y),
        }
    }

    #[test]
    fn mul_associative(a in small_expr(), b in small_expr(), c in small_expr()) {
        let left = mul(&a, &b).and_then(|ab| mul(&ab, &c));
        let right = mul(&b, &c).and_then(|bc| mul(&a, &bc));
        if let (Ok(x), Ok(y)) = (left, right) {
            prop_assert_eq!(x, y);
        }
    }

    #[test]
    fn add_commutative(a in small_expr(), b in small_expr()) {
        prop_assert_eq!(add::add(&a, &b), add::add(&b, &a));
    }

    #[test]
    fn add_associative(a in small_expr(), b in small_expr(), c in small_expr()) {
        let left = add::add(&add::add(&a, &b), &c);
        let right = add::add(&a, &add::add(&b, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn mul_absorption(a in small_expr()) {
        prop_assert_eq!(mul(&a, &Expr::integer(1)).unwrap(), a.clone());
        prop_assert_eq!(mul(&a, &Expr::integer(0)).unwrap(), Expr::integer(0));
    }

    #[test]
    fn add_identity(a in small_expr()) {
        prop_assert_eq!(add::add(&a, &Expr::integer(0)), a);
    }

    #[test]
    fn product_round_trip(a in small_expr(), b in small_expr()) {
        // Decomposing a canonical product and rebuilding it reproduces
        // an equal node.
        if let Ok(p) = mul(&a, &b) {
            let factors = p.factors();
            prop_assert_eq!(mul_vec(&factors).unwrap(), p);
        }
    }

    #[test]
    fn sum_round_trip(a in small_expr(), b in small_expr()) {
        let s = add::add(&a, &b);
        let terms = s.terms();
        prop_assert_eq!(add::add_vec(&terms), s);
    }

    #[test]
    fn square_is_self_product(a in atom()) {
        let direct = pow(&a, &Expr::integer(2));
        let through_mul = mul(&a, &a);
        if let (Ok(x), Ok(y)) = (direct, through_mul) {
            prop_assert_eq!(x, y);
        }
    }
}
