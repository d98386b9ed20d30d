//! Property-based tests for the numeric tower.

use num_traits::{One, Zero};
use proptest::prelude::*;

use crate::{Integer, Number, Rational};

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn rational() -> impl Strategy<Value = Number> {
    (small_int(), non_zero_int())
        .prop_map(|(n, d)| Number::rational(n, d).expect("non-zero denominator"))
}

proptest! {
    // Ring axioms over the exact kinds.

    #[test]
    fn add_commutative(a in rational(), b in rational()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn add_associative(a in rational(), b in rational(), c in rational()) {
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn mul_commutative(a in rational(), b in rational()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn mul_distributes(a in rational(), b in rational(), c in rational()) {
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn additive_inverse(a in rational()) {
        prop_assert!(a.add(&a.neg()).is_zero());
    }

    #[test]
    fn division_inverts_multiplication(a in rational(), b in rational()) {
        if !b.is_zero() {
            let q = a.mul(&b).div(&b).expect("non-zero divisor");
            prop_assert_eq!(q, a);
        }
    }

    // Exactness: exact operands never produce an inexact result.

    #[test]
    fn exactness_closed(a in rational(), b in rational()) {
        prop_assert!(a.add(&b).is_exact());
        prop_assert!(a.mul(&b).is_exact());
        prop_assert!(a.sub(&b).is_exact());
    }

    // Machine promotion is contagious.

    #[test]
    fn machine_promotion_contagious(a in rational(), x in -100.0f64..100.0) {
        let m = Number::real(x);
        prop_assert!(!a.add(&m).is_exact());
        prop_assert!(!a.mul(&m).is_exact());
    }

    // Integer nth roots: roots of perfect powers are exact.

    #[test]
    fn nth_root_of_perfect_power(base in 2i64..50, n in 2u32..5) {
        let value = Integer::new(base).pow(n);
        let (root, exact) = value.nth_root(n);
        prop_assert!(exact);
        prop_assert_eq!(root, Integer::new(base));
    }

    // Rational reduction invariants.

    #[test]
    fn reduced_form(n in small_int(), d in non_zero_int()) {
        let r = Rational::from_i64(n, d).expect("non-zero denominator");
        let g = r.numerator().gcd(&r.denominator());
        prop_assert!(g.is_one() || r.numerator().is_zero());
        prop_assert!(!r.denominator().is_negative());
    }
}
