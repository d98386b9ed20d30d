//! The power operation.
//!
//! Structural fast paths first, then numeric folding through the tower,
//! then the symbolic cases: distributing numeric exponents into product
//! bases, merging integer exponents into power bases, and finally an
//! opaque power node.
//!
//! Rational exponents on integer/rational bases are normalized so the
//! surviving fractional exponent lives in `(0, 1)`: the integer part of
//! the exponent folds exactly, and the residual surd collapses entirely
//! when the base is a perfect power (`27^(1/3)` is `3`, `(9/4)^(1/2)`
//! is `3/2`, while `7^(1/3)` stays a surd).

use altair_num::{ArithmeticError, Integer, Number, Rational};
use num_traits::{One, Zero};

use crate::expr::{Expr, ExprKind};
use crate::mul::{self, TermMap};

/// Raises `base` to `exp` in canonical form.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] for a negative power of
/// an exact zero; propagates numeric folding failures.
pub fn pow(base: &Expr, exp: &Expr) -> Result<Expr, ArithmeticError> {
    if let Some(en) = exp.as_number() {
        if en.is_zero() {
            // x^0 is a typed 1 carrying the exponent's kind, so x^0.0
            // stays machine precision.
            return Ok(Expr::number(en.pow(&Number::integer(0))?));
        }
    }
    if exp.is_one() {
        return Ok(base.clone());
    }
    if let Some(bn) = base.as_number() {
        if bn.is_exact_zero() {
            if exp.as_number().is_some_and(Number::is_negative) {
                return Err(ArithmeticError::DivisionByZero);
            }
            return Ok(Expr::number(Number::zero()));
        }
        if bn.is_one() {
            return Ok(Expr::number(Number::one()));
        }
        if bn.is_minus_one() {
            if let Some(en) = exp.as_number() {
                match en {
                    Number::Integer(e) => {
                        return Ok(if e.is_even() {
                            Expr::number(Number::one())
                        } else {
                            Expr::number(Number::minus_one())
                        });
                    }
                    Number::Rational(r)
                        if r.numerator().is_one() && r.denominator() == Integer::new(2) =>
                    {
                        return Ok(Expr::number(Number::i()));
                    }
                    _ => {}
                }
            }
        }
        if let Some(en) = exp.as_number() {
            return numeric_pow(bn, en);
        }
    }
    if let (ExprKind::Mul { coef, terms }, Some(en)) = (base.kind(), exp.as_number()) {
        let mut out_coef = Number::one();
        let mut out_terms = TermMap::default();
        mul::power_of_product(coef, terms, en, &mut out_coef, &mut out_terms)?;
        return Ok(mul::mul_from_dict(out_coef, out_terms));
    }
    if let (
        ExprKind::Pow {
            base: inner_base,
            exp: inner_exp,
        },
        Some(Number::Integer(_)),
    ) = (base.kind(), exp.as_number())
    {
        // (x^y)^n = x^(n*y) for integer n, any x and y.
        let merged = mul::mul(inner_exp, exp)?;
        return pow(inner_base, &merged);
    }
    Ok(Expr::pow_node(base.clone(), exp.clone()))
}

/// Power of two numeric operands, at the expression level: results may
/// be numbers, surds, or opaque power nodes.
fn numeric_pow(bn: &Number, en: &Number) -> Result<Expr, ArithmeticError> {
    match en {
        Number::Integer(_) => Ok(Expr::number(bn.pow(en)?)),
        Number::Rational(r) => {
            if !bn.is_exact() {
                return Ok(Expr::number(bn.pow(en)?));
            }
            if matches!(bn, Number::Integer(_) | Number::Rational(_)) {
                let (folded, surd) = split_rational_pow(bn, r)?;
                return Ok(match surd {
                    None => Expr::number(folded),
                    Some((surd_base, surd_exp)) => {
                        let mut terms = TermMap::default();
                        terms.insert(
                            Expr::number(surd_base),
                            Expr::number(Number::Rational(surd_exp)),
                        );
                        mul::mul_from_dict(folded, terms)
                    }
                });
            }
            // Exact complex bases are not expanded under rational
            // exponents.
            Ok(Expr::pow_node(
                Expr::number(bn.clone()),
                Expr::number(en.clone()),
            ))
        }
        // Exact complex exponents stay symbolic.
        Number::Complex(_) => Ok(Expr::pow_node(
            Expr::number(bn.clone()),
            Expr::number(en.clone()),
        )),
        _ => Ok(Expr::number(bn.pow(en)?)),
    }
}

/// Splits `base^exp` for an integer/rational base and rational exponent
/// into an exactly-folded numeric factor and an optional residual surd
/// `(base', fraction)` with the fraction in `(0, 1)`.
///
/// The folded factor accounts for the integer part of the exponent, an
/// `i` factored out of a negative base at half-integer exponents, and a
/// perfect-power collapse of the residual when the base has an exact
/// nth root.
pub(crate) fn split_rational_pow(
    base: &Number,
    exp: &Rational,
) -> Result<(Number, Option<(Number, Rational)>), ArithmeticError> {
    let num = exp.numerator();
    let den = exp.denominator();
    let (q, rem) = num.div_rem_floor(&den);
    let mut folded = base.pow(&Number::Integer(q))?;
    if rem.is_zero() {
        return Ok((folded, None));
    }

    let mut surd_base = base.clone();
    if surd_base.is_negative() && den == Integer::new(2) * rem.clone() {
        // (-a)^(k + 1/2): the sign leaves as a factor of i.
        folded = folded.mul(&Number::i());
        surd_base = surd_base.neg();
    }

    let root_index = den.to_i64().and_then(|v| u32::try_from(v).ok());
    let root_power = rem.to_i64().and_then(|v| u32::try_from(v).ok());
    if let (Some(n), Some(k)) = (root_index, root_power) {
        if let Some(root) = exact_nth_root(&surd_base, n) {
            let lifted = root.pow(&Number::integer(i64::from(k)))?;
            return Ok((folded.mul(&lifted), None));
        }
    }

    let rest = Rational::new(rem, den).expect("denominator is positive");
    Ok((folded, Some((surd_base, rest))))
}

fn exact_nth_root(base: &Number, n: u32) -> Option<Number> {
    match base {
        Number::Integer(v) => {
            let (root, exact) = v.nth_root(n);
            exact.then(|| Number::Integer(root))
        }
        Number::Rational(r) => {
            let (root, exact) = r.nth_root(n);
            exact.then(|| Number::from_rational(root))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mul::mul;

    fn x() -> Expr {
        Expr::symbol("x")
    }

    fn y() -> Expr {
        Expr::symbol("y")
    }

    fn rat(n: i64, d: i64) -> Expr {
        Expr::number(Number::rational(n, d).unwrap())
    }

    #[test]
    fn integer_folding() {
        assert_eq!(
            pow(&Expr::integer(2), &Expr::integer(10)).unwrap(),
            Expr::integer(1024)
        );
        assert_eq!(pow(&Expr::integer(2), &Expr::integer(-1)).unwrap(), rat(1, 2));
        assert_eq!(pow(&rat(2, 3), &Expr::integer(2)).unwrap(), rat(4, 9));
    }

    #[test]
    fn perfect_powers_collapse() {
        assert_eq!(
            pow(&Expr::integer(27), &rat(1, 3)).unwrap(),
            Expr::integer(3)
        );
        assert_eq!(pow(&rat(9, 4), &rat(1, 2)).unwrap(), rat(3, 2));
        assert_eq!(pow(&Expr::integer(8), &rat(1, 3)).unwrap(), Expr::integer(2));
    }

    #[test]
    fn irrational_surds_survive() {
        let surd = pow(&Expr::integer(7), &rat(1, 3)).unwrap();
        assert!(matches!(surd.kind(), ExprKind::Pow { .. }));

        let sqrt8 = pow(&Expr::integer(8), &rat(1, 2)).unwrap();
        assert!(matches!(sqrt8.kind(), ExprKind::Pow { .. }));
    }

    #[test]
    fn exponent_integer_part_folds() {
        // 2^(3/2) = 2 * 2^(1/2)
        let p = pow(&Expr::integer(2), &rat(3, 2)).unwrap();
        let ExprKind::Mul { coef, terms } = p.kind() else {
            panic!("expected a product, got {p}");
        };
        assert_eq!(*coef, Number::integer(2));
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].0, Expr::integer(2));
        assert_eq!(terms[0].1, rat(1, 2));
    }

    #[test]
    fn negative_exponents_normalize() {
        // 2^(-1/2) = (1/2) * 2^(1/2)
        let p = pow(&Expr::integer(2), &rat(-1, 2)).unwrap();
        let ExprKind::Mul { coef, terms } = p.kind() else {
            panic!("expected a product, got {p}");
        };
        assert_eq!(*coef, Number::rational(1, 2).unwrap());
        assert_eq!(terms[0].1, rat(1, 2));
    }

    #[test]
    fn imaginary_results() {
        assert_eq!(
            pow(&Expr::integer(-1), &rat(1, 2)).unwrap(),
            Expr::number(Number::i())
        );

        // (-4)^(1/2) = 2i
        let p = pow(&Expr::integer(-4), &rat(1, 2)).unwrap();
        let expected = mul(&Expr::integer(2), &Expr::number(Number::i())).unwrap();
        assert_eq!(p, expected);
    }

    #[test]
    fn minus_one_integer_powers() {
        assert_eq!(
            pow(&Expr::integer(-1), &Expr::integer(10)).unwrap(),
            Expr::integer(1)
        );
        assert_eq!(
            pow(&Expr::integer(-1), &Expr::integer(7)).unwrap(),
            Expr::integer(-1)
        );
    }

    #[test]
    fn structural_fast_paths() {
        assert_eq!(pow(&x(), &Expr::integer(1)).unwrap(), x());
        assert_eq!(pow(&x(), &Expr::integer(0)).unwrap(), Expr::integer(1));
        assert_eq!(
            pow(&Expr::integer(0), &x()).unwrap(),
            Expr::integer(0)
        );
        assert_eq!(pow(&Expr::integer(1), &x()).unwrap(), Expr::integer(1));
    }

    #[test]
    fn zero_to_negative_power_fails() {
        assert_eq!(
            pow(&Expr::integer(0), &Expr::integer(-1)).unwrap_err(),
            ArithmeticError::DivisionByZero
        );
    }

    #[test]
    fn typed_one_from_inexact_zero_exponent() {
        let p = pow(&x(), &Expr::number(Number::real(0.0))).unwrap();
        assert_eq!(p, Expr::number(Number::real(1.0)));
    }

    #[test]
    fn inexact_pairs_fold() {
        let p = pow(
            &Expr::number(Number::real(0.5)),
            &Expr::number(Number::real(2.0)),
        )
        .unwrap();
        assert_eq!(p, Expr::number(Number::real(0.25)));
    }

    #[test]
    fn power_of_power_merges_integer_exponents() {
        let xy = pow(&x(), &y()).unwrap();
        let p = pow(&xy, &Expr::integer(2)).unwrap();
        let two_y = mul(&Expr::integer(2), &y()).unwrap();
        assert_eq!(p, pow(&x(), &two_y).unwrap());
    }

    #[test]
    fn power_distributes_over_products() {
        let xy = mul(&x(), &y()).unwrap();
        let p = pow(&xy, &Expr::integer(2)).unwrap();
        let ExprKind::Mul { coef, terms } = p.kind() else {
            panic!("expected a product, got {p}");
        };
        assert!(coef.is_one());
        assert_eq!(terms.len(), 2);
        assert!(terms
            .iter()
            .all(|(_, e)| *e == Expr::integer(2)));
    }

    #[test]
    fn sign_factors_out_under_fractional_exponents() {
        // (-3*x)^(1/2) = 3^(1/2) * (-x)^(1/2)
        let neg_three_x = mul(&Expr::integer(-3), &x()).unwrap();
        let p = pow(&neg_three_x, &rat(1, 2)).unwrap();
        let ExprKind::Mul { coef, terms } = p.kind() else {
            panic!("expected a product, got {p}");
        };
        assert!(coef.is_one());
        assert_eq!(terms.len(), 2);
        // One factor is 3^(1/2), the other is (-x)^(1/2).
        assert!(terms
            .iter()
            .any(|(b, e)| *b == Expr::integer(3) && *e == rat(1, 2)));
        assert!(terms.iter().any(|(b, _)| {
            matches!(b.kind(), ExprKind::Mul { coef, .. } if coef.is_minus_one())
        }));
    }

    #[test]
    fn complex_base_stays_under_rational_exponent() {
        let i = Expr::number(Number::i());
        let p = pow(&i, &rat(1, 2)).unwrap();
        assert!(matches!(p.kind(), ExprKind::Pow { .. }));
    }
}
