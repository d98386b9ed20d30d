//! Canonical product builder.
//!
//! A product is assembled in a function-local accumulator: a running
//! numeric coefficient plus a `base -> exponent` dict. [`insert_term`]
//! decides, for every incoming factor, whether it folds into the
//! coefficient or stays symbolic; [`mul_from_dict`] finalizes the
//! accumulator into the unique canonical node.
//!
//! Exact `Complex` bases fold into the coefficient only at exponents
//! +1/-1, while `Integer`/`Rational` bases fold every integer exponent.
//! This asymmetry is deliberate and canonical forms depend on it.

use altair_num::{ArithmeticError, Number};
use num_traits::Zero;
use rustc_hash::FxHashMap;

use crate::add::add;
use crate::expr::{Expr, ExprKind};
use crate::pow::{pow, split_rational_pow};

/// Accumulator dict used while assembling a product.
pub(crate) type TermMap = FxHashMap<Expr, Expr>;

/// Multiplies two expressions into canonical form.
///
/// # Errors
///
/// Propagates [`ArithmeticError`] from numeric folding.
pub fn mul(a: &Expr, b: &Expr) -> Result<Expr, ArithmeticError> {
    let mut coef = Number::one();
    let mut terms = TermMap::default();
    match (a.kind(), b.kind()) {
        (
            ExprKind::Mul {
                coef: ca,
                terms: ta,
            },
            ExprKind::Mul {
                coef: cb,
                terms: tb,
            },
        ) => {
            // coef stays 1 when both are coefficient-free, the common
            // case for products inside a sum.
            if !(ca.is_one() && cb.is_one()) {
                coef = ca.mul(cb);
            }
            terms = ta.iter().cloned().collect();
            for (base, exp) in tb {
                insert_term(&mut coef, &mut terms, base.clone(), exp.clone())?;
            }
        }
        (
            ExprKind::Mul {
                coef: ca,
                terms: ta,
            },
            _,
        ) => {
            coef = ca.clone();
            terms = ta.iter().cloned().collect();
            merge_factor(&mut coef, &mut terms, b)?;
        }
        (
            _,
            ExprKind::Mul {
                coef: cb,
                terms: tb,
            },
        ) => {
            coef = cb.clone();
            terms = tb.iter().cloned().collect();
            merge_factor(&mut coef, &mut terms, a)?;
        }
        _ => {
            merge_factor(&mut coef, &mut terms, a)?;
            merge_factor(&mut coef, &mut terms, b)?;
        }
    }
    Ok(mul_from_dict(coef, terms))
}

/// Multiplies a list of factors into canonical form.
///
/// # Errors
///
/// Propagates [`ArithmeticError`] from numeric folding.
pub fn mul_vec(factors: &[Expr]) -> Result<Expr, ArithmeticError> {
    let mut result = Expr::number(Number::one());
    for factor in factors {
        result = mul(&result, factor)?;
    }
    Ok(result)
}

/// Divides `a` by `b`: `a * b^-1`.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] for an exact zero
/// divisor.
pub fn div(a: &Expr, b: &Expr) -> Result<Expr, ArithmeticError> {
    let inverse = pow(b, &Expr::integer(-1))?;
    mul(a, &inverse)
}

/// Negates an expression: `-1 * a`.
///
/// # Errors
///
/// Propagates [`ArithmeticError`] from numeric folding.
pub fn neg(a: &Expr) -> Result<Expr, ArithmeticError> {
    mul(&Expr::number(Number::minus_one()), a)
}

fn merge_factor(
    coef: &mut Number,
    terms: &mut TermMap,
    factor: &Expr,
) -> Result<(), ArithmeticError> {
    if let Some(n) = factor.as_number() {
        *coef = coef.mul(n);
        return Ok(());
    }
    let (base, exp) = as_base_exp(factor);
    insert_term(coef, terms, base, exp)
}

/// Decomposes a node into a `(base, exponent)` pair.
///
/// Plain nodes decompose to `(node, 1)`; powers split; rational numbers
/// normalize so the base always satisfies `|numerator| >= |denominator|`
/// (`2/3` becomes `(3/2)^-1`), making reciprocal pairs canonicalize
/// consistently.
#[must_use]
pub fn as_base_exp(e: &Expr) -> (Expr, Expr) {
    match e.kind() {
        ExprKind::Pow { base, exp } => (base.clone(), exp.clone()),
        ExprKind::Number(Number::Rational(r)) => {
            if r.numerator().abs() < r.denominator() {
                let flipped = r.recip().expect("canonical rational is non-zero");
                (
                    Expr::number(Number::from_rational(flipped)),
                    Expr::integer(-1),
                )
            } else {
                (e.clone(), Expr::integer(1))
            }
        }
        _ => {
            debug_assert!(!matches!(e.kind(), ExprKind::Mul { .. }));
            (e.clone(), Expr::integer(1))
        }
    }
}

/// Re-materializes one dict entry as a standalone node.
#[must_use]
pub(crate) fn entry_as_expr(base: &Expr, exp: &Expr) -> Expr {
    let mut terms = TermMap::default();
    terms.insert(base.clone(), exp.clone());
    mul_from_dict(Number::one(), terms)
}

/// Finalizes an accumulator into the unique canonical node.
///
/// - a zero coefficient wins outright (and keeps its kind, so `0.0`
///   stays machine precision);
/// - an empty dict is the bare coefficient;
/// - a single entry degenerates to the base, a power, or a full product
///   depending on the coefficient and exponent;
/// - otherwise a product node with entries sorted by base.
#[must_use]
pub(crate) fn mul_from_dict(coef: Number, terms: TermMap) -> Expr {
    if coef.is_zero() {
        return Expr::number(coef);
    }
    let mut entries: Vec<(Expr, Expr)> = terms.into_iter().collect();
    if entries.is_empty() {
        return Expr::number(coef);
    }
    entries.sort_by(|x, y| x.0.cmp(&y.0));
    if entries.len() == 1 && coef.is_one() {
        let (base, exp) = entries.remove(0);
        if exp.is_one() {
            return base;
        }
        return Expr::pow_node(base, exp);
    }
    Expr::mul_node(coef, entries)
}

/// Inserts `base^exp` into the accumulator, folding where possible.
///
/// # Errors
///
/// Propagates [`ArithmeticError`] from numeric folding (an exact
/// division by zero encountered mid-fold).
pub(crate) fn insert_term(
    coef: &mut Number,
    terms: &mut TermMap,
    base: Expr,
    exp: Expr,
) -> Result<(), ArithmeticError> {
    if let Some(existing) = terms.get(&base).cloned() {
        // Combine the exponents, then re-run the folding decision on the
        // updated pair.
        let combined = match (existing.as_number(), exp.as_number()) {
            (Some(a), Some(b)) => Expr::number(a.add(b)),
            _ => add(&existing, &exp),
        };
        terms.remove(&base);
        update_entry(coef, terms, base, combined)
    } else {
        insert_new(coef, terms, base, exp)
    }
}

/// Folding decision for a base that is not yet present in the dict.
fn insert_new(
    coef: &mut Number,
    terms: &mut TermMap,
    base: Expr,
    exp: Expr,
) -> Result<(), ArithmeticError> {
    if let (Some(bn), Some(en)) = (base.as_number(), exp.as_number()) {
        match (bn, en) {
            (Number::Integer(_) | Number::Rational(_), Number::Integer(_)) => {
                *coef = coef.mul(&bn.pow(en)?);
                return Ok(());
            }
            (Number::Integer(_) | Number::Rational(_), Number::Rational(r)) => {
                let (folded, surd) = split_rational_pow(bn, r)?;
                *coef = coef.mul(&folded);
                if let Some((surd_base, surd_exp)) = surd {
                    merge_surd(
                        coef,
                        terms,
                        Expr::number(surd_base),
                        Expr::number(Number::Rational(surd_exp)),
                    )?;
                }
                return Ok(());
            }
            (Number::Complex(_), Number::Integer(_)) if en.is_one() => {
                *coef = coef.mul(bn);
                return Ok(());
            }
            (Number::Complex(_), Number::Integer(_)) if en.is_minus_one() => {
                *coef = coef.div(bn)?;
                return Ok(());
            }
            _ => {
                if !bn.is_exact() && !en.is_exact() {
                    // Two inexact operands always fold: 0.5^2.0 is 0.25.
                    *coef = coef.mul(&bn.pow(en)?);
                    return Ok(());
                }
            }
        }
    }
    if let (
        ExprKind::Mul {
            coef: sub_coef,
            terms: sub_terms,
        },
        Some(en),
    ) = (base.kind(), exp.as_number())
    {
        // A product base with an integer exponent distributes; a real
        // coefficient other than +-1 factors out. A non-real coefficient
        // stays wrapped whole.
        let unit = sub_coef.is_one() || sub_coef.is_minus_one();
        let real_scale = sub_coef.is_negative() || sub_coef.is_positive();
        if matches!(en, Number::Integer(_)) || (real_scale && !unit) {
            let en = en.clone();
            return power_of_product(sub_coef, sub_terms, &en, coef, terms);
        }
    }
    terms.insert(base, exp);
    Ok(())
}

/// A surd produced by perfect-power extraction is merged back through
/// the ordinary path when its base collides with an existing entry, and
/// inserted directly otherwise (its exponent is already in `(0, 1)` and
/// its base is not a perfect power, so re-running the folding decision
/// on it cannot make progress).
fn merge_surd(
    coef: &mut Number,
    terms: &mut TermMap,
    base: Expr,
    exp: Expr,
) -> Result<(), ArithmeticError> {
    if terms.contains_key(&base) {
        insert_term(coef, terms, base, exp)
    } else {
        terms.insert(base, exp);
        Ok(())
    }
}

/// Re-runs the folding decision after an exponent combination.
fn update_entry(
    coef: &mut Number,
    terms: &mut TermMap,
    base: Expr,
    exp: Expr,
) -> Result<(), ArithmeticError> {
    let Some(en) = exp.as_number().cloned() else {
        terms.insert(base, exp);
        return Ok(());
    };

    if let Number::Integer(ref int_exp) = en {
        if let Some(bn) = base.as_number() {
            match bn {
                Number::Integer(_) | Number::Rational(_) => {
                    if !int_exp.is_zero() {
                        *coef = coef.mul(&bn.pow(&en)?);
                    }
                    return Ok(());
                }
                Number::Complex(_) if en.is_one() => {
                    *coef = coef.mul(bn);
                    return Ok(());
                }
                Number::Complex(_) if en.is_minus_one() => {
                    *coef = coef.div(bn)?;
                    return Ok(());
                }
                _ => {}
            }
        }
        if int_exp.is_zero() {
            // Exact zero exponent: the entry vanishes without a trace.
            return Ok(());
        }
        if let ExprKind::Mul {
            coef: sub_coef,
            terms: sub_terms,
        } = base.kind()
        {
            // An integer exponent distributes into a product base.
            return power_of_product(sub_coef, sub_terms, &en, coef, terms);
        }
        terms.insert(base, exp);
        return Ok(());
    }

    if let Number::Rational(ref r) = en {
        if let Some(bn) = base.as_number() {
            if matches!(bn, Number::Integer(_) | Number::Rational(_)) {
                let (folded, surd) = split_rational_pow(bn, r)?;
                *coef = coef.mul(&folded);
                if let Some((surd_base, surd_exp)) = surd {
                    merge_surd(
                        coef,
                        terms,
                        Expr::number(surd_base),
                        Expr::number(Number::Rational(surd_exp)),
                    )?;
                }
                return Ok(());
            }
            // Other numeric bases: fold the integer part of the exponent
            // so the remaining fraction lives in [0, 1).
            let num = r.numerator();
            let den = r.denominator();
            if num.is_negative() || num.abs() > den {
                let (q, rem) = num.div_rem_floor(&den);
                *coef = coef.mul(&bn.pow(&Number::Integer(q))?);
                if rem.is_zero() {
                    return Ok(());
                }
                let rest = altair_num::Rational::new(rem, den)
                    .expect("denominator is positive");
                terms.insert(base, Expr::number(Number::from_rational(rest)));
                return Ok(());
            }
        }
        terms.insert(base, exp);
        return Ok(());
    }

    if en.is_zero() {
        // Inexact zero exponent: fold a typed one into the coefficient
        // so the result keeps the exponent's numeric kind.
        *coef = coef.mul(&en.pow(&Number::integer(0))?);
        return Ok(());
    }

    if let Some(bn) = base.as_number() {
        if !bn.is_exact() && !en.is_exact() {
            *coef = coef.mul(&bn.pow(&en)?);
            return Ok(());
        }
    }

    if let ExprKind::Mul {
        coef: sub_coef,
        terms: sub_terms,
    } = base.kind()
    {
        if !(sub_coef.is_one() || sub_coef.is_minus_one()) {
            // {(2*x): y} must have been absorbed: redistribute.
            return power_of_product(sub_coef, sub_terms, &en, coef, terms);
        }
    }

    terms.insert(base, exp);
    Ok(())
}

/// Raises an already-canonical product to a numeric power, merging the
/// outcome into the accumulator.
///
/// Integer exponents distribute into the coefficient and every entry,
/// recursing into entries whose base is itself a sign-only sub-product.
/// Non-integer exponents factor the sign out of a negative coefficient
/// (so branch behavior is deterministic), and wrap the whole product
/// opaquely when the coefficient is not real.
pub(crate) fn power_of_product(
    mul_coef: &Number,
    mul_terms: &[(Expr, Expr)],
    exp: &Number,
    coef: &mut Number,
    terms: &mut TermMap,
) -> Result<(), ArithmeticError> {
    if exp.is_zero() {
        // (x*y)^0.0 is a typed 1.
        *coef = coef.mul(&exp.pow(&Number::integer(0))?);
        return Ok(());
    }

    let new_coef: Expr;
    if matches!(exp, Number::Integer(_)) {
        new_coef = pow(&Expr::number(mul_coef.clone()), &Expr::number(exp.clone()))?;
        for (base, entry_exp) in mul_terms {
            let new_exp = mul(entry_exp, &Expr::number(exp.clone()))?;
            if let (
                Some(n @ Number::Integer(_)),
                ExprKind::Mul {
                    coef: sub_coef,
                    terms: sub_terms,
                },
            ) = (new_exp.as_number(), base.kind())
            {
                power_of_product(sub_coef, sub_terms, n, coef, terms)?;
                continue;
            }
            insert_term(coef, terms, base.clone(), new_exp)?;
        }
    } else if mul_coef.is_negative() {
        // (-3*x*y)^(1/2) -> 3^(1/2) * (-x*y)^(1/2)
        new_coef = pow(
            &Expr::number(mul_coef.neg()),
            &Expr::number(exp.clone()),
        )?;
        let inner = from_parts(Number::minus_one(), mul_terms);
        insert_term(coef, terms, inner, Expr::number(exp.clone()))?;
    } else if mul_coef.is_positive() {
        // (3*x*y)^(1/2) -> 3^(1/2) * (x*y)^(1/2)
        new_coef = pow(&Expr::number(mul_coef.clone()), &Expr::number(exp.clone()))?;
        let inner = from_parts(Number::one(), mul_terms);
        insert_term(coef, terms, inner, Expr::number(exp.clone()))?;
    } else {
        // ((1+2*I)*x*y)^(1/2) is kept whole.
        new_coef = Expr::number(Number::one());
        let whole = from_parts(mul_coef.clone(), mul_terms);
        insert_term(coef, terms, whole, Expr::number(exp.clone()))?;
    }

    match new_coef.kind() {
        ExprKind::Number(n) => {
            *coef = coef.mul(n);
        }
        ExprKind::Mul {
            coef: c2,
            terms: t2,
        } => {
            *coef = coef.mul(c2);
            for (b, e) in t2 {
                insert_term(coef, terms, b.clone(), e.clone())?;
            }
        }
        _ => {
            let (b, e) = as_base_exp(&new_coef);
            insert_term(coef, terms, b, e)?;
        }
    }
    Ok(())
}

/// Rebuilds a canonical node from a coefficient and a term slice.
pub(crate) fn from_parts(coef: Number, entries: &[(Expr, Expr)]) -> Expr {
    let terms: TermMap = entries.iter().cloned().collect();
    mul_from_dict(coef, terms)
}
