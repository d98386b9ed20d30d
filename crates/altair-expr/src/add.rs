//! Canonical sum builder.
//!
//! A sum is assembled the same way a product is: a running numeric part
//! plus a `term -> coefficient` dict. Numeric operands fold into the
//! running part, nested sums splice in, and a product with a numeric
//! coefficient other than 1 is split so the dict key is always
//! coefficient-free.

use altair_num::{ArithmeticError, Number};
use rustc_hash::FxHashMap;

use crate::expr::{Expr, ExprKind};
use crate::mul;

/// Accumulator dict used while assembling a sum.
pub(crate) type SumMap = FxHashMap<Expr, Number>;

/// Adds two expressions into canonical form.
#[must_use]
pub fn add(a: &Expr, b: &Expr) -> Expr {
    let mut coef = Number::zero();
    let mut terms = SumMap::default();
    merge_term(&mut coef, &mut terms, &Number::one(), a);
    merge_term(&mut coef, &mut terms, &Number::one(), b);
    add_from_dict(coef, terms)
}

/// Adds a list of terms into canonical form.
#[must_use]
pub fn add_vec(items: &[Expr]) -> Expr {
    let mut coef = Number::zero();
    let mut terms = SumMap::default();
    for item in items {
        merge_term(&mut coef, &mut terms, &Number::one(), item);
    }
    add_from_dict(coef, terms)
}

/// Subtracts `b` from `a`.
///
/// # Errors
///
/// Propagates [`ArithmeticError`] from numeric folding in the negation.
pub fn sub(a: &Expr, b: &Expr) -> Result<Expr, ArithmeticError> {
    let negated = mul::neg(b)?;
    Ok(add(a, &negated))
}

/// Adds `c * t` into the dict, removing the entry when the combined
/// coefficient cancels to zero.
pub(crate) fn add_term(terms: &mut SumMap, c: Number, t: Expr) {
    if let Some(existing) = terms.get_mut(&t) {
        *existing = existing.add(&c);
        if existing.is_zero() {
            terms.remove(&t);
        }
    } else if !c.is_zero() {
        terms.insert(t, c);
    }
}

/// Merges `c * term` into the accumulator, splicing nested sums and
/// splitting numeric coefficients off products.
pub(crate) fn merge_term(coef: &mut Number, terms: &mut SumMap, c: &Number, term: &Expr) {
    match term.kind() {
        ExprKind::Number(n) => {
            *coef = coef.add(&c.mul(n));
        }
        ExprKind::Add {
            coef: inner_coef,
            terms: inner_terms,
        } => {
            if c.is_one() {
                for (t, tc) in inner_terms {
                    add_term(terms, tc.clone(), t.clone());
                }
                *coef = coef.add(inner_coef);
            } else {
                add_term(terms, c.clone(), term.clone());
            }
        }
        _ => {
            let (c2, t2) = as_coef_term(term);
            add_term(terms, c.mul(&c2), t2);
        }
    }
}

/// Decomposes a node into `(coefficient, coefficient-free term)`.
///
/// Products with a numeric coefficient other than 1 split it off; plain
/// numbers decompose to `(number, 1)`; everything else carries
/// coefficient 1.
#[must_use]
pub fn as_coef_term(e: &Expr) -> (Number, Expr) {
    match e.kind() {
        ExprKind::Mul { coef, terms } if !coef.is_one() => {
            (coef.clone(), mul::from_parts(Number::one(), terms))
        }
        ExprKind::Number(n) => (n.clone(), Expr::number(Number::one())),
        _ => (Number::one(), e.clone()),
    }
}

/// Finalizes a sum accumulator into the unique canonical node.
#[must_use]
pub(crate) fn add_from_dict(coef: Number, terms: SumMap) -> Expr {
    let mut entries: Vec<(Expr, Number)> = terms.into_iter().collect();
    if entries.is_empty() {
        return Expr::number(coef);
    }
    if entries.len() == 1 && coef.is_exact_zero() {
        let (t, c) = entries.remove(0);
        return coeff_times_term(c, t);
    }
    entries.sort_by(|x, y| x.0.cmp(&y.0));
    Expr::add_node(coef, entries)
}

/// Materializes `c * t` as a canonical standalone node.
pub(crate) fn coeff_times_term(c: Number, t: Expr) -> Expr {
    if c.is_one() {
        return t;
    }
    match t.kind() {
        ExprKind::Mul { coef, terms } => {
            debug_assert!(coef.is_one(), "sum entries are coefficient-free");
            mul::from_parts(c, terms)
        }
        ExprKind::Pow { base, exp } => {
            mul::from_parts(c, &[(base.clone(), exp.clone())])
        }
        _ => mul::from_parts(c, &[(t.clone(), Expr::integer(1))]),
    }
}
