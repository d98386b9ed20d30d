//! Expression nodes.
//!
//! An [`Expr`] is an immutable node shared through `Arc`: expressions
//! form a directed acyclic graph by construction (building is strictly
//! bottom-up), equality and hashing are structural, and a total order
//! over nodes fixes the storage order of canonical term lists.
//!
//! Nodes are created exclusively through the canonicalizing operations
//! in [`crate::mul`], [`crate::add`] and [`crate::pow`]; the raw
//! constructors here check the canonical-form invariants in debug
//! builds.

use std::fmt;
use std::sync::Arc;

use altair_num::Number;
use smallvec::SmallVec;

use crate::mul;
use crate::symbol::Symbol;

/// An immutable, shareable expression node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Expr(Arc<ExprKind>);

/// The node variants.
#[derive(PartialEq, Eq, Hash, Debug)]
pub enum ExprKind {
    /// A numeric leaf.
    Number(Number),
    /// A symbolic variable leaf.
    Symbol(Symbol),
    /// A canonical sum: `coef + sum(term * coefficient)`.
    ///
    /// Terms are sorted by the expression order and no term is itself a
    /// number, a sum, or a product with a numeric coefficient other
    /// than 1.
    Add {
        /// The folded numeric part of the sum.
        coef: Number,
        /// `(term, coefficient)` pairs, sorted by term.
        terms: Vec<(Expr, Number)>,
    },
    /// A canonical product: `coef * prod(base ^ exponent)`.
    ///
    /// Terms are sorted by base; see the crate documentation for the
    /// full invariant list.
    Mul {
        /// The folded numeric coefficient, never zero.
        coef: Number,
        /// `(base, exponent)` pairs, sorted by base.
        terms: Vec<(Expr, Expr)>,
    },
    /// A power that did not fold: `base ^ exp`.
    Pow {
        /// The base.
        base: Expr,
        /// The exponent.
        exp: Expr,
    },
}

impl Expr {
    /// Creates a numeric leaf.
    #[must_use]
    pub fn number(n: impl Into<Number>) -> Self {
        Self(Arc::new(ExprKind::Number(n.into())))
    }

    /// Creates an exact integer leaf.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::number(Number::integer(value))
    }

    /// Creates a symbol leaf.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Self(Arc::new(ExprKind::Symbol(Symbol::new(name))))
    }

    /// Returns the node variant.
    #[must_use]
    pub fn kind(&self) -> &ExprKind {
        &self.0
    }

    /// Returns the numeric value if this is a number leaf.
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self.kind() {
            ExprKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true if this is the exact integer one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(Number::is_one)
    }

    /// Returns true if this is a zero of any numeric kind.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Number::is_zero)
    }

    /// Builds a product node from already-canonical parts.
    ///
    /// The invariants are checked in debug builds only; handing a
    /// non-canonical coefficient/dict pair to this factory is a
    /// programmer error.
    #[must_use]
    pub(crate) fn mul_node(coef: Number, terms: Vec<(Expr, Expr)>) -> Self {
        debug_assert!(
            mul_is_canonical(&coef, &terms),
            "non-canonical product: {coef} * {terms:?}"
        );
        Self(Arc::new(ExprKind::Mul { coef, terms }))
    }

    /// Builds a power node from already-canonical parts.
    #[must_use]
    pub(crate) fn pow_node(base: Expr, exp: Expr) -> Self {
        debug_assert!(
            pow_is_canonical(&base, &exp),
            "non-canonical power: {base:?} ^ {exp:?}"
        );
        Self(Arc::new(ExprKind::Pow { base, exp }))
    }

    /// Builds a sum node from already-canonical parts.
    #[must_use]
    pub(crate) fn add_node(coef: Number, terms: Vec<(Expr, Number)>) -> Self {
        debug_assert!(
            add_is_canonical(&coef, &terms),
            "non-canonical sum: {coef} + {terms:?}"
        );
        Self(Arc::new(ExprKind::Add { coef, terms }))
    }

    /// Re-materializes a canonical product as an explicit factor list.
    ///
    /// The coefficient is emitted first when it is not 1, and each
    /// `(base, exponent)` entry is folded back out as a standalone
    /// power. For any non-product node the list is the node itself.
    #[must_use]
    pub fn factors(&self) -> SmallVec<[Expr; 4]> {
        match self.kind() {
            ExprKind::Mul { coef, terms } => {
                let mut out = SmallVec::new();
                if !coef.is_one() {
                    out.push(Self::number(coef.clone()));
                }
                for (base, exp) in terms {
                    out.push(mul::entry_as_expr(base, exp));
                }
                out
            }
            _ => {
                let mut out = SmallVec::new();
                out.push(self.clone());
                out
            }
        }
    }

    /// Re-materializes a canonical sum as an explicit term list.
    ///
    /// The numeric part is emitted first when it is non-zero, and each
    /// `(term, coefficient)` entry becomes a standalone product.
    #[must_use]
    pub fn terms(&self) -> SmallVec<[Expr; 4]> {
        match self.kind() {
            ExprKind::Add { coef, terms } => {
                let mut out = SmallVec::new();
                if !coef.is_zero() {
                    out.push(Self::number(coef.clone()));
                }
                for (term, c) in terms {
                    out.push(crate::add::coeff_times_term(c.clone(), term.clone()));
                }
                out
            }
            _ => {
                let mut out = SmallVec::new();
                out.push(self.clone());
                out
            }
        }
    }
}

/// Checks the canonical product invariants.
pub(crate) fn mul_is_canonical(coef: &Number, terms: &[(Expr, Expr)]) -> bool {
    if coef.is_zero() {
        return false;
    }
    if terms.is_empty() {
        return false;
    }
    if terms.len() == 1 && coef.is_one() {
        // A single entry with coefficient 1 must have been a Pow or a
        // bare node.
        return false;
    }
    for (base, exp) in terms {
        if let Some(bn) = base.as_number() {
            // Integer and Rational bases fold integer exponents; Complex
            // bases fold only at +1/-1 and may legitimately stay here.
            let foldable_base = matches!(bn, Number::Integer(_) | Number::Rational(_));
            if foldable_base && matches!(exp.as_number(), Some(Number::Integer(_))) {
                return false;
            }
            if bn.is_exact_zero() || bn.is_one() {
                return false;
            }
            if let Some(en) = exp.as_number() {
                if !bn.is_exact() && !en.is_exact() {
                    return false;
                }
            }
        }
        if exp.as_number().is_some_and(Number::is_zero) {
            return false;
        }
        match base.kind() {
            ExprKind::Mul { coef: mc, .. } => {
                if matches!(exp.as_number(), Some(Number::Integer(_))) {
                    return false;
                }
                if !(mc.is_one() || mc.is_minus_one()) {
                    // A real coefficient must have been factored out of
                    // the sub-product; only opaque non-real wraps keep
                    // theirs (and only under non-integer exponents).
                    let real_scale = mc.is_negative() || mc.is_positive();
                    if exp.as_number().is_some() && real_scale {
                        return false;
                    }
                }
            }
            ExprKind::Pow { .. } => return false,
            _ => {}
        }
    }
    true
}

/// Checks the canonical power invariants.
pub(crate) fn pow_is_canonical(base: &Expr, exp: &Expr) -> bool {
    if let Some(bn) = base.as_number() {
        if bn.is_exact_zero() || bn.is_one() {
            return false;
        }
        let folding_base = matches!(bn, Number::Integer(_) | Number::Rational(_));
        match exp.as_number() {
            Some(Number::Integer(_)) if folding_base => return false,
            Some(Number::Rational(r)) if folding_base => {
                // Rational exponents on foldable bases live in (0, 1).
                let proper = r.is_positive() && r.numerator().abs() < r.denominator();
                if !proper {
                    return false;
                }
            }
            Some(en) => {
                if !bn.is_exact() && !en.is_exact() {
                    return false;
                }
            }
            None => {}
        }
    }
    if exp.as_number().is_some_and(Number::is_zero) {
        return false;
    }
    if exp.is_one() {
        return false;
    }
    if matches!(exp.as_number(), Some(Number::Integer(_)))
        && matches!(base.kind(), ExprKind::Mul { .. } | ExprKind::Pow { .. })
    {
        return false;
    }
    true
}

/// Checks the canonical sum invariants.
pub(crate) fn add_is_canonical(coef: &Number, terms: &[(Expr, Number)]) -> bool {
    if terms.is_empty() {
        return false;
    }
    if terms.len() == 1 && coef.is_exact_zero() {
        return false;
    }
    for (term, c) in terms {
        if term.as_number().is_some() {
            return false;
        }
        if c.is_zero() {
            return false;
        }
        if let ExprKind::Mul { coef: mc, .. } = term.kind() {
            if !mc.is_one() {
                return false;
            }
        }
    }
    true
}

// Rendering is intentionally minimal: enough parentheses to be
// unambiguous, no layout decisions. Pretty-printing lives outside this
// core.
fn write_atom(e: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match e.kind() {
        ExprKind::Number(_) | ExprKind::Symbol(_) => write!(f, "{e}"),
        _ => write!(f, "({e})"),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ExprKind::Number(n) => write!(f, "{n}"),
            ExprKind::Symbol(s) => write!(f, "{s}"),
            ExprKind::Add { coef, terms } => {
                let mut first = if coef.is_zero() {
                    true
                } else {
                    write!(f, "{coef}")?;
                    false
                };
                for (term, c) in terms {
                    if !first {
                        write!(f, " + ")?;
                    }
                    first = false;
                    if c.is_one() {
                        write!(f, "{term}")?;
                    } else {
                        write!(f, "{c}*")?;
                        write_atom(term, f)?;
                    }
                }
                Ok(())
            }
            ExprKind::Mul { coef, terms } => {
                let mut first = if coef.is_one() {
                    true
                } else {
                    write!(f, "{coef}")?;
                    false
                };
                for (base, exp) in terms {
                    if !first {
                        write!(f, "*")?;
                    }
                    first = false;
                    write_atom(base, f)?;
                    if !exp.is_one() {
                        write!(f, "^")?;
                        write_atom(exp, f)?;
                    }
                }
                Ok(())
            }
            ExprKind::Pow { base, exp } => {
                write_atom(base, f)?;
                write!(f, "^")?;
                write_atom(exp, f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(e: &Expr) -> u64 {
        let mut h = DefaultHasher::new();
        e.hash(&mut h);
        h.finish()
    }

    #[test]
    fn structural_equality_not_identity() {
        let a = Expr::symbol("x");
        let b = Expr::symbol("x");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn numbers_compare_by_value_and_kind() {
        assert_eq!(Expr::integer(2), Expr::integer(2));
        assert_ne!(Expr::integer(2), Expr::number(Number::real(2.0)));
    }

    #[test]
    fn factors_of_a_leaf_is_the_leaf() {
        let x = Expr::symbol("x");
        let fs = x.factors();
        assert_eq!(fs.len(), 1);
        assert_eq!(fs[0], x);
    }

    #[test]
    fn display_is_stable() {
        let p = crate::mul::mul(
            &Expr::integer(2),
            &crate::pow::pow(&Expr::symbol("x"), &Expr::integer(3)).unwrap(),
        )
        .unwrap();
        assert_eq!(p.to_string(), "2*x^3");
    }
}
