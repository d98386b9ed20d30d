//! Total order over expression nodes.
//!
//! The order is structural, used for canonical storage of term lists
//! and deterministic display. It carries no semantic meaning: nodes of
//! different kinds compare by a fixed kind rank, nodes of the same kind
//! compare by their parts (dict sizes first for sums and products, then
//! the coefficient, then the entries).

use std::cmp::Ordering;

use crate::expr::{Expr, ExprKind};

fn kind_rank(e: &ExprKind) -> u8 {
    match e {
        ExprKind::Number(_) => 0,
        ExprKind::Symbol(_) => 1,
        ExprKind::Pow { .. } => 2,
        ExprKind::Mul { .. } => 3,
        ExprKind::Add { .. } => 4,
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.kind(), other.kind()) {
            (ExprKind::Number(a), ExprKind::Number(b)) => a.cmp(b),
            (ExprKind::Symbol(a), ExprKind::Symbol(b)) => a.cmp(b),
            (
                ExprKind::Pow { base: ba, exp: ea },
                ExprKind::Pow { base: bb, exp: eb },
            ) => ba.cmp(bb).then_with(|| ea.cmp(eb)),
            (
                ExprKind::Mul { coef: ca, terms: ta },
                ExprKind::Mul { coef: cb, terms: tb },
            ) => ta
                .len()
                .cmp(&tb.len())
                .then_with(|| ca.cmp(cb))
                .then_with(|| ta.cmp(tb)),
            (
                ExprKind::Add { coef: ca, terms: ta },
                ExprKind::Add { coef: cb, terms: tb },
            ) => ta
                .len()
                .cmp(&tb.len())
                .then_with(|| ca.cmp(cb))
                .then_with(|| ta.cmp(tb)),
            (a, b) => kind_rank(a).cmp(&kind_rank(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_before_symbols() {
        let n = Expr::integer(5);
        let x = Expr::symbol("x");
        assert_eq!(n.cmp(&x), Ordering::Less);
    }

    #[test]
    fn symbols_by_name() {
        assert!(Expr::symbol("a") < Expr::symbol("b"));
        assert_eq!(Expr::symbol("x").cmp(&Expr::symbol("x")), Ordering::Equal);
    }

    #[test]
    fn order_consistent_with_equality() {
        let a = Expr::integer(2);
        let b = Expr::integer(2);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
    }
}
