//! # Altair
//!
//! The arithmetic and term-algebra core of a symbolic-expression
//! engine: a multi-precision numeric tower and the canonical-form
//! builders for products and sums of symbolic terms.
//!
//! ## Features
//!
//! - **Exact arithmetic**: arbitrary-precision integers, rationals, and
//!   exact complex numbers
//! - **Floating tiers**: machine doubles and arbitrary-precision floats
//!   with explicit bit precision, promoted predictably
//! - **Canonical forms**: products and sums with a unique structural
//!   representation, so structural equality implies mathematical
//!   equality
//!
//! ## Quick Start
//!
//! ```rust
//! use altair::prelude::*;
//!
//! let x = Expr::symbol("x");
//! let p = mul(&mul(&Expr::integer(2), &x).unwrap(), &x).unwrap();
//! assert_eq!(p, mul(&Expr::integer(2), &pow(&x, &Expr::integer(2)).unwrap()).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use altair_expr as expr;
pub use altair_num as num;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use altair_expr::{
        add, add_vec, div, mul, mul_vec, neg, pow, sub, ArithmeticError, Expr, ExprKind, Number,
        Symbol,
    };
    pub use altair_num::{
        Complex, ComplexBig, ComplexDouble, Integer, Rational, RealBig, RealDouble,
    };
}
