//! # altair-expr
//!
//! Canonical-form expression core for the Altair symbolic engine.
//!
//! This crate provides:
//! - Immutable, `Arc`-shared expression nodes with structural equality,
//!   hashing, and a total order
//! - The canonical product and sum builders (coefficient + dict
//!   representation with exact folding into the coefficient)
//! - The public operations: [`add`], [`sub`], [`mul`], [`mul_vec`],
//!   [`div`], [`neg`], [`pow`]
//!
//! ## Canonical form
//!
//! Structurally equal expressions are bit-identical nodes: two products
//! of the same factors compare equal no matter the order they were
//! assembled in, and every numeric sub-term that can fold exactly into
//! the coefficient has been folded. Structural equality therefore
//! implies mathematical equality (but not the converse).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod add;
pub mod expr;
pub mod mul;
mod ordering;
pub mod pow;
pub mod symbol;

#[cfg(test)]
mod proptests;

pub use add::{add, add_vec, as_coef_term, sub};
pub use expr::{Expr, ExprKind};
pub use mul::{as_base_exp, div, mul, mul_vec, neg};
pub use pow::pow;
pub use symbol::Symbol;

pub use altair_num::{ArithmeticError, Number};
