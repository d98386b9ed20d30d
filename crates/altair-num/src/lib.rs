//! # altair-num
//!
//! Multi-precision numeric tower for the Altair symbolic engine.
//!
//! This crate provides the concrete numeric kinds that can appear as
//! coefficients and folded values in symbolic expressions:
//!
//! - Exact kinds: [`Integer`], [`Rational`], [`Complex`]
//! - Machine kinds: [`RealDouble`], [`ComplexDouble`]
//! - Arbitrary-precision kinds: [`RealBig`], [`ComplexBig`]
//!
//! [`Number`] is the tagged union over all seven kinds and implements the
//! pairwise arithmetic dispatch with exactness and precision promotion.
//!
//! ## Promotion rules
//!
//! - Exact with exact stays exact.
//! - A machine operand makes the result machine precision.
//! - An arbitrary-precision operand makes the result arbitrary precision
//!   at the maximum precision of the arbitrary-precision operands; a
//!   machine operand never raises that precision.
//! - Combining a real kind with a complex kind of the same tier yields
//!   the complex kind of that tier.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bigfloat;
pub mod complex;
pub mod double;
pub mod error;
pub mod integer;
pub mod number;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use bigfloat::{ComplexBig, RealBig};
pub use complex::Complex;
pub use double::{ComplexDouble, RealDouble};
pub use error::ArithmeticError;
pub use integer::Integer;
pub use number::Number;
pub use rational::Rational;
