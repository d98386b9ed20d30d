//! Error taxonomy for numeric and canonical-form operations.

use thiserror::Error;

/// Failures surfaced by the numeric tower and the canonical builders.
///
/// All failures are synchronous and raised at the operation that caused
/// them; no partial result escapes a canonicalizing factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// An exact zero appeared as a denominator.
    ///
    /// Only *exact* zeros raise this; machine and arbitrary-precision
    /// zero divisors follow IEEE semantics and produce infinities.
    #[error("division by zero")]
    DivisionByZero,

    /// The operation has no defined result for these operands.
    #[error("domain error in {op}")]
    DomainError {
        /// The operation that was attempted.
        op: &'static str,
    },
}

impl ArithmeticError {
    /// Shorthand for a [`ArithmeticError::DomainError`].
    #[must_use]
    pub fn domain(op: &'static str) -> Self {
        Self::DomainError { op }
    }
}
