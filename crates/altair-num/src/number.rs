//! The numeric tower: a tagged union over all seven kinds with pairwise
//! arithmetic dispatch.
//!
//! Every binary operation first aligns its operands onto a common tier
//! through one exhaustive promotion matrix ([`Aligned`]), then computes
//! within the tier. This closes the kind-pair matrix at compile time:
//! adding a kind forces every operation to handle it.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;

use crate::bigfloat::{ComplexBig, RealBig};
use crate::complex::Complex;
use crate::double::{ComplexDouble, RealDouble};
use crate::error::ArithmeticError;
use crate::integer::Integer;
use crate::rational::Rational;

/// A concrete numeric value of any kind in the tower.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Number {
    /// Exact arbitrary-precision integer.
    Integer(Integer),
    /// Exact rational in lowest terms, denominator > 1.
    Rational(Rational),
    /// Exact complex with a non-zero imaginary part.
    Complex(Complex),
    /// Machine precision real.
    RealDouble(RealDouble),
    /// Machine precision complex.
    ComplexDouble(ComplexDouble),
    /// Arbitrary precision real.
    RealBig(RealBig),
    /// Arbitrary precision complex.
    ComplexBig(ComplexBig),
}

/// Two operands promoted onto a common tier.
enum Aligned {
    Integer(Integer, Integer),
    Rational(Rational, Rational),
    Complex(Complex, Complex),
    RealDouble(f64, f64),
    ComplexDouble(ComplexDouble, ComplexDouble),
    RealBig(RealBig, RealBig, usize),
    ComplexBig(ComplexBig, ComplexBig, usize),
}

/// Precision tier of a kind: exact, machine, or arbitrary.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tier {
    Exact,
    Machine,
    Big,
}

impl Number {
    /// The exact integer zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::Integer(Integer::zero())
    }

    /// The exact integer one.
    #[must_use]
    pub fn one() -> Self {
        Self::Integer(Integer::one())
    }

    /// The exact integer minus one.
    #[must_use]
    pub fn minus_one() -> Self {
        Self::Integer(Integer::new(-1))
    }

    /// The imaginary unit.
    #[must_use]
    pub fn i() -> Self {
        Self::Complex(Complex::i())
    }

    /// Creates an exact integer.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::Integer(Integer::new(value))
    }

    /// Creates an exact rational, collapsing to an integer when the
    /// reduced denominator is 1.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] on a zero denominator.
    pub fn rational(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Ok(Self::from_rational(Rational::from_i64(
            numerator,
            denominator,
        )?))
    }

    /// Wraps a rational, collapsing to an integer when possible.
    #[must_use]
    pub fn from_rational(r: Rational) -> Self {
        match r.to_integer() {
            Some(n) => Self::Integer(n),
            None => Self::Rational(r),
        }
    }

    /// Creates an exact complex, collapsing to a real kind when the
    /// imaginary part is zero.
    #[must_use]
    pub fn complex(re: Rational, im: Rational) -> Self {
        Self::collapse_complex(Complex::from_parts(re, im))
    }

    /// Creates a machine real.
    #[must_use]
    pub fn real(value: f64) -> Self {
        Self::RealDouble(RealDouble(value))
    }

    /// Creates a machine complex; never collapses.
    #[must_use]
    pub fn complex_double(re: f64, im: f64) -> Self {
        Self::ComplexDouble(ComplexDouble::new(re, im))
    }

    /// Creates an arbitrary-precision real from a machine value.
    #[must_use]
    pub fn real_big(value: f64, precision: usize) -> Self {
        Self::RealBig(RealBig::from_f64(value, precision))
    }

    fn collapse_complex(z: Complex) -> Self {
        if z.is_real() {
            Self::from_rational(z.real_part().clone())
        } else {
            Self::Complex(z)
        }
    }

    /// Returns true when the value is zero of its kind.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Rational(r) => r.is_zero(),
            Self::Complex(z) => z.is_zero(),
            Self::RealDouble(d) => d.is_zero(),
            Self::ComplexDouble(z) => z.is_zero(),
            Self::RealBig(x) => x.is_zero(),
            Self::ComplexBig(z) => z.is_zero(),
        }
    }

    /// Returns true when the value is an exact one.
    ///
    /// Inexact kinds never report one: a machine or arbitrary-precision
    /// value is an approximation, and treating it as the multiplicative
    /// identity would erase its kind from a product.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_one(),
            Self::Rational(r) => r.is_one(),
            Self::Complex(z) => z.real_part().is_one() && z.imaginary_part().is_zero(),
            _ => false,
        }
    }

    /// Returns true when the value is an exact minus one.
    #[must_use]
    pub fn is_minus_one(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_minus_one(),
            Self::Rational(r) => r.signum() == -1 && r.abs().is_one(),
            _ => false,
        }
    }

    /// Returns true for negative real-kind values; complex kinds have no
    /// sign.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_negative(),
            Self::Rational(r) => r.is_negative(),
            Self::RealDouble(d) => d.is_negative(),
            Self::RealBig(x) => x.is_negative(),
            Self::Complex(_) | Self::ComplexDouble(_) | Self::ComplexBig(_) => false,
        }
    }

    /// Returns true for positive real-kind values.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_positive(),
            Self::Rational(r) => r.is_positive(),
            Self::RealDouble(d) => d.is_positive(),
            Self::RealBig(x) => x.is_positive(),
            Self::Complex(_) | Self::ComplexDouble(_) | Self::ComplexBig(_) => false,
        }
    }

    /// Returns true for the exact kinds.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            Self::Integer(_) | Self::Rational(_) | Self::Complex(_)
        )
    }

    /// Returns true when the value is an exact zero.
    #[must_use]
    pub fn is_exact_zero(&self) -> bool {
        self.is_exact() && self.is_zero()
    }

    /// Returns true for the complex kinds.
    #[must_use]
    pub fn is_complex_kind(&self) -> bool {
        matches!(
            self,
            Self::Complex(_) | Self::ComplexDouble(_) | Self::ComplexBig(_)
        )
    }

    /// Returns the explicit bit precision of the arbitrary-precision
    /// kinds.
    #[must_use]
    pub fn precision(&self) -> Option<usize> {
        match self {
            Self::RealBig(x) => Some(x.precision()),
            Self::ComplexBig(z) => Some(z.precision()),
            _ => None,
        }
    }

    /// Returns the exact integer value, if this is one.
    #[must_use]
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the exact rational value, if this is one.
    #[must_use]
    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            Self::Rational(r) => Some(r),
            _ => None,
        }
    }

    /// The real part, as a value of the matching real kind.
    #[must_use]
    pub fn real_part(&self) -> Self {
        match self {
            Self::Integer(_) | Self::Rational(_) | Self::RealDouble(_) | Self::RealBig(_) => {
                self.clone()
            }
            Self::Complex(z) => Self::from_rational(z.real_part().clone()),
            Self::ComplexDouble(z) => Self::real(z.real()),
            Self::ComplexBig(z) => {
                Self::RealBig(RealBig::new(z.real().clone(), z.precision()))
            }
        }
    }

    /// The imaginary part, as a value of the matching real kind.
    #[must_use]
    pub fn imaginary_part(&self) -> Self {
        match self {
            Self::Integer(_) | Self::Rational(_) => Self::zero(),
            Self::Complex(z) => Self::from_rational(z.imaginary_part().clone()),
            Self::RealDouble(_) => Self::real(0.0),
            Self::ComplexDouble(z) => Self::real(z.imag()),
            Self::RealBig(x) => Self::RealBig(RealBig::zero(x.precision())),
            Self::ComplexBig(z) => {
                Self::RealBig(RealBig::new(z.imag().clone(), z.precision()))
            }
        }
    }

    /// Lossy conversion to a machine double; `None` for complex kinds.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(n.to_f64()),
            Self::Rational(r) => Some(r.to_f64()),
            Self::RealDouble(d) => Some(d.value()),
            Self::RealBig(x) => Some(x.to_f64()),
            Self::Complex(_) | Self::ComplexDouble(_) | Self::ComplexBig(_) => None,
        }
    }

    fn tier(&self) -> Tier {
        match self {
            Self::Integer(_) | Self::Rational(_) | Self::Complex(_) => Tier::Exact,
            Self::RealDouble(_) | Self::ComplexDouble(_) => Tier::Machine,
            Self::RealBig(_) | Self::ComplexBig(_) => Tier::Big,
        }
    }

    fn to_rational_lossless(&self) -> Rational {
        match self {
            Self::Integer(n) => Rational::from_integer(n.clone()),
            Self::Rational(r) => r.clone(),
            _ => unreachable!("exact real promotion on an inexact kind"),
        }
    }

    fn to_exact_complex(&self) -> Complex {
        match self {
            Self::Complex(z) => z.clone(),
            _ => Complex::from_parts(self.to_rational_lossless(), Rational::zero()),
        }
    }

    fn to_machine(&self) -> f64 {
        match self {
            Self::Integer(n) => n.to_f64(),
            Self::Rational(r) => r.to_f64(),
            Self::RealDouble(d) => d.value(),
            _ => unreachable!("machine promotion on a complex or big kind"),
        }
    }

    fn to_complex_machine(&self) -> ComplexDouble {
        match self {
            Self::Complex(z) => {
                let (re, im) = z.to_f64_parts();
                ComplexDouble::new(re, im)
            }
            Self::ComplexDouble(z) => *z,
            _ => ComplexDouble::new(self.to_machine(), 0.0),
        }
    }

    fn to_real_big(&self, precision: usize) -> RealBig {
        match self {
            Self::Integer(n) => RealBig::from_integer(n, precision),
            Self::Rational(r) => RealBig::from_rational(r, precision),
            Self::RealDouble(d) => RealBig::from_f64(d.value(), precision),
            Self::RealBig(x) => x.clone(),
            _ => unreachable!("real promotion on a complex kind"),
        }
    }

    fn to_complex_big(&self, precision: usize) -> ComplexBig {
        match self {
            Self::Complex(z) => ComplexBig::new(
                RealBig::from_rational(z.real_part(), precision)
                    .value()
                    .clone(),
                RealBig::from_rational(z.imaginary_part(), precision)
                    .value()
                    .clone(),
                precision,
            ),
            Self::ComplexDouble(z) => ComplexBig::new(
                RealBig::from_f64(z.real(), precision).value().clone(),
                RealBig::from_f64(z.imag(), precision).value().clone(),
                precision,
            ),
            Self::ComplexBig(z) => z.clone(),
            _ => ComplexBig::from_real(&self.to_real_big(precision)),
        }
    }

    /// Working precision for a pair with at least one arbitrary-precision
    /// operand: the maximum over the arbitrary-precision operands only, so
    /// machine and exact operands never raise it.
    fn joint_precision(&self, other: &Self) -> usize {
        match (self.precision(), other.precision()) {
            (Some(a), Some(b)) => a.max(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => unreachable!("joint precision without a big operand"),
        }
    }

    fn align(&self, other: &Self) -> Aligned {
        let tier = self.tier().max(other.tier());
        let complex = self.is_complex_kind() || other.is_complex_kind();
        match (tier, complex) {
            (Tier::Exact, false) => {
                if let (Self::Integer(a), Self::Integer(b)) = (self, other) {
                    Aligned::Integer(a.clone(), b.clone())
                } else {
                    Aligned::Rational(self.to_rational_lossless(), other.to_rational_lossless())
                }
            }
            (Tier::Exact, true) => {
                Aligned::Complex(self.to_exact_complex(), other.to_exact_complex())
            }
            (Tier::Machine, false) => {
                Aligned::RealDouble(self.to_machine(), other.to_machine())
            }
            (Tier::Machine, true) => Aligned::ComplexDouble(
                self.to_complex_machine(),
                other.to_complex_machine(),
            ),
            (Tier::Big, false) => {
                let p = self.joint_precision(other);
                Aligned::RealBig(self.to_real_big(p), other.to_real_big(p), p)
            }
            (Tier::Big, true) => {
                let p = self.joint_precision(other);
                Aligned::ComplexBig(self.to_complex_big(p), other.to_complex_big(p), p)
            }
        }
    }

    /// Addition with promotion.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match self.align(other) {
            Aligned::Integer(a, b) => Self::Integer(a + b),
            Aligned::Rational(a, b) => Self::from_rational(a + b),
            Aligned::Complex(a, b) => Self::collapse_complex(a.add(&b)),
            Aligned::RealDouble(a, b) => Self::real(a + b),
            Aligned::ComplexDouble(a, b) => Self::ComplexDouble(a.add(b)),
            Aligned::RealBig(a, b, p) => Self::RealBig(a.add(&b, p)),
            Aligned::ComplexBig(a, b, p) => Self::ComplexBig(a.add(&b, p)),
        }
    }

    /// Subtraction with promotion.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        match self.align(other) {
            Aligned::Integer(a, b) => Self::Integer(a - b),
            Aligned::Rational(a, b) => Self::from_rational(a - b),
            Aligned::Complex(a, b) => Self::collapse_complex(a.sub(&b)),
            Aligned::RealDouble(a, b) => Self::real(a - b),
            Aligned::ComplexDouble(a, b) => Self::ComplexDouble(a.sub(b)),
            Aligned::RealBig(a, b, p) => Self::RealBig(a.sub(&b, p)),
            Aligned::ComplexBig(a, b, p) => Self::ComplexBig(a.sub(&b, p)),
        }
    }

    /// Multiplication with promotion.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        match self.align(other) {
            Aligned::Integer(a, b) => Self::Integer(a * b),
            Aligned::Rational(a, b) => Self::from_rational(a * b),
            Aligned::Complex(a, b) => Self::collapse_complex(a.mul(&b)),
            Aligned::RealDouble(a, b) => Self::real(a * b),
            Aligned::ComplexDouble(a, b) => Self::ComplexDouble(a.mul(b)),
            Aligned::RealBig(a, b, p) => Self::RealBig(a.mul(&b, p)),
            Aligned::ComplexBig(a, b, p) => Self::ComplexBig(a.mul(&b, p)),
        }
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::minus_one().mul(self)
    }

    /// Division with promotion.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when the divisor is an
    /// exact zero. Inexact zero divisors follow IEEE semantics.
    pub fn div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        match self.align(other) {
            Aligned::Integer(a, b) => {
                if b.is_zero() {
                    return Err(ArithmeticError::DivisionByZero);
                }
                Ok(Self::from_rational(Rational::new(a, b)?))
            }
            Aligned::Rational(a, b) => {
                if b.is_zero() {
                    return Err(ArithmeticError::DivisionByZero);
                }
                Ok(Self::from_rational(a / b))
            }
            Aligned::Complex(a, b) => Ok(Self::collapse_complex(a.div(&b)?)),
            Aligned::RealDouble(a, b) => Ok(Self::real(a / b)),
            Aligned::ComplexDouble(a, b) => Ok(Self::ComplexDouble(a.div(b))),
            Aligned::RealBig(a, b, p) => Ok(Self::RealBig(a.div(&b, p))),
            Aligned::ComplexBig(a, b, p) => Ok(Self::ComplexBig(a.div(&b, p))),
        }
    }

    /// Power with promotion.
    ///
    /// Exact bases with exact non-integer exponents are not closed at
    /// this layer and report a domain error; the expression layer owns
    /// perfect-power extraction and symbolic residuals.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] for negative powers of exact
    /// zero; [`ArithmeticError::DomainError`] for exponents this layer
    /// cannot close over.
    pub fn pow(&self, other: &Self) -> Result<Self, ArithmeticError> {
        // Arbitrary-precision tier.
        if self.tier() == Tier::Big || other.tier() == Tier::Big {
            let p = self.joint_precision(other);
            if self.is_complex_kind() || other.is_complex_kind() {
                let z = self.to_complex_big(p);
                let w = other.to_complex_big(p);
                return Ok(Self::ComplexBig(z.pow(&w, p)));
            }
            let base = self.to_real_big(p);
            if let Self::Integer(e) = other {
                return Ok(Self::RealBig(base.pow_integer(e, p)?));
            }
            if base.is_negative() {
                // Mirrors the real-power-to-complex branch: a negative
                // base with a non-integer exponent promotes to the
                // arbitrary-precision complex kind.
                let z = ComplexBig::from_real(&base);
                let w = other.to_complex_big(p);
                return Ok(Self::ComplexBig(z.pow(&w, p)));
            }
            let e = other.to_real_big(p);
            return Ok(Self::RealBig(base.pow_real(&e, p)));
        }

        // Machine tier.
        if self.tier() == Tier::Machine || other.tier() == Tier::Machine {
            if self.is_complex_kind() || other.is_complex_kind() {
                let z = self.to_complex_machine();
                let w = other.to_complex_machine();
                return Ok(Self::ComplexDouble(z.pow(w)));
            }
            let b = self.to_machine();
            let e = other.to_machine();
            if b < 0.0 && !matches!(other, Self::Integer(_)) {
                let z = ComplexDouble::new(b, 0.0);
                return Ok(Self::ComplexDouble(z.pow(ComplexDouble::new(e, 0.0))));
            }
            return Ok(Self::real(b.powf(e)));
        }

        // Exact tier.
        let Self::Integer(e) = other else {
            return Err(ArithmeticError::domain("exact power"));
        };
        match self {
            Self::Integer(a) => Self::integer_pow(a, e),
            Self::Rational(a) => {
                let small = Self::small_exponent(e)?;
                Ok(Self::from_rational(a.pow_signed(small)?))
            }
            Self::Complex(z) => Ok(Self::collapse_complex(z.pow_integer(e)?)),
            _ => unreachable!("exact tier with an inexact operand"),
        }
    }

    fn small_exponent(e: &Integer) -> Result<i32, ArithmeticError> {
        e.to_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or(ArithmeticError::domain("integer power"))
    }

    fn integer_pow(a: &Integer, e: &Integer) -> Result<Self, ArithmeticError> {
        let small = Self::small_exponent(e)?;
        if small >= 0 {
            Ok(Self::Integer(a.pow(small.unsigned_abs())))
        } else {
            if a.is_zero() {
                return Err(ArithmeticError::DivisionByZero);
            }
            let magnitude = a.pow(small.unsigned_abs());
            Ok(Self::from_rational(Rational::new(
                Integer::one(),
                magnitude,
            )?))
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Integer(_) => 0,
            Self::Rational(_) => 1,
            Self::Complex(_) => 2,
            Self::RealDouble(_) => 3,
            Self::ComplexDouble(_) => 4,
            Self::RealBig(_) => 5,
            Self::ComplexBig(_) => 6,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Rational(a), Self::Rational(b)) => a.cmp(b),
            (Self::Complex(a), Self::Complex(b)) => a.cmp(b),
            (Self::RealDouble(a), Self::RealDouble(b)) => a.cmp(b),
            (Self::ComplexDouble(a), Self::ComplexDouble(b)) => a.cmp(b),
            (Self::RealBig(a), Self::RealBig(b)) => a.cmp(b),
            (Self::ComplexBig(a), Self::ComplexBig(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Rational(r) => write!(f, "{r}"),
            Self::Complex(z) => write!(f, "{z}"),
            Self::RealDouble(d) => write!(f, "{d}"),
            Self::ComplexDouble(z) => write!(f, "{z}"),
            Self::RealBig(x) => write!(f, "{x}"),
            Self::ComplexBig(z) => write!(f, "{z}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::integer(i64::from(value))
    }
}

impl From<Integer> for Number {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::real(value)
    }
}

impl From<RealBig> for Number {
    fn from(value: RealBig) -> Self {
        Self::RealBig(value)
    }
}

impl From<ComplexBig> for Number {
    fn from(value: ComplexBig) -> Self {
        Self::ComplexBig(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> Number {
        Number::rational(n, d).unwrap()
    }

    #[test]
    fn exactness_preserved() {
        let sum = rat(1, 2).add(&rat(1, 3));
        assert_eq!(sum, rat(5, 6));
    }

    #[test]
    fn integers_fold() {
        assert_eq!(
            Number::integer(2).mul(&Number::integer(3)),
            Number::integer(6)
        );
    }

    #[test]
    fn rational_collapses_to_integer() {
        assert_eq!(rat(1, 2).add(&rat(1, 2)), Number::integer(1));
        assert_eq!(rat(2, 3).mul(&rat(9, 2)), Number::integer(3));
    }

    #[test]
    fn machine_promotion() {
        let sum = Number::real(1.5).add(&Number::integer(2));
        assert_eq!(sum, Number::real(3.5));
    }

    #[test]
    fn machine_never_raises_big_precision() {
        let big = Number::real_big(1.5, 200);
        let sum = Number::real(0.5).add(&big);
        assert_eq!(sum.precision(), Some(200));
        assert!(matches!(sum, Number::RealBig(_)));
    }

    #[test]
    fn big_precision_is_max() {
        let a = Number::real_big(1.0, 64);
        let b = Number::real_big(2.0, 192);
        assert_eq!(a.add(&b).precision(), Some(192));
    }

    #[test]
    fn complex_absorption() {
        let z = Number::complex(
            Rational::from_i64(1, 1).unwrap(),
            Rational::from_i64(1, 1).unwrap(),
        );
        let w = Number::complex(
            Rational::from_i64(1, 1).unwrap(),
            Rational::from_i64(-1, 1).unwrap(),
        );
        assert_eq!(z.mul(&w), Number::integer(2));
    }

    #[test]
    fn division_by_exact_zero_fails() {
        assert_eq!(
            Number::integer(1).div(&Number::integer(0)).unwrap_err(),
            ArithmeticError::DivisionByZero
        );
        assert_eq!(
            rat(1, 2).div(&Number::integer(0)).unwrap_err(),
            ArithmeticError::DivisionByZero
        );
    }

    #[test]
    fn division_by_machine_zero_is_ieee() {
        let q = Number::real(1.0).div(&Number::real(0.0)).unwrap();
        assert_eq!(q, Number::real(f64::INFINITY));
    }

    #[test]
    fn integer_powers() {
        assert_eq!(
            Number::integer(2).pow(&Number::integer(10)).unwrap(),
            Number::integer(1024)
        );
        assert_eq!(
            Number::integer(2).pow(&Number::integer(-2)).unwrap(),
            rat(1, 4)
        );
        assert_eq!(
            Number::integer(0)
                .pow(&Number::integer(-1))
                .unwrap_err(),
            ArithmeticError::DivisionByZero
        );
    }

    #[test]
    fn inexact_pair_folds() {
        let p = Number::real(0.5).pow(&Number::real(2.0)).unwrap();
        assert_eq!(p, Number::real(0.25));
    }

    #[test]
    fn typed_one_from_zero_exponent() {
        let p = Number::real(0.0).pow(&Number::integer(0)).unwrap();
        assert_eq!(p, Number::real(1.0));
        assert!(!p.is_one());
    }

    #[test]
    fn negative_machine_base_promotes_to_complex() {
        let p = Number::real(-2.0).pow(&rat(1, 2)).unwrap();
        assert!(matches!(p, Number::ComplexDouble(_)));
    }

    #[test]
    fn negative_big_base_promotes_to_complex_big() {
        let base = Number::real_big(-2.0, 96);
        let p = base.pow(&rat(1, 2)).unwrap();
        assert!(matches!(p, Number::ComplexBig(_)));
        assert_eq!(p.precision(), Some(96));
    }

    #[test]
    fn negative_big_base_integer_exponent_stays_real() {
        let base = Number::real_big(-2.0, 64);
        let p = base.pow(&Number::integer(3)).unwrap();
        assert!(matches!(p, Number::RealBig(_)));
        assert_eq!(p.to_f64(), Some(-8.0));
    }

    #[test]
    fn exact_power_with_rational_exponent_is_open() {
        let err = Number::integer(2).pow(&rat(1, 2)).unwrap_err();
        assert_eq!(err, ArithmeticError::domain("exact power"));
    }

    #[test]
    fn real_and_imaginary_parts() {
        let z = Number::complex(
            Rational::from_i64(3, 1).unwrap(),
            Rational::from_i64(-2, 1).unwrap(),
        );
        assert_eq!(z.real_part(), Number::integer(3));
        assert_eq!(z.imaginary_part(), Number::integer(-2));

        let d = Number::complex_double(1.5, 2.5);
        assert_eq!(d.real_part(), Number::real(1.5));
        assert_eq!(d.imaginary_part(), Number::real(2.5));
    }

    #[test]
    fn kind_ordering_is_total() {
        let mut xs = vec![
            Number::real(1.0),
            Number::integer(5),
            rat(1, 2),
            Number::real_big(1.0, 64),
        ];
        xs.sort();
        assert_eq!(xs[0], Number::integer(5));
        assert!(matches!(xs[3], Number::RealBig(_)));
    }
}
