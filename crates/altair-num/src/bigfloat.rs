//! Arbitrary precision real and complex numbers.
//!
//! Both kinds wrap `astro_float::BigFloat` and carry an explicit bit
//! precision. The precision is part of the value's identity: two values
//! are unequal whenever their precisions differ, even if numerically
//! identical, and ordering and hashing agree with that. This is
//! deliberate behavior that canonical forms depend on.
//!
//! Every operation takes the target precision explicitly; the constants
//! cache needed by the transcendental kernels is thread-local.

use astro_float::{BigFloat, Consts, RoundingMode};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ArithmeticError;
use crate::{Integer, Rational};

/// Rounding mode used for every arbitrary-precision operation.
pub const RM: RoundingMode = RoundingMode::ToEven;

/// Guard bits used for intermediate results of composite kernels.
const GUARD: usize = 32;

thread_local! {
    static CONSTS: RefCell<Consts> =
        RefCell::new(Consts::new().expect("constants cache allocation"));
}

fn with_consts<T>(f: impl FnOnce(&mut Consts) -> T) -> T {
    CONSTS.with(|cell| f(&mut cell.borrow_mut()))
}

fn cmp_values(a: &BigFloat, b: &BigFloat) -> Ordering {
    match a.cmp(b) {
        Some(c) => c.cmp(&0),
        // NaN sorts above every number and equal to itself.
        None => match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => Ordering::Equal,
        },
    }
}

fn values_equal(a: &BigFloat, b: &BigFloat) -> bool {
    a.cmp(b) == Some(0) || (a.is_nan() && b.is_nan())
}

fn integer_to_float(n: &Integer, precision: usize) -> BigFloat {
    let wp = n.as_inner().to_string().len() * 4 + GUARD;
    let wp = wp.max(precision + GUARD);
    let bytes = n.abs().as_inner().to_string();
    let mut acc = BigFloat::new(wp);
    let ten = BigFloat::from_word(10, wp);
    for digit in bytes.bytes() {
        let d = BigFloat::from_word(u64::from(digit - b'0'), wp);
        acc = acc.mul(&ten, wp, RM).add(&d, wp, RM);
    }
    if n.is_negative() {
        acc = acc.neg();
    }
    acc.set_precision(precision, RM)
        .expect("precision adjustment");
    acc
}

fn rational_to_float(r: &Rational, precision: usize) -> BigFloat {
    let wp = precision + GUARD;
    let num = integer_to_float(&r.numerator(), wp);
    let den = integer_to_float(&r.denominator(), wp);
    let mut q = num.div(&den, wp, RM);
    q.set_precision(precision, RM)
        .expect("precision adjustment");
    q
}

/// An arbitrary precision real number with explicit bit precision.
#[derive(Clone, Debug)]
pub struct RealBig {
    value: BigFloat,
    precision: usize,
}

impl RealBig {
    /// Wraps an already-computed value at the given precision.
    #[must_use]
    pub fn new(value: BigFloat, precision: usize) -> Self {
        Self { value, precision }
    }

    /// Creates a value from a machine double at the given precision.
    #[must_use]
    pub fn from_f64(value: f64, precision: usize) -> Self {
        Self::new(BigFloat::from_f64(value, precision), precision)
    }

    /// Converts an exact integer at the given precision.
    #[must_use]
    pub fn from_integer(n: &Integer, precision: usize) -> Self {
        Self::new(integer_to_float(n, precision), precision)
    }

    /// Converts an exact rational at the given precision.
    #[must_use]
    pub fn from_rational(r: &Rational, precision: usize) -> Self {
        Self::new(rational_to_float(r, precision), precision)
    }

    /// The additive identity at the given precision.
    #[must_use]
    pub fn zero(precision: usize) -> Self {
        Self::new(BigFloat::new(precision), precision)
    }

    /// The multiplicative identity at the given precision.
    #[must_use]
    pub fn one(precision: usize) -> Self {
        Self::new(BigFloat::from_word(1, precision), precision)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn value(&self) -> &BigFloat {
        &self.value
    }

    /// Returns the bit precision.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Returns true when the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative() && !self.value.is_zero()
    }

    /// Returns true if positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value.is_positive() && !self.value.is_zero()
    }

    /// Negation, keeping the precision.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.value.neg(), self.precision)
    }

    /// Addition at the given target precision.
    #[must_use]
    pub fn add(&self, other: &Self, precision: usize) -> Self {
        Self::new(self.value.add(&other.value, precision, RM), precision)
    }

    /// Subtraction at the given target precision.
    #[must_use]
    pub fn sub(&self, other: &Self, precision: usize) -> Self {
        Self::new(self.value.sub(&other.value, precision, RM), precision)
    }

    /// Multiplication at the given target precision.
    #[must_use]
    pub fn mul(&self, other: &Self, precision: usize) -> Self {
        Self::new(self.value.mul(&other.value, precision, RM), precision)
    }

    /// Division at the given target precision. A zero divisor produces an
    /// infinity, as inexact arithmetic does.
    #[must_use]
    pub fn div(&self, other: &Self, precision: usize) -> Self {
        Self::new(self.value.div(&other.value, precision, RM), precision)
    }

    /// Integer power by binary exponentiation, correct for negative bases.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the exponent does not fit an `i64`.
    pub fn pow_integer(&self, exp: &Integer, precision: usize) -> Result<Self, ArithmeticError> {
        let Some(e) = exp.to_i64() else {
            return Err(ArithmeticError::domain("big float integer power"));
        };
        let wp = precision + GUARD;
        let mut result = BigFloat::from_word(1, wp);
        let mut base = self.value.clone();
        let mut n = e.unsigned_abs();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul(&base, wp, RM);
            }
            base = base.mul(&base, wp, RM);
            n >>= 1;
        }
        if e < 0 {
            result = BigFloat::from_word(1, wp).div(&result, wp, RM);
        }
        result
            .set_precision(precision, RM)
            .expect("precision adjustment");
        Ok(Self::new(result, precision))
    }

    /// Real power for a non-negative base.
    ///
    /// The caller is responsible for routing negative bases with
    /// non-integer exponents to [`ComplexBig::pow`].
    #[must_use]
    pub fn pow_real(&self, exp: &Self, precision: usize) -> Self {
        let value = with_consts(|cc| self.value.pow(&exp.value, precision, RM, cc));
        Self::new(value, precision)
    }

    /// Lossy conversion to a machine double.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.value.is_nan() {
            return f64::NAN;
        }
        if self.value.is_inf_pos() {
            return f64::INFINITY;
        }
        if self.value.is_inf_neg() {
            return f64::NEG_INFINITY;
        }
        self.value.to_string().parse::<f64>().unwrap_or(f64::NAN)
    }
}

impl PartialEq for RealBig {
    fn eq(&self, other: &Self) -> bool {
        self.precision == other.precision && values_equal(&self.value, &other.value)
    }
}

impl Eq for RealBig {}

impl Hash for RealBig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.precision.hash(state);
        if self.value.is_zero() {
            // +0 and -0 compare equal.
            "0".hash(state);
        } else {
            self.value.to_string().hash(state);
        }
    }
}

impl PartialOrd for RealBig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealBig {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precision
            .cmp(&other.precision)
            .then_with(|| cmp_values(&self.value, &other.value))
    }
}

impl fmt::Display for RealBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An arbitrary precision complex number with explicit bit precision.
#[derive(Clone, Debug)]
pub struct ComplexBig {
    re: BigFloat,
    im: BigFloat,
    precision: usize,
}

impl ComplexBig {
    /// Creates a complex value from parts at the given precision.
    #[must_use]
    pub fn new(re: BigFloat, im: BigFloat, precision: usize) -> Self {
        Self { re, im, precision }
    }

    /// Promotes a real value, with a zero imaginary part at the same
    /// precision.
    #[must_use]
    pub fn from_real(re: &RealBig) -> Self {
        Self::new(
            re.value.clone(),
            BigFloat::new(re.precision),
            re.precision,
        )
    }

    /// Returns the real part.
    #[must_use]
    pub fn real(&self) -> &BigFloat {
        &self.re
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn imag(&self) -> &BigFloat {
        &self.im
    }

    /// Returns the bit precision.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Returns true when both parts are exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Componentwise addition at the given precision.
    #[must_use]
    pub fn add(&self, other: &Self, precision: usize) -> Self {
        Self::new(
            self.re.add(&other.re, precision, RM),
            self.im.add(&other.im, precision, RM),
            precision,
        )
    }

    /// Componentwise subtraction at the given precision.
    #[must_use]
    pub fn sub(&self, other: &Self, precision: usize) -> Self {
        Self::new(
            self.re.sub(&other.re, precision, RM),
            self.im.sub(&other.im, precision, RM),
            precision,
        )
    }

    /// Complex multiplication at the given precision.
    #[must_use]
    pub fn mul(&self, other: &Self, precision: usize) -> Self {
        let wp = precision + GUARD;
        let ac = self.re.mul(&other.re, wp, RM);
        let bd = self.im.mul(&other.im, wp, RM);
        let ad = self.re.mul(&other.im, wp, RM);
        let bc = self.im.mul(&other.re, wp, RM);
        let mut re = ac.sub(&bd, wp, RM);
        let mut im = ad.add(&bc, wp, RM);
        re.set_precision(precision, RM).expect("precision adjustment");
        im.set_precision(precision, RM).expect("precision adjustment");
        Self::new(re, im, precision)
    }

    /// Complex division through the conjugate at the given precision.
    #[must_use]
    pub fn div(&self, other: &Self, precision: usize) -> Self {
        let wp = precision + GUARD;
        let norm = other
            .re
            .mul(&other.re, wp, RM)
            .add(&other.im.mul(&other.im, wp, RM), wp, RM);
        let num = self.mul(&other.conjugate(), wp);
        let mut re = num.re.div(&norm, wp, RM);
        let mut im = num.im.div(&norm, wp, RM);
        re.set_precision(precision, RM).expect("precision adjustment");
        im.set_precision(precision, RM).expect("precision adjustment");
        Self::new(re, im, precision)
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), self.im.neg(), self.precision)
    }

    fn atan2(y: &BigFloat, x: &BigFloat, precision: usize) -> BigFloat {
        with_consts(|cc| {
            if x.is_zero() {
                if y.is_zero() {
                    return BigFloat::new(precision);
                }
                let half_pi =
                    cc.pi(precision, RM)
                        .div(&BigFloat::from_word(2, precision), precision, RM);
                return if y.is_negative() { half_pi.neg() } else { half_pi };
            }
            let base = y.div(x, precision, RM).atan(precision, RM, cc);
            if x.is_positive() {
                base
            } else if y.is_negative() {
                base.sub(&cc.pi(precision, RM), precision, RM)
            } else {
                base.add(&cc.pi(precision, RM), precision, RM)
            }
        })
    }

    /// Complex natural logarithm: `(ln |z|, arg z)`.
    #[must_use]
    pub fn ln(&self, precision: usize) -> Self {
        let wp = precision + GUARD;
        let norm = self
            .re
            .mul(&self.re, wp, RM)
            .add(&self.im.mul(&self.im, wp, RM), wp, RM);
        let modulus = norm.sqrt(wp, RM);
        let re = with_consts(|cc| modulus.ln(precision, RM, cc));
        let im = Self::atan2(&self.im, &self.re, precision);
        Self::new(re, im, precision)
    }

    /// Complex exponential: `e^re * (cos im + i sin im)`.
    #[must_use]
    pub fn exp(&self, precision: usize) -> Self {
        let wp = precision + GUARD;
        with_consts(|cc| {
            let scale = self.re.exp(wp, RM, cc);
            let mut re = scale.mul(&self.im.cos(wp, RM, cc), wp, RM);
            let mut im = scale.mul(&self.im.sin(wp, RM, cc), wp, RM);
            re.set_precision(precision, RM).expect("precision adjustment");
            im.set_precision(precision, RM).expect("precision adjustment");
            Self::new(re, im, precision)
        })
    }

    /// Complex power `self^exp = exp(exp * ln self)`.
    ///
    /// A zero base yields zero, matching the principal-branch convention
    /// for positive-real-part exponents.
    #[must_use]
    pub fn pow(&self, exp: &Self, precision: usize) -> Self {
        if self.is_zero() {
            return Self::new(BigFloat::new(precision), BigFloat::new(precision), precision);
        }
        let wp = precision + GUARD;
        let product = exp.mul(&self.ln(wp), wp);
        product.exp(precision)
    }

    /// Lossy conversion to a machine (re, im) pair.
    #[must_use]
    pub fn to_f64_parts(&self) -> (f64, f64) {
        let re = RealBig::new(self.re.clone(), self.precision).to_f64();
        let im = RealBig::new(self.im.clone(), self.precision).to_f64();
        (re, im)
    }
}

impl PartialEq for ComplexBig {
    fn eq(&self, other: &Self) -> bool {
        self.precision == other.precision
            && values_equal(&self.re, &other.re)
            && values_equal(&self.im, &other.im)
    }
}

impl Eq for ComplexBig {}

impl Hash for ComplexBig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.precision.hash(state);
        self.re.to_string().hash(state);
        self.im.to_string().hash(state);
    }
}

impl PartialOrd for ComplexBig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComplexBig {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precision
            .cmp(&other.precision)
            .then_with(|| cmp_values(&self.re, &other.re))
            .then_with(|| cmp_values(&self.im, &other.im))
    }
}

impl fmt::Display for ComplexBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}*I", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_is_part_of_identity() {
        let a = RealBig::from_f64(1.5, 64);
        let b = RealBig::from_f64(1.5, 128);
        assert_ne!(a, b);
        assert_eq!(a, RealBig::from_f64(1.5, 64));
        assert!(a < b);
    }

    #[test]
    fn arithmetic_keeps_requested_precision() {
        let a = RealBig::from_f64(1.5, 128);
        let b = RealBig::from_f64(2.25, 128);
        let sum = a.add(&b, 128);
        assert_eq!(sum.precision(), 128);
        assert_eq!(sum.to_f64(), 3.75);
    }

    #[test]
    fn integer_conversion_round_trips() {
        let n = Integer::new(123_456_789);
        let x = RealBig::from_integer(&n, 96);
        assert_eq!(x.to_f64(), 123_456_789.0);

        let neg = Integer::new(-42);
        assert_eq!(RealBig::from_integer(&neg, 64).to_f64(), -42.0);
    }

    #[test]
    fn rational_conversion() {
        let r = Rational::from_i64(1, 4).unwrap();
        let x = RealBig::from_rational(&r, 64);
        assert_eq!(x.to_f64(), 0.25);
    }

    #[test]
    fn integer_power_with_negative_base() {
        let x = RealBig::from_f64(-2.0, 64);
        let cube = x.pow_integer(&Integer::new(3), 64).unwrap();
        assert_eq!(cube.to_f64(), -8.0);

        let inv = x.pow_integer(&Integer::new(-2), 64).unwrap();
        assert_eq!(inv.to_f64(), 0.25);
    }

    #[test]
    fn complex_power_squares_i() {
        let i = ComplexBig::new(BigFloat::new(64), BigFloat::from_word(1, 64), 64);
        let two = ComplexBig::new(BigFloat::from_word(2, 64), BigFloat::new(64), 64);
        let p = i.pow(&two, 64);
        let (re, im) = p.to_f64_parts();
        assert!((re + 1.0).abs() < 1e-12);
        assert!(im.abs() < 1e-12);
    }
}
