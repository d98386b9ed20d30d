//! Machine precision real and complex numbers.
//!
//! Both kinds are inexact: `is_one` is always false (a machine value is
//! never an exact 1), and a [`ComplexDouble`] never collapses to a
//! [`RealDouble`] even when its imaginary part is `0.0`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A machine precision (f64) real number.
#[derive(Clone, Copy, Debug)]
pub struct RealDouble(
    /// The wrapped machine value.
    pub f64,
);

impl RealDouble {
    /// Normalized bit pattern: `-0.0` folds to `0.0` and every NaN to the
    /// canonical NaN, so equality, ordering and hashing agree.
    fn key(self) -> u64 {
        if self.0 == 0.0 {
            0.0f64.to_bits()
        } else if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true when the value is exactly `0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Returns true if positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl PartialEq for RealDouble {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RealDouble {}

impl Hash for RealDouble {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for RealDouble {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RealDouble {
    fn cmp(&self, other: &Self) -> Ordering {
        f64::from_bits(self.key()).total_cmp(&f64::from_bits(other.key()))
    }
}

impl fmt::Display for RealDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A machine precision complex number stored as an (re, im) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComplexDouble {
    re: RealDouble,
    im: RealDouble,
}

impl ComplexDouble {
    /// Creates a complex value from real and imaginary parts.
    #[must_use]
    pub fn new(re: f64, im: f64) -> Self {
        Self {
            re: RealDouble(re),
            im: RealDouble(im),
        }
    }

    /// Returns the real part.
    #[must_use]
    pub fn real(self) -> f64 {
        self.re.0
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn imag(self) -> f64 {
        self.im.0
    }

    /// Returns true when both parts are exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Componentwise addition.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.real() + other.real(), self.imag() + other.imag())
    }

    /// Componentwise subtraction.
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.real() - other.real(), self.imag() - other.imag())
    }

    /// Complex multiplication.
    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        let (a, b) = (self.real(), self.imag());
        let (c, d) = (other.real(), other.imag());
        Self::new(a * c - b * d, a * d + b * c)
    }

    /// Complex division. A zero divisor produces IEEE non-finite parts,
    /// as machine arithmetic does.
    #[must_use]
    pub fn div(self, other: Self) -> Self {
        let norm = other.real() * other.real() + other.imag() * other.imag();
        let num = self.mul(other.conjugate());
        Self::new(num.real() / norm, num.imag() / norm)
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(self.real(), -self.imag())
    }

    /// Natural logarithm: `(ln |z|, atan2(im, re))`.
    #[must_use]
    pub fn ln(self) -> Self {
        let modulus = self.real().hypot(self.imag());
        Self::new(modulus.ln(), self.imag().atan2(self.real()))
    }

    /// Complex exponential: `e^re * (cos im + i sin im)`.
    #[must_use]
    pub fn exp(self) -> Self {
        let scale = self.real().exp();
        Self::new(scale * self.im.0.cos(), scale * self.im.0.sin())
    }

    /// Complex power `self^exp` through `exp(exp * ln self)`.
    #[must_use]
    pub fn pow(self, exp: Self) -> Self {
        if self.is_zero() {
            return Self::new(0.0, 0.0);
        }
        exp.mul(self.ln()).exp()
    }
}

impl fmt::Display for ComplexDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag() < 0.0 {
            write!(f, "{} - {}*I", self.real(), -self.imag())
        } else {
            write!(f, "{} + {}*I", self.real(), self.imag())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_key_folding() {
        assert_eq!(RealDouble(0.0), RealDouble(-0.0));
        assert_eq!(RealDouble(f64::NAN), RealDouble(-f64::NAN));
    }

    #[test]
    fn ordering_is_total() {
        let mut xs = [
            RealDouble(1.5),
            RealDouble(-2.0),
            RealDouble(0.0),
            RealDouble(f64::INFINITY),
        ];
        xs.sort();
        assert_eq!(xs[0], RealDouble(-2.0));
        assert_eq!(xs[3], RealDouble(f64::INFINITY));
    }

    #[test]
    fn complex_mul_div() {
        let z = ComplexDouble::new(1.0, 1.0);
        let w = ComplexDouble::new(1.0, -1.0);
        let p = z.mul(w);
        assert_eq!(p.real(), 2.0);
        assert_eq!(p.imag(), 0.0);

        let q = p.div(z);
        assert!((q.real() - w.real()).abs() < 1e-12);
        assert!((q.imag() - w.imag()).abs() < 1e-12);
    }

    #[test]
    fn complex_pow() {
        // i^2 = -1
        let i = ComplexDouble::new(0.0, 1.0);
        let p = i.pow(ComplexDouble::new(2.0, 0.0));
        assert!((p.real() + 1.0).abs() < 1e-12);
        assert!(p.imag().abs() < 1e-12);
    }
}
